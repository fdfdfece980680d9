extern crate thiserror;

pub mod cmd;
pub mod compiler;

#[cfg(test)]
#[macro_use(assert_matches)]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
