pub mod file;
pub mod location;
pub mod origin;
pub mod registry;
pub mod string;

pub use file::FileSource;
pub use location::{HasSourceLocation, Location, Position, Span};
pub use origin::{HasOrigin, Origin};
pub use registry::Registry;
pub use string::StringSource;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub(crate) usize);

impl SourceId {
    /// Id for text that was never added to a [`Registry`].
    pub fn synthetic() -> Self {
        SourceId(usize::MAX)
    }
}

impl From<usize> for SourceId {
    fn from(id: usize) -> Self {
        SourceId(id)
    }
}

/// A borrowed view of registered (or synthetic) source text.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub id: SourceId,
    pub code: &'a str,
}

impl<'a> Source<'a> {
    pub fn new<Id: Into<SourceId>>(id: Id, code: &'a str) -> Self {
        Self {
            id: id.into(),
            code,
        }
    }

    pub fn synthetic(code: &'a str) -> Self {
        Self::new(SourceId::synthetic(), code)
    }
}
