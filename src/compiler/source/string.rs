use super::{HasOrigin, Origin};
use std::io::{Cursor, Read};

/// In-memory source text, optionally labelled for diagnostics.
#[derive(Clone, Debug)]
pub struct StringSource {
    content: Cursor<String>,
    label: Option<String>,
}

impl StringSource {
    pub fn new<C: Into<String>>(content: C) -> Self {
        Self {
            content: Cursor::new(content.into()),
            label: None,
        }
    }

    pub fn labelled<C: Into<String>, L: Into<String>>(content: C, label: L) -> Self {
        Self {
            content: Cursor::new(content.into()),
            label: Some(label.into()),
        }
    }
}

impl HasOrigin for StringSource {
    fn origin(&self) -> Origin {
        match &self.label {
            Some(label) => Origin::Buffer(label.clone()),
            None => Origin::Synthetic,
        }
    }
}

impl Read for StringSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.content.read(buf)
    }
}
