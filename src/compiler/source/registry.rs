use super::{HasOrigin, Origin, Source, SourceId};
use codespan_reporting::files::{self, Files};
use std::io::Read;
use std::ops::Range;

/// Owns the text of every source handed to the compiler, so diagnostics
/// can point back into it.
pub struct Registry {
    sources: files::SimpleFiles<Origin, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            sources: files::SimpleFiles::new(),
        }
    }

    pub fn add<T: HasOrigin + Read>(&mut self, mut s: T) -> std::io::Result<SourceId> {
        let mut out = String::new();
        s.read_to_string(&mut out)?;
        let handle = self.sources.add(s.origin(), out);
        log::debug!("registered source {:?} as {}", s.origin(), handle);
        Ok(SourceId(handle))
    }

    pub fn source(&self, id: SourceId) -> Option<Source<'_>> {
        self.sources
            .get(id.0)
            .ok()
            .map(|file| Source::new(id, file.source().as_str()))
    }

    pub fn origin(&self, id: SourceId) -> Option<&Origin> {
        self.sources.get(id.0).ok().map(|file| file.name())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> files::Files<'a> for Registry {
    type FileId = SourceId;
    type Name = Origin;
    type Source = &'a str;

    fn name(&'a self, id: Self::FileId) -> Result<Self::Name, files::Error> {
        Ok(self.sources.get(id.0)?.name().clone())
    }

    fn source(&'a self, id: Self::FileId) -> Result<Self::Source, files::Error> {
        Ok(self.sources.get(id.0)?.source().as_str())
    }

    fn line_index(&'a self, id: Self::FileId, byte_index: usize) -> Result<usize, files::Error> {
        self.sources.line_index(id.0, byte_index)
    }

    fn line_range(
        &'a self,
        id: Self::FileId,
        line_index: usize,
    ) -> Result<Range<usize>, files::Error> {
        self.sources.line_range(id.0, line_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::source::StringSource;

    #[test]
    fn test_add_and_lookup() {
        let mut registry = Registry::new();
        let id = registry
            .add(StringSource::labelled("a <- 1\nb <- 2", "test"))
            .unwrap();

        let source = registry.source(id).unwrap();
        assert_eq!(source.code, "a <- 1\nb <- 2");
        assert_eq!(registry.origin(id), Some(&Origin::Buffer("test".into())));
        assert_eq!(registry.line_index(id, 8).unwrap(), 1);
    }

    #[test]
    fn test_synthetic_is_unknown() {
        let registry = Registry::new();
        assert!(registry.source(SourceId::synthetic()).is_none());
        assert!(registry.name(SourceId::synthetic()).is_err());
    }
}
