use super::SourceId;
use crate::compiler::source::Registry;
use codespan_reporting::files::Files;

pub type Span = std::ops::Range<usize>;

/// A point in the source text.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and count
/// characters rather than bytes.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    pub fn start_of_line(line: usize) -> Self {
        Self::new(0, line, 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Location {
    pub id: SourceId,
    pub span: Span,
    pub position: Position,
}

impl Location {
    pub fn new<Id: Into<SourceId>>(id: Id, span: Span, position: Position) -> Self {
        Self {
            id: id.into(),
            span,
            position,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Line as codespan computes it from the registered text.
    /// Only differs from [`Location::line`] when lexing started at a line other than 1.
    pub fn registry_line(&self, registry: &Registry) -> Option<usize> {
        registry
            .line_index(self.id, self.span.start)
            .ok()
            .map(|idx| idx + 1)
    }
}

impl From<Position> for Location {
    fn from(position: Position) -> Self {
        Self::new(
            SourceId::synthetic(),
            position.offset..position.offset,
            position,
        )
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.position.fmt(f)
    }
}

pub trait HasSourceLocation {
    fn source_location(&self) -> &Location;
}
