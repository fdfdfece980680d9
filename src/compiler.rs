pub mod error;
pub mod frontend;
pub mod settings;
pub mod source;
pub mod utils;
use error::reporting::ErrorReporter;
use frontend::ast::Block;
use frontend::lexer::token::Token;
use frontend::Frontend;
use settings::Settings;
use source::{HasOrigin, Registry, SourceId};
use std::io::Read;
use utils::symbol_table::SymbolTable;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Entry point for callers that read whole sources.
///
/// Every source handed to the compiler is kept in its registry, so errors
/// can later be reported with a snippet of the offending text. Symbols are
/// collected across all sources.
pub struct Compiler {
    source_registry: Registry,
    symbols: SymbolTable,
    frontend: Frontend,
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Compiler {
            source_registry: Registry::new(),
            symbols: SymbolTable::default(),
            frontend: Frontend::new(settings),
        }
    }

    pub fn tokenize<T: HasOrigin + Read>(&mut self, source: T) -> Result<Vec<Token>> {
        let id = self.register(source)?;
        let source = self.source_registry.source(id).ok_or_else(|| unknown_source(id))?;

        Ok(self.frontend.tokenize(&source, &mut self.symbols)?)
    }

    pub fn parse<T: HasOrigin + Read>(&mut self, source: T) -> Result<Block> {
        let id = self.register(source)?;
        let source = self.source_registry.source(id).ok_or_else(|| unknown_source(id))?;

        Ok(self.frontend.parse(&source, &mut self.symbols)?)
    }

    fn register<T: HasOrigin + Read>(&mut self, source: T) -> Result<SourceId> {
        let origin = source.origin();
        let id = self.source_registry.add(source)?;
        log::debug!("compiling {} ({:?})", origin, id);
        Ok(id)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn registry(&self) -> &Registry {
        &self.source_registry
    }

    pub fn print_error(&self, e: &Error) {
        ErrorReporter::new(&self.source_registry).report_error(e)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_source(id: SourceId) -> Error {
    Error::IoError(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("source {:?} is not registered", id),
    ))
}
