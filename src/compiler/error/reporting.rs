use super::Error;
use crate::compiler::frontend::error::Error as FrontendError;
use crate::compiler::source::{HasSourceLocation, Registry, SourceId};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

/// Prints errors as diagnostics pointing into the registered sources.
pub struct ErrorReporter<'a> {
    source_registry: &'a Registry,
}

impl<'a> ErrorReporter<'a> {
    pub fn new(source_registry: &'a Registry) -> Self {
        Self { source_registry }
    }
}

impl<'a> ErrorReporter<'a> {
    pub fn report_error(&self, e: &Error) {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = term::Config::default();

        if !self.is_renderable(e) {
            eprintln!("{}", e);
            return;
        }

        let mut lock = writer.lock();
        if let Err(render_error) =
            term::emit(&mut lock, &config, self.source_registry, &self.diagnostic(e))
        {
            log::warn!("failed to render diagnostic: {}", render_error);
            eprintln!("{}", e);
        }
    }

    // codespan can only show snippets for sources it knows about
    fn is_renderable(&self, e: &Error) -> bool {
        match e {
            Error::IoError(_) => true,
            Error::FrontendError(fe) => self
                .source_registry
                .source(fe.source_location().id)
                .is_some(),
        }
    }

    pub fn diagnostic(&self, e: &Error) -> Diagnostic<SourceId> {
        match e {
            Error::IoError(e) => Diagnostic::error()
                .with_code("E000")
                .with_message(format!("{}", e)),
            Error::FrontendError(fe) => self.frontend_diagnostic(fe),
        }
    }

    fn frontend_diagnostic(&self, e: &FrontendError) -> Diagnostic<SourceId> {
        let location = e.source_location();
        let label = Label::primary(location.id, location.span.clone()).with_message(e.message());

        match e {
            FrontendError::LexicalError(_, detail) => {
                let mut diagnostic = Diagnostic::error()
                    .with_code("E011")
                    .with_message("failed to tokenize input")
                    .with_labels(vec![label]);

                if !detail.content.is_empty() {
                    diagnostic =
                        diagnostic.with_notes(vec![format!("offending character {:?}", detail.content)]);
                }
                diagnostic
            }
            FrontendError::SyntaxError(_, token) => Diagnostic::error()
                .with_code("E012")
                .with_message("failed to parse input")
                .with_labels(vec![label])
                .with_notes(vec![format!("found {}", token.kind)]),
        }
    }
}
