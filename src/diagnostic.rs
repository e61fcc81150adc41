use crate::lexer::Token;

use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};

use thiserror::Error;

use std::io;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected token, missing terminator, unbalanced braces, early end of input.
    Syntax,
    /// Undeclared or uninitialized names, type mismatches, malformed input statements.
    Semantic,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Semantic => "SemanticError",
        }
    }
}

/// The single error a compile produces. Every stage stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} at {}: {message}", .kind.code(), .span.start)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Range<usize>,
    pub label: Option<String>,
    pub notes: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Range<usize>) -> Self {
        CompileError {
            kind,
            message: message.into(),
            span,
            label: None,
            notes: vec![],
        }
    }

    pub fn syntax(message: impl Into<String>, span: Range<usize>) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    pub fn semantic(message: impl Into<String>, span: Range<usize>) -> Self {
        Self::new(ErrorKind::Semantic, message, span)
    }

    /// `expected X but found Y`, pointing at the offending token or at the end
    /// of input when there is none.
    pub fn unexpected(expected: &str, found: Option<&Token>, eof: Range<usize>) -> Self {
        match found {
            Some(token) => Self::syntax(
                format!("expected {} but found {}", expected, token.describe()),
                token.span.clone(),
            )
            .with_label(format!("expected {} here", expected)),
            None => Self::syntax(
                format!("expected {} but reached end of input", expected),
                eof,
            )
            .with_label("input ends here"),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn position(&self) -> usize {
        self.span.start
    }

    pub fn report(&self, file: &str) -> Report<'static, (String, Range<usize>)> {
        let mut colors = ColorGenerator::new();
        let mut report = Report::build(ReportKind::Error, (file.to_string(), self.span.clone()))
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_code(self.kind.code())
            .with_message(&self.message)
            .with_label(
                Label::new((file.to_string(), self.span.clone()))
                    .with_message(self.label.as_deref().unwrap_or(&self.message))
                    .with_color(colors.next()),
            );
        for note in &self.notes {
            report = report.with_note(note);
        }
        report.finish()
    }

    /// Prints the error against the source text it was produced from.
    pub fn eprint(&self, file: &str, source: &str) -> io::Result<()> {
        self.report(file)
            .eprint((file.to_string(), Source::from(source.to_string())))
    }
}
