use derive_more::Display;
use std::fmt;

///
/// DiagnosticKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum DiagnosticKind {
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
}

///
/// Diagnostic
/// One message attributed to a class.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub element: String,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn error(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            element: element.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            element: element.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.kind, self.element, self.message)
    }
}

///
/// Diagnostics
///

#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_error()).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_element() {
        let d = Diagnostic::error("com.acme.Order", "boom");
        assert_eq!(d.to_string(), "error: com.acme.Order: boom");
    }

    #[test]
    fn warnings_are_not_errors() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::warning("a", "fine"));
        assert!(!diags.has_errors());

        diags.push(Diagnostic::error("b", "bad"));
        assert!(diags.has_errors());
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.errors().next().map(|d| d.element.as_str()), Some("b"));
    }
}
