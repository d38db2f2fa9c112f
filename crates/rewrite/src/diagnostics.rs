use std::fmt;

/// A recoverable problem met during a rewrite: an element left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Element name as written in the source.
    pub element: String,
    /// Byte offset of the element's start tag.
    pub position: u64,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dropped <{}> element at byte {}: {}",
            self.element, self.position, self.message
        )
    }
}

/// The rewritten markup together with everything that was dropped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutput {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl RewriteOutput {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
