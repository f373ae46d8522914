/// Diagnostic categories recorded while a card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// A render routine signalled fallback and its subtree was skipped.
    RenderException,
    /// An interactive element rendered without a click handler installed.
    InteractivityNotSupported,
}

/// One non-fatal diagnostic observed during a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWarning {
    pub code: WarningCode,
    pub message: String,
}

impl RenderWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
