use thiserror::Error;

/// Signal returned by a render routine that could not render its element.
///
/// It unwinds through `?` only as far as the nearest dispatch point, where it
/// is converted into a `RenderException` warning and the subtree is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FallbackSignal(pub String);

impl From<String> for FallbackSignal {
    fn from(value: String) -> Self {
        FallbackSignal(value)
    }
}

impl From<&str> for FallbackSignal {
    fn from(value: &str) -> Self {
        FallbackSignal(value.to_string())
    }
}
