//! # qmlcard
//!
//! Renders Adaptive-Card-style JSON documents into QML markup.
//!
//! The crate centers on [`RenderContext`]: it dispatches each element of the
//! card tree to the routine registered for its kind, resolves color tokens
//! against the active palette, and collects non-fatal warnings so one bad
//! element never aborts the whole card.
//!
//! ```no_run
//! use std::sync::Arc;
//! use qmlcard::{default_registry, render_card_root, Card, HostConfig, RenderContext};
//!
//! let card: Card = serde_json::from_str(r#"{"body": [{"type": "TextBlock", "text": "hi"}]}"#).unwrap();
//! let mut context = RenderContext::new(Arc::new(HostConfig::default()), Arc::new(default_registry()));
//! if let Some(tag) = context.render_card(&card, render_card_root) {
//!     println!("{}", tag);
//! }
//! ```

pub mod card;
pub mod hostconfig;
pub mod render;

#[cfg(test)]
mod tests;

pub use card::{Card, ColorToken, ContainerStyle, Element, ElementKind};
pub use hostconfig::HostConfig;
pub use render::{
    default_registry, format_color_expression, render_card_root, ElementRenderers, FallbackSignal,
    OnClickFunction, QmlTag, RenderArgs, RenderContext, RenderWarning, WarningCode,
};
