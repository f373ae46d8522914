use std::sync::Arc;

use crate::card::{Card, ColorToken, Element};
use crate::hostconfig::{ForegroundColorsConfig, HostConfig};

use super::colors::{format_color_expression, select_color};
use super::errors::FallbackSignal;
use super::registry::ElementRenderers;
use super::tag::QmlTag;
use super::warnings::{RenderWarning, WarningCode};

/// Hook producing the QML click-handler body for an interactive element.
pub type OnClickFunction = Arc<dyn Fn(&Element) -> String>;

/// Mutable per-pass render state; currently the active foreground palette.
///
/// This is a single slot, not a stack: a routine that overrides the palette
/// for its subtree is responsible for restoring it before returning. Prefer
/// `RenderContext::with_foreground_colors`, which scopes the override.
#[derive(Debug, Clone)]
pub struct RenderArgs {
    foreground_colors: ForegroundColorsConfig,
}

impl RenderArgs {
    pub fn foreground_colors(&self) -> &ForegroundColorsConfig {
        &self.foreground_colors
    }

    pub fn set_foreground_colors(&mut self, colors: ForegroundColorsConfig) {
        self.foreground_colors = colors;
    }
}

/// Shared state threaded through one recursive render pass.
///
/// One instance serves one card render: it owns the warning ledger and the
/// active palette, and shares the host config and renderer registry
/// read-only. Create a fresh context per card; instances are not reused.
pub struct RenderContext {
    host_config: Arc<HostConfig>,
    element_renderers: Arc<ElementRenderers>,
    render_args: RenderArgs,
    lang: String,
    on_click_function: Option<OnClickFunction>,
    ancestor_has_fallback: bool,
    warnings: Vec<RenderWarning>,
}

impl RenderContext {
    pub fn new(host_config: Arc<HostConfig>, element_renderers: Arc<ElementRenderers>) -> Self {
        let render_args = RenderArgs {
            foreground_colors: host_config
                .container_styles
                .default_palette
                .foreground_colors
                .clone(),
        };

        Self {
            host_config,
            element_renderers,
            render_args,
            lang: String::new(),
            on_click_function: None,
            ancestor_has_fallback: false,
            warnings: Vec::new(),
        }
    }

    /// Top-level entry: renders the whole card with the given routine.
    ///
    /// This is the outermost safety net. A fallback signal escaping the
    /// routine is recorded as a `RenderException` warning and the result is
    /// `None`; it never propagates past this call.
    pub fn render_card<F>(&mut self, card: &Card, render_function: F) -> Option<QmlTag>
    where
        F: FnOnce(&Card, &mut RenderContext) -> Result<QmlTag, FallbackSignal>,
    {
        match render_function(card, self) {
            Ok(tag) => Some(tag),
            Err(signal) => {
                self.add_warning(WarningCode::RenderException, signal.to_string());
                None
            }
        }
    }

    /// Dispatches one element to the routine registered for its kind.
    ///
    /// Elements whose kind has no registration (including unknown future
    /// kinds) return `Ok(None)` without touching the ledger. A fallback
    /// signal from the routine propagates to the caller, which decides
    /// whether to absorb it (see `render_child`).
    pub fn render_element(&mut self, element: &Element) -> Result<Option<QmlTag>, FallbackSignal> {
        let Some(kind) = element.kind() else {
            return Ok(None);
        };
        match self.element_renderers.lookup(kind) {
            Some(routine) => routine(element, self).map(Some),
            None => Ok(None),
        }
    }

    /// Dispatches a child element, absorbing any fallback from its routine.
    ///
    /// The failing subtree is recorded as a `RenderException` warning and
    /// skipped, so sibling elements keep rendering.
    pub fn render_child(&mut self, element: &Element) -> Option<QmlTag> {
        match self.render_element(element) {
            Ok(tag) => tag,
            Err(signal) => {
                self.add_warning(WarningCode::RenderException, signal.to_string());
                None
            }
        }
    }

    pub fn add_warning(&mut self, code: WarningCode, message: impl Into<String>) {
        self.warnings.push(RenderWarning::new(code, message));
    }

    /// All warnings observed so far, in the order they occurred.
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    /// Resolves a color token against the active palette into a QML color
    /// expression.
    pub fn resolve_color(&self, token: ColorToken, is_subtle: bool, is_highlight: bool) -> String {
        let raw = select_color(
            self.render_args.foreground_colors(),
            token,
            is_subtle,
            is_highlight,
        );
        format_color_expression(raw)
    }

    pub fn config(&self) -> &HostConfig {
        &self.host_config
    }

    pub fn render_args(&self) -> &RenderArgs {
        &self.render_args
    }

    pub fn render_args_mut(&mut self) -> &mut RenderArgs {
        &mut self.render_args
    }

    /// Runs `f` with the palette replaced, restoring the previous palette
    /// afterwards so sibling subtrees are unaffected.
    pub fn with_foreground_colors<T>(
        &mut self,
        colors: ForegroundColorsConfig,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let previous = std::mem::replace(&mut self.render_args.foreground_colors, colors);
        let result = f(self);
        self.render_args.foreground_colors = previous;
        result
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }

    pub fn on_click_function(&self) -> Option<&OnClickFunction> {
        self.on_click_function.as_ref()
    }

    pub fn set_on_click_function(&mut self, on_click_function: OnClickFunction) {
        self.on_click_function = Some(on_click_function);
    }

    /// True when an ancestor subtree already substituted fallback content,
    /// so nested routines should not attempt recovery of their own.
    pub fn ancestor_has_fallback(&self) -> bool {
        self.ancestor_has_fallback
    }

    /// Runs `f` with the fallback flag raised, restoring the previous value
    /// afterwards. The flag is scoped to the branch of the recursion that
    /// entered fallback mode, never left set for siblings.
    pub fn with_fallback_ancestor<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.ancestor_has_fallback;
        self.ancestor_has_fallback = true;
        let result = f(self);
        self.ancestor_has_fallback = previous;
        result
    }
}
