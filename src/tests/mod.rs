#[cfg(test)]
mod color_expression_tests {
    use crate::format_color_expression;

    #[test]
    fn test_opaque_hex_passes_through_quoted() {
        assert_eq!(format_color_expression("#336699"), "'#336699'");
    }

    #[test]
    fn test_alpha_hex_becomes_rgba_call() {
        assert_eq!(
            format_color_expression("#80336699"),
            "Qt.rgba(51, 102, 153, 0.50)"
        );
    }

    #[test]
    fn test_fully_opaque_alpha_hex() {
        assert_eq!(
            format_color_expression("#FF000000"),
            "Qt.rgba(0, 0, 0, 1.00)"
        );
    }

    #[test]
    fn test_invalid_hex_degrades_to_literal() {
        assert_eq!(format_color_expression("#ZZ336699"), "'#ZZ336699'");
    }

    #[test]
    fn test_named_color_is_quoted() {
        assert_eq!(format_color_expression("red"), "'red'");
    }

    #[test]
    fn test_degenerate_inputs_are_quoted() {
        assert_eq!(format_color_expression(""), "''");
        assert_eq!(format_color_expression("#"), "'#'");
        assert_eq!(format_color_expression("#1234"), "'#1234'");
    }
}

#[cfg(test)]
mod color_resolution_tests {
    use crate::card::ColorToken;
    use crate::hostconfig::{ColorConfig, ForegroundColorsConfig, HighlightConfig, HostConfig};
    use crate::render::{default_registry, ElementRenderers, RenderContext};
    use std::sync::Arc;

    fn test_context() -> RenderContext {
        RenderContext::new(
            Arc::new(HostConfig::default()),
            Arc::new(ElementRenderers::new()),
        )
    }

    fn accent_palette() -> ForegroundColorsConfig {
        ForegroundColorsConfig {
            accent: ColorConfig {
                default_color: "#FF0000FF".to_string(),
                subtle_color: "#800000FF".to_string(),
                highlight_colors: HighlightConfig {
                    default_color: "red".to_string(),
                    subtle_color: "#12345".to_string(),
                },
            },
            ..ForegroundColorsConfig::default()
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let context = test_context();
        let tokens = [
            ColorToken::Default,
            ColorToken::Accent,
            ColorToken::Good,
            ColorToken::Warning,
            ColorToken::Attention,
            ColorToken::Dark,
            ColorToken::Light,
        ];
        for token in tokens {
            for subtle in [false, true] {
                for highlight in [false, true] {
                    let first = context.resolve_color(token, subtle, highlight);
                    let second = context.resolve_color(token, subtle, highlight);
                    assert_eq!(first, second);
                    assert!(!first.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_modifiers_select_palette_variants() {
        let mut context = test_context();
        context
            .render_args_mut()
            .set_foreground_colors(accent_palette());

        assert_eq!(
            context.resolve_color(ColorToken::Accent, false, false),
            "Qt.rgba(0, 0, 255, 1.00)"
        );
        assert_eq!(
            context.resolve_color(ColorToken::Accent, true, false),
            "Qt.rgba(0, 0, 255, 0.50)"
        );
        assert_eq!(context.resolve_color(ColorToken::Accent, false, true), "'red'");
        assert_eq!(context.resolve_color(ColorToken::Accent, true, true), "'#12345'");
    }

    #[test]
    fn test_scoped_palette_override_restores_on_return() {
        let mut context = RenderContext::new(
            Arc::new(HostConfig::default()),
            Arc::new(default_registry()),
        );

        let before = context.resolve_color(ColorToken::Accent, false, false);
        let inside = context.with_foreground_colors(accent_palette(), |context| {
            context.resolve_color(ColorToken::Accent, false, false)
        });
        let after = context.resolve_color(ColorToken::Accent, false, false);

        assert_eq!(inside, "Qt.rgba(0, 0, 255, 1.00)");
        assert_ne!(before, inside);
        assert_eq!(before, after);
    }
}

#[cfg(test)]
mod dispatch_tests {
    use crate::card::{Card, Element, ElementKind, TextBlock, TextInput};
    use crate::hostconfig::HostConfig;
    use crate::render::{
        render_card_root, ElementRenderers, FallbackSignal, QmlTag, RenderContext, WarningCode,
    };
    use std::sync::Arc;

    fn context_with(renderers: ElementRenderers) -> RenderContext {
        RenderContext::new(Arc::new(HostConfig::default()), Arc::new(renderers))
    }

    fn text_block(text: &str) -> Element {
        Element::TextBlock(TextBlock {
            text: text.to_string(),
            ..TextBlock::default()
        })
    }

    #[test]
    fn test_unregistered_kind_is_silently_skipped() {
        let mut context = context_with(ElementRenderers::new());
        let result = context.render_element(&text_block("hello"));
        assert_eq!(result, Ok(None));
        assert!(context.warnings().is_empty());
    }

    #[test]
    fn test_unknown_element_type_is_silently_skipped() {
        let element: Element =
            serde_json::from_str(r#"{"type": "FutureElement", "payload": 1}"#).unwrap();
        assert!(element.kind().is_none());

        let mut context = context_with(ElementRenderers::new());
        assert_eq!(context.render_element(&element), Ok(None));
        assert!(context.warnings().is_empty());
    }

    #[test]
    fn test_ancestor_registration_handles_descendant_kinds() {
        let mut renderers = ElementRenderers::new();
        renderers.register(ElementKind::Input, |_, _| Ok(QmlTag::new("AnyInput")));

        let element = Element::InputText(TextInput {
            id: "name".to_string(),
            ..TextInput::default()
        });
        let mut context = context_with(renderers);
        let tag = context.render_element(&element).unwrap().unwrap();
        assert_eq!(tag.element(), "AnyInput");
    }

    #[test]
    fn test_exact_registration_wins_over_ancestor() {
        let mut renderers = ElementRenderers::new();
        renderers.register(ElementKind::Input, |_, _| Ok(QmlTag::new("AnyInput")));
        renderers.register(ElementKind::InputText, |_, _| Ok(QmlTag::new("ExactInput")));

        let element = Element::InputText(TextInput::default());
        let mut context = context_with(renderers);
        let tag = context.render_element(&element).unwrap().unwrap();
        assert_eq!(tag.element(), "ExactInput");
    }

    #[test]
    fn test_top_level_render_absorbs_fallback() {
        let mut context = context_with(ElementRenderers::new());
        let result = context.render_card(&Card::default(), |_, _| {
            Err(FallbackSignal::from("boom"))
        });

        assert!(result.is_none());
        assert_eq!(context.warnings().len(), 1);
        assert_eq!(context.warnings()[0].code, WarningCode::RenderException);
        assert_eq!(context.warnings()[0].message, "boom");
    }

    #[test]
    fn test_failing_child_does_not_stop_siblings() {
        let mut renderers = ElementRenderers::new();
        renderers.register(ElementKind::TextBlock, |element, _| {
            let Element::TextBlock(text_block) = element else {
                return Err(FallbackSignal::from("expected a TextBlock element"));
            };
            if text_block.text.starts_with("fail") {
                Err(FallbackSignal(text_block.text.clone()))
            } else {
                Ok(QmlTag::new("Text"))
            }
        });

        let card = Card {
            body: vec![
                text_block("fail-first"),
                text_block("ok"),
                text_block("fail-second"),
            ],
            ..Card::default()
        };

        let mut context = context_with(renderers);
        let root = context.render_card(&card, render_card_root).unwrap();

        // The healthy sibling still rendered.
        assert_eq!(root.children()[0].children().len(), 1);

        // Ledger order matches the order the failures occurred in.
        let messages: Vec<&str> = context
            .warnings()
            .iter()
            .map(|warning| warning.message.as_str())
            .collect();
        assert_eq!(messages, vec!["fail-first", "fail-second"]);
        assert!(context
            .warnings()
            .iter()
            .all(|warning| warning.code == WarningCode::RenderException));
    }

    #[test]
    fn test_fallback_flag_is_scoped_to_the_branch() {
        let mut context = context_with(ElementRenderers::new());
        assert!(!context.ancestor_has_fallback());

        context.with_fallback_ancestor(|context| {
            assert!(context.ancestor_has_fallback());
            context.with_fallback_ancestor(|context| {
                assert!(context.ancestor_has_fallback());
            });
            assert!(context.ancestor_has_fallback());
        });

        assert!(!context.ancestor_has_fallback());
    }

    #[test]
    fn test_lang_and_click_hook_accessors() {
        let mut context = context_with(ElementRenderers::new());
        assert_eq!(context.lang(), "");
        context.set_lang("en");
        assert_eq!(context.lang(), "en");
        context.set_lang("fr");
        assert_eq!(context.lang(), "fr");

        assert!(context.on_click_function().is_none());
        context.set_on_click_function(Arc::new(|_| "console.log('click')".to_string()));
        let hook = context.on_click_function().unwrap();
        assert_eq!(hook(&Element::Unknown), "console.log('click')");
    }
}
