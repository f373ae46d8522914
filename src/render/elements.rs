//! Built-in render routines for the stock element kinds, and the default
//! registry that carries them. Each routine follows the same contract: take
//! the element plus the shared context, return a QML tag or signal fallback.

use crate::card::{Card, ColorToken, ContainerStyle, Element, ElementKind};

use super::colors::format_color_expression;
use super::context::RenderContext;
use super::errors::FallbackSignal;
use super::registry::ElementRenderers;
use super::tag::QmlTag;
use super::warnings::WarningCode;

/// Registry pre-populated with the built-in routines.
pub fn default_registry() -> ElementRenderers {
    let mut renderers = ElementRenderers::new();
    renderers.register(ElementKind::TextBlock, render_text_block);
    renderers.register(ElementKind::Image, render_image);
    renderers.register(ElementKind::Container, render_container);
    renderers.register(ElementKind::ColumnSet, render_column_set);
    renderers.register(ElementKind::Column, render_column);
    renderers.register(ElementKind::FactSet, render_fact_set);
    renderers.register(ElementKind::InputText, render_text_input);
    renderers.register(ElementKind::InputToggle, render_toggle_input);
    renderers.register(ElementKind::ActionOpenUrl, render_open_url_action);
    renderers.register(ElementKind::ActionSubmit, render_submit_action);
    renderers
}

/// Top-level routine: renders the card body and actions into a root
/// `Rectangle`. Pass it to `RenderContext::render_card`.
pub fn render_card_root(card: &Card, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    if let Some(lang) = &card.lang {
        context.set_lang(lang.clone());
    }

    let background =
        format_color_expression(&context.config().container_styles.default_palette.background_color);

    let mut column = QmlTag::new("Column").with_property("spacing", "8");
    render_items(&card.body, context, &mut column);
    render_items(&card.actions, context, &mut column);

    Ok(QmlTag::new("Rectangle")
        .with_property("color", background)
        .with_child(column))
}

/// Dispatches a list of sibling elements into `parent`. A failing child is
/// absorbed by `render_child` so the remaining siblings still render.
fn render_items(items: &[Element], context: &mut RenderContext, parent: &mut QmlTag) {
    for item in items {
        if let Some(tag) = context.render_child(item) {
            parent.add_child(tag);
        }
    }
}

fn render_text_block(element: &Element, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::TextBlock(text_block) = element else {
        return Err(FallbackSignal::from("expected a TextBlock element"));
    };
    if text_block.text.is_empty() {
        return Err(FallbackSignal::from("TextBlock requires text"));
    }

    let color = context.resolve_color(
        text_block.color.unwrap_or_default(),
        text_block.is_subtle.unwrap_or(false),
        false,
    );

    let mut tag = QmlTag::new("Text")
        .with_property("text", quote(&text_block.text))
        .with_property("color", color);
    if text_block.wrap.unwrap_or(false) {
        tag.add_property("wrapMode", "Text.Wrap");
    }
    Ok(tag)
}

fn render_image(element: &Element, _context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::Image(image) = element else {
        return Err(FallbackSignal::from("expected an Image element"));
    };
    if image.url.is_empty() {
        return Err(FallbackSignal::from("Image requires a url"));
    }

    let mut tag = QmlTag::new("Image").with_property("source", quote(&image.url));
    if let Some(alt_text) = &image.alt_text {
        tag.add_property("Accessible.name", quote(alt_text));
    }
    Ok(tag)
}

fn render_container(element: &Element, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::Container(container) = element else {
        return Err(FallbackSignal::from("expected a Container element"));
    };

    let styles = &context.config().container_styles;
    let style_config = match container.style.unwrap_or_default() {
        ContainerStyle::Default => &styles.default_palette,
        ContainerStyle::Emphasis => &styles.emphasis_palette,
    };
    let background = format_color_expression(&style_config.background_color);
    let palette = style_config.foreground_colors.clone();

    let mut column = QmlTag::new("Column").with_property("spacing", "8");
    // The style's palette applies only inside this subtree; siblings keep
    // the palette that was active before.
    context.with_foreground_colors(palette, |context| {
        render_items(&container.items, context, &mut column);
    });

    Ok(QmlTag::new("Rectangle")
        .with_property("color", background)
        .with_child(column))
}

fn render_column_set(element: &Element, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::ColumnSet(column_set) = element else {
        return Err(FallbackSignal::from("expected a ColumnSet element"));
    };

    let mut row = QmlTag::new("Row").with_property("spacing", "16");
    render_items(&column_set.columns, context, &mut row);
    Ok(row)
}

fn render_column(element: &Element, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::Column(column) = element else {
        return Err(FallbackSignal::from("expected a Column element"));
    };

    let mut tag = QmlTag::new("Column").with_property("spacing", "8");
    render_items(&column.items, context, &mut tag);
    Ok(tag)
}

fn render_fact_set(element: &Element, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::FactSet(fact_set) = element else {
        return Err(FallbackSignal::from("expected a FactSet element"));
    };

    let title_color = context.resolve_color(ColorToken::Default, false, false);
    let value_color = context.resolve_color(ColorToken::Default, true, false);

    let mut grid = QmlTag::new("GridLayout").with_property("columns", "2");
    for fact in &fact_set.facts {
        grid.add_child(
            QmlTag::new("Text")
                .with_property("text", quote(&fact.title))
                .with_property("color", title_color.clone())
                .with_property("font.bold", "true"),
        );
        grid.add_child(
            QmlTag::new("Text")
                .with_property("text", quote(&fact.value))
                .with_property("color", value_color.clone()),
        );
    }
    Ok(grid)
}

fn render_text_input(element: &Element, _context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::InputText(input) = element else {
        return Err(FallbackSignal::from("expected an Input.Text element"));
    };
    if input.id.is_empty() {
        return Err(FallbackSignal::from("Input.Text requires an id"));
    }

    let mut tag = QmlTag::new("TextField").with_property("id", input.id.clone());
    if let Some(placeholder) = &input.placeholder {
        tag.add_property("placeholderText", quote(placeholder));
    }
    if let Some(value) = &input.value {
        tag.add_property("text", quote(value));
    }
    Ok(tag)
}

fn render_toggle_input(element: &Element, _context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::InputToggle(input) = element else {
        return Err(FallbackSignal::from("expected an Input.Toggle element"));
    };
    if input.id.is_empty() {
        return Err(FallbackSignal::from("Input.Toggle requires an id"));
    }

    let checked = input.value.as_deref() == Some("true");
    Ok(QmlTag::new("CheckBox")
        .with_property("id", input.id.clone())
        .with_property("text", quote(&input.title))
        .with_property("checked", checked.to_string()))
}

fn render_open_url_action(element: &Element, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::ActionOpenUrl(action) = element else {
        return Err(FallbackSignal::from("expected an Action.OpenUrl element"));
    };
    if action.url.is_empty() {
        return Err(FallbackSignal::from("Action.OpenUrl requires a url"));
    }

    let on_clicked = match context.on_click_function() {
        Some(on_click) => on_click(element),
        None => format!("Qt.openUrlExternally('{}')", action.url),
    };
    let title = action.title.clone().unwrap_or_else(|| action.url.clone());

    Ok(QmlTag::new("Button")
        .with_property("text", quote(&title))
        .with_property("onClicked", on_clicked))
}

fn render_submit_action(element: &Element, context: &mut RenderContext) -> Result<QmlTag, FallbackSignal> {
    let Element::ActionSubmit(action) = element else {
        return Err(FallbackSignal::from("expected an Action.Submit element"));
    };

    let title = action.title.clone().unwrap_or_else(|| "Submit".to_string());
    let mut tag = QmlTag::new("Button").with_property("text", quote(&title));

    match context.on_click_function().cloned() {
        Some(on_click) => {
            let on_clicked = on_click(element);
            tag.add_property("onClicked", on_clicked);
        }
        None => {
            context.add_warning(
                WarningCode::InteractivityNotSupported,
                "Action.Submit rendered without a click handler",
            );
            tag.add_property("enabled", "false");
        }
    }
    Ok(tag)
}

/// Quotes a string as a QML (JavaScript) double-quoted literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
