use crate::card::ColorToken;
use crate::hostconfig::ForegroundColorsConfig;

/// Translates a raw host-config color into a QML color expression.
///
/// Opaque `#RRGGBB` values and named colors pass through as quoted literals.
/// `#AARRGGBB` values become a `Qt.rgba(r, g, b, opacity)` call, since QML
/// color literals cannot carry an alpha channel. Anything malformed degrades
/// to a quoted literal; this function never fails.
pub fn format_color_expression(color: &str) -> String {
    if color.len() > 1 && color.starts_with('#') {
        if color.len() == 7 {
            return format!("'{}'", color);
        }
        if color.len() == 9 {
            if let Some(expression) = rgba_expression(color) {
                return expression;
            }
        }
    }
    format!("'{}'", color)
}

fn rgba_expression(color: &str) -> Option<String> {
    let alpha = u8::from_str_radix(color.get(1..3)?, 16).ok()?;
    let r = u8::from_str_radix(color.get(3..5)?, 16).ok()?;
    let g = u8::from_str_radix(color.get(5..7)?, 16).ok()?;
    let b = u8::from_str_radix(color.get(7..9)?, 16).ok()?;
    let opacity = f32::from(alpha) / 255.0;
    Some(format!("Qt.rgba({}, {}, {}, {:.2})", r, g, b, opacity))
}

/// Picks the raw color for a token out of the active palette.
///
/// Unrecognized tokens are impossible by construction, but the `Default`
/// entry still doubles as the fallback for elements that specify no color.
pub fn select_color(
    colors: &ForegroundColorsConfig,
    token: ColorToken,
    is_subtle: bool,
    is_highlight: bool,
) -> &str {
    let entry = match token {
        ColorToken::Accent => &colors.accent,
        ColorToken::Good => &colors.good,
        ColorToken::Warning => &colors.warning,
        ColorToken::Attention => &colors.attention,
        ColorToken::Dark => &colors.dark,
        ColorToken::Light => &colors.light,
        ColorToken::Default => &colors.default_color,
    };

    if is_highlight {
        if is_subtle {
            &entry.highlight_colors.subtle_color
        } else {
            &entry.highlight_colors.default_color
        }
    } else if is_subtle {
        &entry.subtle_color
    } else {
        &entry.default_color
    }
}
