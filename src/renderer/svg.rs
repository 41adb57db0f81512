//! SVG generation from icon definitions

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::registry::IconDefinition;

use super::SvgConfig;

/// Render an icon definition to a complete SVG element.
///
/// The output is a single line with a fixed attribute order, so that the
/// same definition and configuration always produce identical bytes.
pub fn render_icon(icon: &IconDefinition, config: &SvgConfig) -> String {
    let (width, height) = output_size(icon, config);

    let mut svg = String::with_capacity(icon.body.len() + 160);
    svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    svg.push_str(&format!(
        r#" width="{}" height="{}" viewBox="0 0 {} {}""#,
        width, height, icon.width, icon.height
    ));
    if let Some(prefix) = &config.class_prefix {
        svg.push_str(&format!(
            r#" class="{} {}-{}""#,
            prefix, prefix, icon.name
        ));
    }
    if let Some(label) = &config.aria_label {
        svg.push_str(&format!(
            r#" role="img" aria-label="{}""#,
            escape_attribute(label)
        ));
    } else if config.aria_hidden {
        svg.push_str(r#" aria-hidden="true""#);
    }
    svg.push('>');
    svg.push_str(&icon.body);
    svg.push_str("</svg>");
    svg
}

/// Render an icon as a base64 `data:` URI, for embedding in CSS or HTML
/// attributes.
pub fn render_data_uri(icon: &IconDefinition, config: &SvgConfig) -> String {
    let svg = render_icon(icon, config);
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Compute the emitted width/height attributes. A configured height scales
/// the width to preserve the viewBox aspect ratio.
fn output_size(icon: &IconDefinition, config: &SvgConfig) -> (u32, u32) {
    match config.height {
        Some(height) => {
            let width =
                (height as f64 * icon.width as f64 / icon.height as f64).round() as u32;
            (width, height)
        }
        None => (icon.width, icon.height),
    }
}

/// Escape a string for use inside a double-quoted XML attribute
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
