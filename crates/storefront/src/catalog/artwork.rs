//! Generated placeholder artwork for products without a real image.

/// Build a `data:` URI holding an SVG card: a diagonal gradient in `color`,
/// three soft circles, and `label` along the bottom.
///
/// `color` is any CSS colour (e.g. `#FF8C00`). The SVG is percent-encoded so
/// the URI can be dropped straight into an `<img src>`.
#[must_use]
pub fn placeholder_image(label: &str, color: &str) -> String {
    let label = escape_xml(label);
    let svg = format!(
        concat!(
            r#"<svg width="280" height="200" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<defs><linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{color};stop-opacity:0.8" />"#,
            r#"<stop offset="100%" style="stop-color:{color};stop-opacity:0.4" />"#,
            r#"</linearGradient></defs>"#,
            r#"<rect width="280" height="200" fill="url(#grad)"/>"#,
            r#"<circle cx="70" cy="60" r="20" fill="{color}" opacity="0.6"/>"#,
            r#"<circle cx="140" cy="100" r="25" fill="{color}" opacity="0.7"/>"#,
            r#"<circle cx="210" cy="70" r="18" fill="{color}" opacity="0.5"/>"#,
            r##"<text x="140" y="160" text-anchor="middle" fill="#2E7D32" "##,
            r#"font-size="16" font-weight="bold">🌿 {label} 🌿</text>"#,
            r#"</svg>"#,
        ),
        color = color,
        label = label,
    );

    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_encoded_svg_data_uri() {
        let uri = placeholder_image("Green Tea", "#90EE90");
        let payload = uri.strip_prefix("data:image/svg+xml,").unwrap();
        assert!(!payload.contains(' '));

        let svg = urlencoding::decode(payload).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Green Tea"));
        assert!(svg.contains("stop-color:#90EE90"));
    }

    #[test]
    fn test_label_is_escaped() {
        let svg = urlencoding::decode(
            placeholder_image("Salt & <Pepper>", "red")
                .trim_start_matches("data:image/svg+xml,"),
        )
        .unwrap()
        .into_owned();
        assert!(svg.contains("Salt &amp; &lt;Pepper&gt;"));
    }
}
