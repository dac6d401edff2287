// Markup for the info panel. Pure string building so it can be tested off
// the browser.

use portfolio_core::ContentRecord;

/// Escape text for safe insertion as HTML element content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<h2>` title followed by one `.item` block per entry. Entries without a
/// subtitle get no `.subtitle` element.
pub fn record_html(record: &ContentRecord) -> String {
    let mut html = format!("<h2>{}</h2>", escape_html(record.title));
    for item in record.items {
        html.push_str("<div class=\"item\">");
        html.push_str(&format!(
            "<div class=\"title\">{}</div>",
            escape_html(item.title)
        ));
        if let Some(sub) = item.subtitle.filter(|s| !s.is_empty()) {
            html.push_str(&format!(
                "<div class=\"subtitle\">{}</div>",
                escape_html(sub)
            ));
        }
        html.push_str(&format!(
            "<div class=\"description\">{}</div>",
            escape_html(item.description)
        ));
        html.push_str("</div>");
    }
    html
}

/// Progress bar width as a CSS value.
pub fn progress_width(percent: f32) -> String {
    format!("{:.1}%", percent.clamp(0.0, 100.0))
}
