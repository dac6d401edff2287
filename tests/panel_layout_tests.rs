// Host-side tests for the info panel markup.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod layout {
    include!("../src/panel/layout.rs");
}

use layout::{escape_html, progress_width, record_html};
use portfolio_core::ContentKind;

#[test]
fn experience_renders_title_and_both_items() {
    let html = record_html(ContentKind::Experience.record());
    assert!(html.starts_with("<h2>Professional Experience</h2>"));
    assert_eq!(html.matches("<div class=\"item\">").count(), 2);
    assert_eq!(html.matches("<div class=\"subtitle\">").count(), 2);
    assert!(html.contains("<div class=\"title\">Senior Software Engineer</div>"));
}

#[test]
fn skills_render_without_subtitles() {
    let html = record_html(ContentKind::Skills.record());
    assert!(html.starts_with("<h2>Technical Skills</h2>"));
    assert_eq!(html.matches("<div class=\"item\">").count(), 3);
    assert!(!html.contains("subtitle"));
}

#[test]
fn ampersands_in_content_are_escaped() {
    // "Database & Cloud"
    let html = record_html(ContentKind::Skills.record());
    assert!(html.contains("Database &amp; Cloud"));
    assert!(!html.contains("Database & Cloud"));
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape_html("<a href=\"x\">'&'</a>"),
        "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn progress_width_is_clamped_percent() {
    assert_eq!(progress_width(0.0), "0.0%");
    assert_eq!(progress_width(42.26), "42.3%");
    assert_eq!(progress_width(130.0), "100.0%");
    assert_eq!(progress_width(-5.0), "0.0%");
}
