//! Result card rendering (pure projection).
//!
//! Builds the text lines for one book card. Missing optional fields
//! render as explicit placeholders, never as errors: "Unknown Author",
//! "N/A", and "No Image".

use crate::api;
use crate::model::Book;
use crate::view::styles::UiStyles;
use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;

/// Total height of one card in terminal rows, borders included.
pub const CARD_HEIGHT: u16 = 8;

/// Placeholder shown when a record carries no cover identifier.
pub const NO_IMAGE_PLACEHOLDER: &str = "No Image";

/// Build the content lines for one book card.
///
/// `covers_url` is the cover endpoint prefix used to construct the
/// image URL when the record carries a `cover_i`; `width` is the
/// interior width of the card used to ellipsize long lines.
pub fn card_lines(book: &Book, covers_url: &str, width: u16, styles: &UiStyles) -> Vec<Line<'static>> {
    let width = width as usize;

    let cover_line = match book.cover_i {
        Some(id) => Line::raw(truncate_to_width(&api::cover_url(covers_url, id), width)),
        None => Line::styled(NO_IMAGE_PLACEHOLDER.to_string(), styles.placeholder),
    };

    vec![
        Line::styled(truncate_to_width(book.title_display(), width), styles.title),
        Line::raw(truncate_to_width(&book.authors_display(), width)),
        Line::raw(truncate_to_width(
            &format!("First published: {}", book.year_display()),
            width,
        )),
        Line::raw(truncate_to_width(
            &format!("Publisher: {}", book.publisher_display()),
            width,
        )),
        Line::raw(truncate_to_width(
            &format!("ISBN: {}", book.isbn_display()),
            width,
        )),
        cover_line,
    ]
}

/// Truncate `text` to at most `max` display columns, appending an
/// ellipsis when anything was cut. Width-aware so wide (CJK) glyphs
/// never overflow the card.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }

    // Reserve one column for the ellipsis marker.
    let budget = max - 1;
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(json: &str) -> Book {
        serde_json::from_str(json).unwrap()
    }

    fn plain_styles() -> UiStyles {
        UiStyles::with_color_config(crate::view::styles::ColorConfig::from_env_and_args(true))
    }

    fn rendered(book: &Book) -> Vec<String> {
        card_lines(book, "https://covers.openlibrary.org/b/id", 60, &plain_styles())
            .iter()
            .map(|line| line.to_string())
            .collect()
    }

    #[test]
    fn full_record_renders_all_fields() {
        let book = book(
            r#"{
                "title": "The Hobbit",
                "author_name": ["J.R.R. Tolkien"],
                "first_publish_year": 1937,
                "publisher": ["Allen & Unwin"],
                "isbn": ["9780261103344"],
                "cover_i": 8406786
            }"#,
        );
        let lines = rendered(&book);

        assert_eq!(lines[0], "The Hobbit");
        assert_eq!(lines[1], "J.R.R. Tolkien");
        assert_eq!(lines[2], "First published: 1937");
        assert_eq!(lines[3], "Publisher: Allen & Unwin");
        assert_eq!(lines[4], "ISBN: 9780261103344");
        assert_eq!(lines[5], "https://covers.openlibrary.org/b/id/8406786-M.jpg");
    }

    #[test]
    fn missing_cover_renders_no_image_placeholder() {
        let book = book(r#"{"title": "Bare"}"#);
        let lines = rendered(&book);

        assert_eq!(lines[5], NO_IMAGE_PLACEHOLDER);
        assert!(!lines[5].contains("http"), "no broken image reference");
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let book = book("{}");
        let lines = rendered(&book);

        assert_eq!(lines[0], "Untitled");
        assert_eq!(lines[1], "Unknown Author");
        assert_eq!(lines[2], "First published: N/A");
        assert_eq!(lines[3], "Publisher: N/A");
        assert_eq!(lines[4], "ISBN: N/A");
    }

    #[test]
    fn card_height_covers_content_plus_borders() {
        let book = book("{}");
        let lines = rendered(&book);
        assert_eq!(lines.len() as u16 + 2, CARD_HEIGHT);
    }

    // ===== truncate_to_width =====

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn truncate_counts_wide_glyphs_as_two_columns() {
        // Each CJK glyph is two columns; four columns fit one glyph
        // plus the ellipsis.
        let out = truncate_to_width("本本本", 4);
        assert_eq!(out, "本…");
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
