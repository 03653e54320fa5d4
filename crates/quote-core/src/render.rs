//! # Plain-Text Rendering
//!
//! Lays out a [`QuoteDocument`] as monospace text for the print/export
//! hand-off. The browser view renders the same document as HTML; this is
//! the format for terminals, logs and plain-text attachments.
//!
//! Every block (header, meta, customer, items, totals, footer) is a
//! borderless `comfy_table` laid out dynamically at the requested width, so
//! long cells wrap onto extra lines instead of being cut or overflowing.
//! Filler rows are an HTML layout concern and are not printed here.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table, TableComponent};

use crate::document::QuoteDocument;

/// Narrowest layout the renderer will produce.
pub const MIN_TEXT_WIDTH: usize = 60;

const COLUMN_GAP: u16 = 1;
const INDENT: &str = "  ";

/// Renders the document at `width` columns (at least [`MIN_TEXT_WIDTH`]).
///
/// ## Example
/// ```rust
/// use quote_core::document::QuoteDocument;
/// use quote_core::render::render_plain_text;
/// use quote_core::store::add_line_item;
/// use quote_core::QuoteState;
///
/// let doc = QuoteDocument::from_state(&add_line_item(&QuoteState::default()));
/// let text = render_plain_text(&doc, 80);
///
/// assert!(text.contains("New Item"));
/// assert!(text.lines().all(|line| line.chars().count() <= 80));
/// ```
pub fn render_plain_text(doc: &QuoteDocument, width: usize) -> String {
    let width = width.max(MIN_TEXT_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    // Header
    let brand = match (&doc.company_name, &doc.logo) {
        (Some(name), _) => name.clone(),
        (None, Some(_)) => "[logo]".to_string(),
        (None, None) => String::new(),
    };
    if char_len(&brand) + 1 + char_len(&doc.title) <= width {
        let fill = width - char_len(&brand) - char_len(&doc.title);
        push(&mut lines, format!("{}{}{}", brand, " ".repeat(fill), doc.title));
    } else {
        for line in paragraph(&brand, width) {
            push(&mut lines, line);
        }
        push(&mut lines, align_right(&doc.title, width));
    }

    let meta = layout(
        doc.meta
            .iter()
            .map(|row| {
                vec![
                    Cell::new(&row.label).set_alignment(CellAlignment::Right),
                    Cell::new(&row.value),
                ]
            })
            .collect(),
        width,
    );
    push_block_right(&mut lines, &meta, width);
    lines.push(String::new());

    // Customer
    push(&mut lines, doc.customer_heading.clone());
    for line in &doc.customer_lines {
        push_indented(&mut lines, line, width);
    }
    lines.push(String::new());

    // Description
    push(&mut lines, doc.description_heading.clone());
    push_indented(&mut lines, &doc.description, width);
    lines.push(String::new());

    // Line items
    let mut items = layout(Vec::new(), width);
    items
        .set_header(
            doc.columns
                .iter()
                .enumerate()
                .map(|(i, heading)| match i {
                    0 | 2 => Cell::new(heading),
                    _ => Cell::new(heading).set_alignment(CellAlignment::Right),
                })
                .collect::<Vec<Cell>>(),
        )
        .set_style(TableComponent::HeaderLines, '-');
    for row in &doc.rows {
        items.add_row(vec![
            Cell::new(&row.description),
            Cell::new(&row.quantity).set_alignment(CellAlignment::Right),
            Cell::new(&row.category),
            Cell::new(&row.rate).set_alignment(CellAlignment::Right),
            Cell::new(&row.line_total).set_alignment(CellAlignment::Right),
        ]);
    }
    gap_columns(&mut items);
    for line in items.lines() {
        push(&mut lines, line);
    }
    push(&mut lines, "-".repeat(width));

    // Totals
    let totals = layout(
        doc.totals
            .iter()
            .map(|row| {
                vec![
                    Cell::new(&row.label).set_alignment(CellAlignment::Right),
                    Cell::new(&row.unit),
                    Cell::new(&row.value).set_alignment(CellAlignment::Right),
                ]
            })
            .collect(),
        width,
    );
    push_block_right(&mut lines, &totals, width);
    lines.push(String::new());

    if !doc.terms.trim().is_empty() {
        push(&mut lines, "Terms".to_string());
        push_indented(&mut lines, &doc.terms, width);
        lines.push(String::new());
    }

    // Acceptance
    for line in paragraph(&doc.acceptance.prompt, width) {
        push(&mut lines, center(&line, width));
    }
    lines.push(String::new());
    let slots = doc.acceptance.slots.len().max(1);
    let slot_width = (width - (slots - 1) * 2) / slots;
    let rules: Vec<String> = (0..slots).map(|_| "_".repeat(slot_width)).collect();
    push(&mut lines, rules.join("  "));
    let captions: Vec<String> = doc
        .acceptance
        .slots
        .iter()
        .map(|s| format!("{:<w$}", s, w = slot_width))
        .collect();
    push(&mut lines, captions.join("  "));
    lines.push(String::new());

    // Footer
    let footer = &doc.footer;
    for text in [&footer.greeting, &footer.enquiry] {
        for line in paragraph(text, width) {
            push(&mut lines, center(&line, width));
        }
    }
    push(&mut lines, ".".repeat(width));
    for text in [&footer.address_line, &footer.contact_line] {
        for line in paragraph(text, width) {
            push(&mut lines, center(&line, width));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Borderless, dynamically wrapped table no wider than `width`.
fn layout(rows: Vec<Vec<Cell>>, width: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(width).unwrap_or(u16::MAX));
    for row in rows {
        table.add_row(row);
    }
    gap_columns(&mut table);
    table
}

/// One space between columns, none at the edges.
fn gap_columns(table: &mut Table) {
    let count = table.column_iter_mut().count();
    for (i, column) in table.column_iter_mut().enumerate() {
        let right = if i + 1 == count { 0 } else { COLUMN_GAP };
        column.set_padding((0, right));
    }
}

/// Wraps free text to `width`. Blank text gives no lines.
fn paragraph(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let table = layout(vec![vec![Cell::new(text.trim())]], width);
    table.lines().map(|line| line.trim_end().to_string()).collect()
}

fn push(lines: &mut Vec<String>, line: String) {
    lines.push(line.trim_end().to_string());
}

fn push_indented(lines: &mut Vec<String>, text: &str, width: usize) {
    for line in paragraph(text, width - INDENT.len()) {
        push(lines, format!("{}{}", INDENT, line));
    }
}

/// Pushes the table flush against the right margin.
fn push_block_right(lines: &mut Vec<String>, table: &Table, width: usize) {
    let rendered: Vec<String> = table.lines().collect();
    let block = rendered.iter().map(|l| char_len(l)).max().unwrap_or(0);
    let indent = " ".repeat(width.saturating_sub(block));
    for line in rendered {
        push(lines, format!("{}{}", indent, line));
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn align_right(text: &str, width: usize) -> String {
    format!("{:>w$}", text, w = width)
}

fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(char_len(text));
    format!("{}{}", " ".repeat(fill / 2), text)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{set_logo, update_field, update_line_item};
    use crate::types::{LineItemField, QuoteState, Section};
    use chrono::NaiveDate;

    fn sample() -> QuoteState {
        QuoteState::sample(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    fn render(state: &QuoteState, width: usize) -> String {
        render_plain_text(&QuoteDocument::from_state(state), width)
    }

    #[test]
    fn test_paragraph() {
        assert!(paragraph("", 10).is_empty());
        assert!(paragraph("   ", 10).is_empty());
        assert_eq!(paragraph("short", 60), vec!["short"]);

        let lines = paragraph("one two three four five six seven", 12);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" ").split_whitespace().count(), 7);
    }

    #[test]
    fn test_sample_contains_key_lines() {
        let text = render(&sample(), 80);

        assert!(text.starts_with("afriwork"));
        assert!(text.lines().next().unwrap().ends_with("Quote"));
        assert!(text.contains("October 18, 2026"));
        assert!(text.contains("Recruitment for"));
        assert!(text.contains("Accountant"));
        assert!(text.contains("45,400.00"));
        assert!(text.contains("89,520.00"));
        assert!(text.contains("VAT Rate"));
        assert!(text.contains("Thank you for your business!"));
        assert!(text.contains("111 Street, Town/City, County, ST, 00000"));
    }

    #[test]
    fn test_wide_layout_keeps_descriptions_on_one_line() {
        let text = render(&sample(), 120);
        assert!(text.contains("Recruitment for Accountant position"));
        assert!(text.contains("Recruitment for Cashier position"));
    }

    #[test]
    fn test_totals_line_layout() {
        let text = render(&sample(), 80);
        let total_line = text
            .lines()
            .find(|l| l.trim_start().starts_with("Total "))
            .unwrap();
        assert!(total_line.ends_with("89,520.00"));
        assert!(total_line.contains('$'));
    }

    #[test]
    fn test_lines_fit_width() {
        let long = "A very long line item description that certainly will not fit into a single column of the table";
        let state = update_line_item(&sample(), 0, LineItemField::Description, long);

        for width in [60, 80, 120] {
            let text = render(&state, width);
            for line in text.lines() {
                assert!(line.chars().count() <= width, "{:?} exceeds {}", line, width);
            }
        }

        // Wide enough that no word is split: every word survives wrapping
        for width in [80, 120] {
            let text = render(&state, width);
            for word in long.split_whitespace() {
                assert!(text.contains(word), "{:?} missing at {}", word, width);
            }
        }
    }

    #[test]
    fn test_long_overrides_stay_within_width() {
        let state = update_field(
            &sample(),
            Section::Totals,
            "total",
            "ninety thousand dollars, payable in three instalments over the year",
        )
        .unwrap();
        let state = update_field(
            &state,
            Section::Branding,
            "company_name",
            "Afriwork Recruitment and Staffing Solutions International Holdings Ltd",
        )
        .unwrap();

        for width in [60, 80] {
            let text = render(&state, width);
            for line in text.lines() {
                assert!(line.chars().count() <= width, "{:?} exceeds {}", line, width);
            }
            assert!(text.contains("Holdings Ltd"));
            assert!(text.contains("instalments"));
            assert!(text.lines().any(|l| l.ends_with("Quote")));
        }
    }

    #[test]
    fn test_narrow_width_is_clamped() {
        let text = render(&sample(), 10);
        assert!(text.lines().any(|l| l.chars().count() > 10));
        assert!(text.lines().all(|l| l.chars().count() <= MIN_TEXT_WIDTH));
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let text = render(&sample(), 80);
        assert!(text.lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn test_logo_placeholder_when_name_hidden() {
        let state = set_logo(&sample(), "data:image/png;base64,AAAA");
        let state = update_field(&state, Section::Branding, "company_name_enabled", false)
            .unwrap();
        let text = render(&state, 80);
        assert!(text.starts_with("[logo]"));
        assert!(!text.contains("base64"));
    }

    #[test]
    fn test_terms_only_when_present() {
        assert!(!render(&sample(), 80).contains("Terms"));

        let state = update_field(&sample(), Section::Quote, "terms", "Net 30").unwrap();
        let text = render(&state, 80);
        assert!(text.contains("Terms"));
        assert!(text.contains("  Net 30"));
    }
}
