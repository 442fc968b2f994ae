//! HTML output for a rendered grid.
//!
//! Markup follows the host page's stylesheet: a `table-container` holding
//! one `page` div per page, each with `tank-table` tables whose corner
//! header reads `X`.

use std::fmt::Write;

use crate::types::{Cell, RenderedGrid, Table};

/// Render the grid as an HTML fragment suitable for `innerHTML`.
pub fn render_fragment(grid: &RenderedGrid) -> String {
    let mut out = String::with_capacity(grid.cells().count() * 64);
    let _ = write!(
        out,
        r#"<div class="table-container {}">"#,
        grid.orientation.css_class()
    );
    for page in &grid.pages {
        let _ = write!(out, r#"<div class="page" data-page="{}">"#, page.index);
        for table in &page.tables {
            write_table(&mut out, table);
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

/// Render a standalone HTML document with minimal page styling.
pub fn render_document(grid: &RenderedGrid, title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", html_escape(title));
    out.push_str("<style>\n");
    out.push_str(DOCUMENT_CSS);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&render_fragment(grid));
    out.push_str("\n</body>\n</html>\n");
    out
}

const DOCUMENT_CSS: &str = "\
.table-container.horizontal .page { display: flex; gap: 16px; }
.page { margin-bottom: 24px; }
.tank-table { border-collapse: collapse; margin: 8px; }
.tank-table th, .tank-table td { border: 1px solid #999; padding: 2px 6px; font: 12px monospace; }
";

fn write_table(out: &mut String, table: &Table) {
    let _ = write!(
        out,
        r#"<table class="tank-table" data-table="{}"><thead><tr><th>X</th>"#,
        table.number
    );
    for header in &table.column_headers {
        let _ = write!(out, "<th>{header}</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        let _ = write!(out, "<tr><th>{}</th>", row.header);
        for cell in &row.cells {
            write_cell(out, cell);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_cell(out: &mut String, cell: &Cell) {
    let coordinate = html_escape(&cell.coordinate);
    match &cell.background {
        Some(color) => {
            let _ = write!(
                out,
                r#"<td data-coordinates="{coordinate}" style="background-color: {}">{coordinate}</td>"#,
                html_escape(color)
            );
        }
        None => {
            let _ = write!(out, r#"<td data-coordinates="{coordinate}">{coordinate}</td>"#);
        }
    }
}

/// Minimal HTML escaping for attribute/text content.
fn html_escape(s: &str) -> String {
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

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::{Orientation, Page, Row};

    fn one_cell_grid(background: Option<&str>) -> RenderedGrid {
        RenderedGrid {
            orientation: Orientation::Horizontal,
            pages: vec![Page {
                index: 0,
                tables: vec![Table {
                    number: 1,
                    column_offset: 0,
                    column_headers: vec![1],
                    rows: vec![Row {
                        header: 1,
                        cells: vec![Cell {
                            coordinate: "1.1".to_string(),
                            background: background.map(str::to_string),
                        }],
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_fragment_structure() {
        let html = render_fragment(&one_cell_grid(None));
        assert!(html.starts_with(r#"<div class="table-container horizontal">"#));
        assert!(html.contains(r#"<table class="tank-table" data-table="1">"#));
        assert!(html.contains("<th>X</th><th>1</th>"));
        assert!(html.contains(r#"<td data-coordinates="1.1">1.1</td>"#));
        assert!(!html.contains("background-color"));
    }

    #[test]
    fn test_background_is_escaped() {
        let html = render_fragment(&one_cell_grid(Some(r#"red"><script>"#)));
        assert!(html.contains("background-color: red&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_document_wraps_fragment() {
        let html = render_document(&one_cell_grid(Some("#ff0000")), "Grid <1>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Grid &lt;1&gt;</title>"));
        assert!(html.contains("background-color: #ff0000"));
    }
}
