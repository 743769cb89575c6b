//! Just enough HTML handling for the firmware's status pages.
//!
//! The admin UI renders everything as plain `<td>` tables with no ids or
//! classes, so a full DOM is overkill: the extractors only need the text
//! of every table cell in document order.

/// Text content of every `<td>` cell in `page`, in document order.
///
/// Matching is case-insensitive and tolerates attributes on the opening
/// tag. Cell text is tag-stripped, `&nbsp;`-stripped, and trimmed.
pub fn table_cells(page: &str) -> Vec<String> {
    let lower = page.to_ascii_lowercase();
    let mut cells = Vec::new();
    let mut from = 0;

    while let Some(rel) = lower[from..].find("<td") {
        let start = from + rel;
        let after_name = start + 3;

        // "<td" must be the whole tag name ("<tdata..." is not a cell).
        match lower.as_bytes().get(after_name).copied() {
            Some(b'>' | b' ' | b'\t' | b'\n' | b'\r') => {}
            _ => {
                from = after_name;
                continue;
            }
        }

        let Some(open_end) = lower[start..].find('>') else {
            break;
        };
        let content_start = start + open_end + 1;
        let Some(close_rel) = lower[content_start..].find("</td") else {
            break;
        };
        let content_end = content_start + close_rel;

        cells.push(cell_text(&page[content_start..content_end]));
        from = content_end;
    }

    cells
}

/// Strip markup and the firmware's `&nbsp;` padding from a cell body.
fn cell_text(raw: &str) -> String {
    strip_tags(raw)
        .replace("&nbsp;", "")
        .replace("&nbsp", "")
        .trim()
        .to_owned()
}

/// Drop everything between `<` and `>`, keeping the text in between.
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
