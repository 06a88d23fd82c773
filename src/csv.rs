// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Accumulates cells of the row being read; blank lines never become rows.
#[derive(Default)]
struct RowBuilder {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    field: String,
}

impl RowBuilder {
    fn end_field(&mut self) {
        self.row.push(take(&mut self.field));
    }

    fn end_row(&mut self) {
        self.end_field();
        let blank = self.row.len() == 1 && self.row[0].is_empty();
        let row = take(&mut self.row);
        if !blank {
            self.rows.push(row);
        }
    }
}

/// Quote-aware CSV/TSV reader. Accepts CRLF, a leading BOM and
/// `""` escapes; an unterminated quote runs to end of input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut b = RowBuilder::default();
    let mut quoted = false;
    let mut chars = text.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted {
            match ch {
                '"' if chars.next_if_eq(&'"').is_some() => b.field.push('"'),
                '"' => quoted = false,
                _ => b.field.push(ch),
            }
            continue;
        }
        match ch {
            '"' => quoted = true,
            '\r' => {
                chars.next_if_eq(&'\n');
                b.end_row();
            }
            '\n' => b.end_row(),
            c if c == sep => b.end_field(),
            _ => b.field.push(ch),
        }
    }

    b.end_row();
    b.rows
}

/// Guess the delimiter from the first line: tabs win over commas.
pub fn sniff_delim(text: &str) -> char {
    let first = text.lines().next().unwrap_or("");
    if first.matches('\t').count() > first.matches(',').count() { '\t' } else { ',' }
}

/// Position of the first header matching any of `names` (case-insensitive).
pub fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    names.iter().find_map(|want| {
        headers.iter().position(|h| h.trim().eq_ignore_ascii_case(want))
    })
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.chars().any(|c| c == sep || matches!(c, '"' | '\n' | '\r'))
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

/// Serialize a table for Copy/Export. Headers are emitted only when
/// present and `include_headers` is set.
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let header = headers.as_ref().filter(|_| include_headers);
    for r in header.into_iter().chain(rows) {
        // Writing into a Vec cannot fail
        let _ = write_row(&mut buf, r, sep);
    }

    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_field_keeps_commas() {
        let rows = parse_rows("app_id,integrations\r\na1,\"Klaviyo, Slack\"\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![s!("a1"), s!("Klaviyo, Slack")]);
    }

    #[test]
    fn escaped_quotes_and_blank_lines() {
        let rows = parse_rows("a,\"say \"\"hi\"\"\"\n\n b,c", ',');
        assert_eq!(rows, vec![
            vec![s!("a"), s!("say \"hi\"")],
            vec![s!(" b"), s!("c")],
        ]);
    }

    #[test]
    fn write_then_parse_preserves_cells() {
        let row = vec![s!("x"), s!("a,b"), s!("q\"uote")];
        let text = to_export_string(&None, &[row.clone()], false, ',');
        assert_eq!(parse_rows(&text, ','), vec![row]);
    }

    #[test]
    fn sniffs_tabs() {
        assert_eq!(sniff_delim("a\tb\tc\n1\t2\t3"), '\t');
        assert_eq!(sniff_delim("a,b\n"), ',');
    }
}
