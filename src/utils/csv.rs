// src/utils/csv.rs

//! Line tokenizer for loosely formatted spreadsheet exports.
//!
//! The delimiter is detected per line, not per document: a sheet that mixes
//! `;` and `,` lines is split with whichever wins on each line. Doubled quotes
//! inside a quoted field are not unescaped.

/// Pick `;` when it yields more segments than `,`, otherwise `,`.
pub fn detect_delimiter(line: &str) -> char {
    let semicolon_segments = line.split(';').count();
    let comma_segments = line.split(',').count();
    if semicolon_segments > comma_segments {
        ';'
    } else {
        ','
    }
}

/// Split one line into trimmed fields.
///
/// A `"` toggles quoted mode and is dropped from the output; inside quotes the
/// delimiter is literal text. An empty line yields a single empty field.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let delimiter = detect_delimiter(line);
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            fields.push(finish_field(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(finish_field(&mut current));

    fields
}

fn finish_field(buf: &mut String) -> String {
    let field = std::mem::take(buf);
    let trimmed = field.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    trimmed.strip_suffix('"').unwrap_or(trimmed).to_string()
}
