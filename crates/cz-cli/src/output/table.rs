#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    pub const PLAIN: Self = Self {
        max_width: None,
        color: false,
    };
}

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

/// Render an aligned plain-text table. Numeric cells are right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let header_line = header_line.trim_end().to_string();
    let divider = "-".repeat(display_width(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let numeric = looks_numeric(&text);
                let padded = pad(&text, *width, numeric);
                if options.color {
                    colorize_status(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Render label/value pairs as a two-column block with no header.
#[must_use]
pub fn render_pairs(pairs: &[(String, String)]) -> String {
    let label_width = pairs
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);
    pairs
        .iter()
        .map(|(label, value)| format!("{}{SEPARATOR}{value}", pad(label, label_width, false)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| {
                **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH)
            })
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Amounts may carry a leading currency symbol.
fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_start_matches(|ch: char| !ch.is_ascii() && !ch.is_alphanumeric());
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Colour a padded cell by its plain text.
fn colorize_status(padded: &str, text: &str) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "paid" | "active" | "true" | "yes" | "authenticated" => "32",
        "pending" | "credit" | "env" => "33",
        "unpaid" | "inactive" | "false" | "no" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn header_then_divider_then_rows() {
        let table = render_table(
            &["#", "Name", "Amount"],
            &rows(&[&["1", "Asha", "150"], &["2", "Ravi Kumar", "40"]]),
            TableOptions::PLAIN,
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('#'));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("Asha"));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let table = render_table(
            &["Amount"],
            &rows(&[&["5"], &["1500"]]),
            TableOptions::PLAIN,
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "     5");
        assert_eq!(lines[3], "  1500");
    }

    #[test]
    fn currency_amounts_count_as_numeric() {
        assert!(looks_numeric("₹1,500"));
        assert!(looks_numeric("-24.5"));
        assert!(!looks_numeric("Paid"));
        assert!(!looks_numeric("-"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let table = render_table(
            &["Name", "Status"],
            &rows(&[&["a very long participant name indeed", "Paid"]]),
            TableOptions {
                max_width: Some(24),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("row line");
        assert!(row.contains('…'));
        assert!(display_width(row) <= 24);
    }

    #[test]
    fn status_colour_keeps_alignment() {
        let table = render_table(
            &["Status", "Name"],
            &rows(&[&["Unpaid", "Asha"]]),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let row = table.lines().nth(2).expect("row line");
        assert!(row.starts_with("\u{1b}[31mUnpaid\u{1b}[0m"));
        assert!(row.ends_with("Asha"));
    }

    #[test]
    fn pairs_align_labels() {
        let block = render_pairs(&[
            ("Cash Collected".to_string(), "100".to_string()),
            ("Count".to_string(), "3".to_string()),
        ]);
        assert_eq!(block, "Cash Collected  100\nCount           3");
    }
}
