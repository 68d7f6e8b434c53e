#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

/// Render an aligned table. Numeric cells are right-aligned; risk levels and
/// priorities are colored when `options.color` is set.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .chain(std::iter::once(display_len(header)))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect::<Vec<_>>();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(display_len(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_level(&padded, &text)
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

/// Narrow the widest columns one character at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| {
                **width > display_len(headers[*index]).max(MIN_COLUMN_WIDTH)
            })
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

fn truncate(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_len(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_start_matches('$').trim_end_matches('%');
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn colorize_level(padded: &str, text: &str) -> String {
    let code = match text.to_lowercase().as_str() {
        "alto" | "alta" | "failed" => "31",
        "medio" | "media" | "loading" => "33",
        "bajo" | "baja" | "operational" => "32",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".into(), "CURACAVI".into(), "0.99".into()],
            vec!["2".into(), "ISLA DE MAIPO".into(), "0.975".into()],
        ]
    }

    #[test]
    fn columns_are_aligned() {
        let table = render_table(&["#", "comuna", "auroc"], &rows(), TableOptions::default());
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("#     comuna"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // Numbers are right-aligned within their column.
        assert!(lines[2].starts_with("   1  CURACAVI"));
        assert!(lines[3].ends_with("0.975"));
        assert!(lines[2].ends_with(" 0.99"));
    }

    #[test]
    fn wide_columns_are_truncated() {
        let options = TableOptions {
            max_width: Some(20),
            color: false,
        };
        let table = render_table(&["#", "comuna", "auroc"], &rows(), options);
        assert!(table.contains('…'));
        assert!(table.lines().skip(2).all(|line| display_len(line) <= 20));
    }

    #[test]
    fn levels_are_colored_only_when_enabled() {
        let rows = vec![vec!["Alta".to_string()]];
        let plain = render_table(&["priority"], &rows, TableOptions::default());
        assert!(!plain.contains('\u{1b}'));

        let colored = render_table(
            &["priority"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(colored.contains("\u{1b}[31mAlta"));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["p0".to_string()]];
        let table = render_table(&["id", "title"], &rows, TableOptions::default());
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }
}
