//! Column-aligned text tables.

#[derive(Clone, Copy, Debug, Default)]
pub struct TableStyle {
    /// Shrink the widest columns until rows fit.
    pub width: Option<usize>,
    /// Colour well-known status words.
    pub color: bool,
}

const GAP: &str = "  ";
const MIN_COLUMN: usize = 8;

/// Render `rows` under `headers`. Short rows are padded with `-`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], style: TableStyle) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();
    if let Some(limit) = style.width {
        shrink(&mut widths, headers, limit);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1)));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = clip(row.get(col).map_or("-", String::as_str), *width);
                let numeric = is_numeric(&cell);
                let padded = pad(&cell, *width, numeric);
                if style.color {
                    paint(&padded, &cell)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink(widths: &mut [usize], headers: &[&str], limit: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > limit {
        let floor = |col: usize| headers[col].chars().count().max(MIN_COLUMN);
        let widest = (0..widths.len())
            .filter(|&col| widths[col] > floor(col))
            .max_by_key(|&col| widths[col]);
        match widest {
            Some(col) => widths[col] -= 1,
            None => break,
        }
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.parse::<f64>().is_ok()
}

/// Wrap `padded` in an ANSI colour chosen by the cell's word.
fn paint(padded: &str, cell: &str) -> String {
    let code = match cell {
        "compliant" | "pass" | "low" | "true" => "32",
        "needs_improvement" | "medium" | "warning" => "33",
        "non_compliant" | "fail" | "high" | "false" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
