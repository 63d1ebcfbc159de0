use crate::types::PackResult;

const HEADER: [&str; 3] = ["Pack", "Count", "Items"];

/// Renders pack results as a plain-text table with a total row.
pub fn render_breakdown(results: &[PackResult]) -> String {
    let rows: Vec<[String; 3]> = results
        .iter()
        .map(|r| [r.size.to_string(), r.count.to_string(), r.items().to_string()])
        .collect();

    let total_packs: u64 = results.iter().map(|r| r.count).sum();
    let total_items: u64 = results.iter().map(|r| r.items()).sum();
    let footer = [
        "Total".to_string(),
        total_packs.to_string(),
        total_items.to_string(),
    ];

    let mut widths = HEADER.map(str::len);
    for row in rows.iter().chain(std::iter::once(&footer)) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let [w0, w1, w2] = widths;
    let separator = format!(
        "{}+{}+{}",
        "-".repeat(w0 + 2),
        "-".repeat(w1 + 2),
        "-".repeat(w2 + 1)
    );

    let mut out = String::new();
    push_row(&mut out, &HEADER.map(String::from), &widths);
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&separator);
    out.push('\n');
    push_row(&mut out, &footer, &widths);
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let [a, b, c] = cells;
    let [w0, w1, w2] = *widths;
    out.push_str(&format!(" {a:>w0$} | {b:>w1$} | {c:>w2$}\n"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_breakdown() {
        let results = vec![
            PackResult { size: 5000, count: 2 },
            PackResult { size: 2000, count: 1 },
            PackResult { size: 250, count: 1 },
        ];
        let output = render_breakdown(&results);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  Pack | Count | Items");
        assert_eq!(lines[1], "-------+-------+------");
        assert_eq!(lines[2], "  5000 |     2 | 10000");
        assert_eq!(lines[4], "   250 |     1 |   250");
        assert_eq!(lines[6], " Total |     4 | 12250");
    }

    #[test]
    fn test_render_widens_for_large_counts() {
        let results = vec![PackResult {
            size: 5000,
            count: 200_000_000_000,
        }];
        let output = render_breakdown(&results);
        assert!(output.contains("200000000000"));
        assert!(output.contains("1000000000000000"));
        let widths: Vec<usize> = output.lines().map(str::len).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn test_render_empty() {
        let output = render_breakdown(&[]);
        assert!(output.contains("Total"));
        assert_eq!(output.lines().count(), 4);
    }
}
