use colored::Colorize;
use libnw::align::SequenceAligner;

/// Render the alignment table with the residues of x down the side and the
/// residues of y across the top. Cells on the optimal path are highlighted.
pub fn render_table(aligner: &SequenceAligner) -> String {
    let cache = aligner.cache();
    let x = aligner.x();
    let y = aligner.y();

    let width = (0..cache.rows())
        .flat_map(|row| (0..cache.cols()).map(move |col| (row, col)))
        .map(|(row, col)| cache.get(row, col).score().to_string().len())
        .max()
        .unwrap_or(1)
        + 2;

    let mut out = String::new();

    // the header row starts past the row label and the empty-prefix column
    out.push_str(&" ".repeat(2 + width));
    for &residue in y.residues() {
        out.push_str(&format!("{:>w$}", char::from(residue), w = width));
    }
    out.push('\n');

    for row in 0..cache.rows() {
        let label = match row {
            0 => ' ',
            _ => char::from(x.utf8_bytes[row]),
        };
        out.push(label);
        out.push(' ');

        for col in 0..cache.cols() {
            let cell = cache.get(row, col);
            let text = format!("{:>w$}", cell.score(), w = width);
            if cell.is_marked() {
                out.push_str(&text.green().bold().to_string());
            } else {
                out.push_str(&text.dimmed().to_string());
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() -> anyhow::Result<()> {
        colored::control::set_override(false);

        let aligner = SequenceAligner::new("A", "AC")?;
        let table = render_table(&aligner);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "         A   C");
        assert_eq!(lines[1], "     0  -1  -2");
        assert_eq!(lines[2], "A   -1   2   1");
        Ok(())
    }
}
