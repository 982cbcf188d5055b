use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Spectrum;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a mass spectrum from a whitespace-delimited text file.
///
/// Layout: one sample per line, two columns (mass, intensity), no header.
/// ```text
/// 10.0    5
/// 12.0    1200
/// 14.0    3
/// ```
pub fn load_file(path: &Path) -> Result<Spectrum> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_two_column(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse two-column text. Blank lines are skipped; every other line must
/// hold exactly two numbers.
pub fn parse_two_column(text: &str) -> Result<Spectrum> {
    let mut spectrum = Spectrum::default();

    for (line_no, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [mass, intensity] => {
                spectrum.x.push(parse_number(mass, line_no, "mass")?);
                spectrum.y.push(parse_number(intensity, line_no, "intensity")?);
            }
            other => bail!("Line {line_no}: expected 2 columns, found {}", other.len()),
        }
    }

    Ok(spectrum)
}

fn parse_number(tok: &str, line: usize, col: &str) -> Result<f64> {
    tok.parse::<f64>()
        .with_context(|| format!("Line {line}, {col}: '{tok}' is not a number"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_mixed_whitespace() {
        let sp = parse_two_column("10.0 5\n12.0\t\t1200\n\n  14.0   3  \n").unwrap();
        assert_eq!(sp.x, vec![10.0, 12.0, 14.0]);
        assert_eq!(sp.y, vec![5.0, 1200.0, 3.0]);
    }

    #[test]
    fn empty_text_gives_empty_spectrum() {
        assert!(parse_two_column("").unwrap().is_empty());
        assert!(parse_two_column("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn wrong_column_count_reports_line() {
        let err = parse_two_column("1 2\n3 4 5\n").unwrap_err();
        assert!(err.to_string().contains("Line 2"), "{err}");
        let err = parse_two_column("1\n").unwrap_err();
        assert!(err.to_string().contains("found 1"), "{err}");
    }

    #[test]
    fn non_numeric_token_reports_line_and_column() {
        let err = parse_two_column("Mass Intensity\n1 2\n").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Line 1, mass: 'Mass'"), "{msg}");
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10 5\n12 1200\n14 3").unwrap();
        let sp = load_file(file.path()).unwrap();
        assert_eq!(sp.len(), 3);
        assert_eq!(sp.y[1], 1200.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }
}
