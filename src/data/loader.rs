use std::path::Path;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use super::model::Series;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: '{text}' is not a number")]
    Parse { line: usize, text: String },
    #[error("expected a JSON array of numbers: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a series from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.txt` / `.log` / `.dat` / no extension – one number per line, blank lines ignored
/// * `.csv`  – `index,value` lines as printed by the capture firmware; the last field is the value
/// * `.json` – `[1.0, 2.5, ...]`
pub fn load_file(path: &Path) -> Result<Series> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let values = match ext.as_str() {
        "" | "txt" | "log" | "dat" => load_lines(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!("Loaded {} samples from {}", values.len(), path.display());
    Ok(Series::from_file(values, path))
}

// ---------------------------------------------------------------------------
// Line loader
// ---------------------------------------------------------------------------

fn load_lines(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).context("reading series file")?;
    Ok(parse_lines(&text)?)
}

/// Parse one float per line, skipping lines that are blank after trimming.
pub fn parse_lines(text: &str) -> Result<Vec<f64>, LoadError> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .map(|(line_no, tok)| parse_value(line_no, tok))
        .collect()
}

fn parse_value(line: usize, tok: &str) -> Result<f64, LoadError> {
    tok.parse::<f64>().map_err(|_| LoadError::Parse {
        line,
        text: tok.to_string(),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Headerless `index,value` rows.  The value is always the last field, so a
/// truncated row like `3,` fails to parse.  Rows with a single field are bare
/// values; rows whose fields are all empty are skipped.
fn load_csv(path: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let mut values = Vec::new();
    for result in reader.records() {
        let record = result.context("reading CSV record")?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record
            .position()
            .and_then(|p| usize::try_from(p.line()).ok())
            .unwrap_or(usize::MAX);

        let tok = record.get(record.len() - 1).unwrap_or("");
        values.push(parse_value(line, tok)?);
    }
    Ok(values)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    Ok(parse_json(&text)?)
}

/// Parse a top-level JSON array of numbers.
pub fn parse_json(text: &str) -> Result<Vec<f64>, LoadError> {
    Ok(serde_json::from_str::<Vec<f64>>(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn skips_blank_lines_and_trims() {
        let values = parse_lines("1.5\n\n  -2\n\t\n3e5  \n").unwrap();
        assert_eq!(values, vec![1.5, -2.0, 300_000.0]);
    }

    #[test]
    fn all_blank_is_empty() {
        assert!(parse_lines("\n   \n\n").unwrap().is_empty());
        assert!(parse_lines("").unwrap().is_empty());
    }

    #[test]
    fn reports_offending_line() {
        let err = parse_lines("1\n\nabc\n4\n").unwrap_err();
        match err {
            LoadError::Parse { line, text } => {
                assert_eq!(line, 3);
                assert_eq!(text, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn json_array() {
        assert_eq!(parse_json("[1, 2.5, -3]").unwrap(), vec![1.0, 2.5, -3.0]);
        assert!(matches!(parse_json("{\"x\": 1}"), Err(LoadError::Json(_))));
    }

    #[test]
    fn dispatches_by_extension() {
        let dir = TempDir::new().unwrap();

        let txt = dir.path().join("fft.txt");
        fs::write(&txt, "0\n300000\n\n0\n").unwrap();
        let series = load_file(&txt).unwrap();
        assert_eq!(series.values, vec![0.0, 300_000.0, 0.0]);
        assert_eq!(series.display_name(), "fft.txt");

        let csv_path = dir.path().join("fft.csv");
        fs::write(&csv_path, "0,10.5\n1, 20\n\n2,30\n").unwrap();
        assert_eq!(load_file(&csv_path).unwrap().values, vec![10.5, 20.0, 30.0]);

        let json = dir.path().join("fft.json");
        fs::write(&json, "[4, 5, 6]").unwrap();
        assert_eq!(load_file(&json).unwrap().values, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn csv_bad_value_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "0,1\n1,oops\n").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("oops"));
    }

    #[test]
    fn csv_single_field_rows_are_bare_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.csv");
        fs::write(&path, "10\n1,20\n , \n3,30\n").unwrap();
        assert_eq!(load_file(&path).unwrap().values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn csv_truncated_value_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fw.csv");
        fs::write(&path, "0,10\n1,\n2,30\n").unwrap();
        let err = load_file(&path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "{msg}");
    }

    #[test]
    fn unsupported_extension_fails() {
        let err = load_file(Path::new("spectrum.parquet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(load_file(&dir.path().join("nope.txt")).is_err());
    }
}
