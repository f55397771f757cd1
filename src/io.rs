use std::io::Read;
use std::path::Path;

use crate::error::{Result, SavgolError};

/// Reads a column of f64 values from a headered CSV file by column name.
///
/// Cells that do not parse as f64 (blank or non-numeric) are skipped. A column
/// name missing from the header is an error, not a silent fallback.
pub fn read_column<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<f64>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| SavgolError::ColumnNotFound(column.to_string()))?;
    collect_column(&mut reader, index)
}

/// Reads a column of f64 values from a CSV file by zero-based column index.
pub fn read_column_at<P: AsRef<Path>>(path: P, index: usize) -> Result<Vec<f64>> {
    let mut reader = csv::Reader::from_path(path)?;
    collect_column(&mut reader, index)
}

fn collect_column<R: Read>(reader: &mut csv::Reader<R>, index: usize) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(field) = record.get(index) {
            if let Ok(value) = field.parse::<f64>() {
                values.push(value);
            }
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(tag: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("savgol_io_{}_{}.csv", tag, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_named_column_skipping_bad_cells() {
        let path = write_temp_csv("named", "LP_Disp,mu\n0.0,0.62\n1.0,\n2.0,0.64\n3.0,oops\n4.0,0.63\n");
        let values = read_column(&path, "mu").unwrap();
        assert_eq!(values, vec![0.62, 0.64, 0.63]);

        let by_index = read_column_at(&path, 0).unwrap();
        assert_eq!(by_index, vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unknown_column_is_an_error() {
        let path = write_temp_csv("missing", "a,b\n1,2\n");
        let result = read_column(&path, "mu");
        assert!(matches!(result, Err(SavgolError::ColumnNotFound(name)) if name == "mu"));
        std::fs::remove_file(&path).ok();
    }
}
