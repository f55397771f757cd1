//! Reads a numeric column from a CSV file, smooths it, and writes the file
//! back with the smoothed values appended as a new column.
//!
//! Usage: append_smoothed <input.csv> <column> [window] [order]

use std::error::Error;

use savgol::{read_column, SavgolFilter};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: append_smoothed <input.csv> <column> [window] [order]");
        std::process::exit(2);
    }
    let input_path = &args[1];
    let column_name = &args[2];
    let window: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(41);
    let order: usize = args.get(4).map(|s| s.parse()).transpose()?.unwrap_or(5);

    let data = read_column(input_path, column_name)?;
    let filter = SavgolFilter::new(window, order)?;
    let smoothed = filter.apply(&data)?;

    // Re-read the full table so untouched columns pass through unchanged.
    let mut reader = csv::Reader::from_path(input_path)?;
    let headers = reader.headers()?.clone();
    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;

    let output_path = format!("{}.smoothed.csv", input_path.trim_end_matches(".csv"));
    let mut writer = csv::Writer::from_path(&output_path)?;

    let mut new_headers = headers.clone();
    new_headers.push_field(&format!("{}_smoothed", column_name));
    writer.write_record(&new_headers)?;

    for (i, record) in records.iter().enumerate() {
        let mut record = record.clone();
        let value = smoothed.get(i).map(|v| v.to_string()).unwrap_or_default();
        record.push_field(&value);
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!(
        "Smoothed '{}' (window={}, order={}) written to {}",
        column_name, window, order, output_path
    );
    Ok(())
}
