//! Reads datasets from a csv format: a header row with dimension names followed by rows of
//! numeric values.

#[cfg(test)]
#[path = "../../tests/unit/extensions/dataset_test.rs"]
mod dataset_test;

use somkit::dataset::VectorDataset;
use somkit::utils::{Float, GenericResult};
use std::io::{BufReader, Read};

/// Reads a dataset from csv. Every column is a dimension, the header row gives its name.
pub fn read_csv_dataset<R: Read>(reader: BufReader<R>) -> GenericResult<VectorDataset> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let names = reader
        .headers()
        .map_err(|err| format!("cannot read csv header: {err}"))?
        .iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>();

    if names.is_empty() || names.iter().any(|name| name.is_empty()) {
        return Err("csv header must contain non-empty column names".into());
    }

    let items = reader
        .records()
        .enumerate()
        .map(|(idx, record)| {
            // NOTE header is the first line
            let line = idx + 2;
            let record = record.map_err(|err| format!("cannot read csv line {line}: {err}"))?;

            if record.len() != names.len() {
                return Err(format!("line {line}: expected {} values, got {}", names.len(), record.len()));
            }

            record
                .iter()
                .zip(names.iter())
                .map(|(value, name)| {
                    value
                        .parse::<Float>()
                        .map_err(|err| format!("line {line}: cannot parse '{name}' value '{value}': {err}"))
                        .and_then(|parsed| {
                            if parsed.is_finite() {
                                Ok(parsed)
                            } else {
                                Err(format!("line {line}: '{name}' value '{value}' is not a finite number"))
                            }
                        })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    VectorDataset::new(names, items)
}
