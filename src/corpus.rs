//! CSV corpus loading.
//!
//! The corpus is read once at startup and materialized as an immutable
//! [`Corpus`]; canonical keys are computed here so that query-time scoring
//! never touches the normalizer for record fields again.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::models::Record;

/// The fixed, immutable record set available to the matcher.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One CSV row, with the column headers used by the record exports.
/// Missing values deserialize as empty strings rather than failing the load.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Khata Number", default)]
    khata_number: String,
    #[serde(rename = "Khasra Number", default)]
    khasra_number: String,
    #[serde(rename = "area", default)]
    area: String,
    #[serde(rename = "district", default)]
    district: String,
    #[serde(rename = "owner_name", default)]
    owner_name: String,
    #[serde(rename = "father_name", default)]
    father_name: String,
    #[serde(rename = "document", default)]
    document: String,
}

/// Load the corpus from a CSV file, precomputing canonical keys per record.
pub fn load(path: &Path) -> Result<Corpus> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open corpus file {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row.context("Failed to parse corpus row")?;
        records.push(Record::new(
            row.khata_number,
            row.khasra_number,
            row.area,
            row.district,
            row.owner_name,
            row.father_name,
            row.document,
        ));
    }

    Ok(Corpus { records })
}
