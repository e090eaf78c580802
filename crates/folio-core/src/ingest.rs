//! CSV ingest for review exports.
//!
//! The reader locates the required columns by header name, so column order
//! and extra columns do not matter.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::error::IngestError;
use crate::models::Row;

pub const SECTION_COLUMN: &str = "Section";
pub const QUESTION_NUMBER_COLUMN: &str = "Question Number";
pub const QUESTION_COLUMN: &str = "Question";
pub const RESPONSE_COLUMN: &str = "Response Option(s)";
pub const REVIEWER_COLUMN: &str = "Reviewer Names";

/// Required columns, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    SECTION_COLUMN,
    QUESTION_NUMBER_COLUMN,
    QUESTION_COLUMN,
    RESPONSE_COLUMN,
    REVIEWER_COLUMN,
];

/// Cell values read as "no value": the default null markers of the
/// spreadsheet tooling the CSV exports are usually produced with.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column positions resolved from the header record.
struct ColumnMap {
    section: usize,
    question_number: usize,
    question: usize,
    response: usize,
    reviewer: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let names: Vec<&str> = headers.iter().map(normalize_header).collect();
        let find = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| IngestError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            section: find(SECTION_COLUMN)?,
            question_number: find(QUESTION_NUMBER_COLUMN)?,
            question: find(QUESTION_COLUMN)?,
            response: find(RESPONSE_COLUMN)?,
            reviewer: find(REVIEWER_COLUMN)?,
        })
    }

    fn row(&self, record: &StringRecord) -> Row {
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        let response = record.get(self.response).unwrap_or_default();

        Row {
            section: field(self.section),
            question_number: field(self.question_number),
            question_text: field(self.question),
            response_text: (!is_missing(response)).then(|| response.to_string()),
            reviewer_name: field(self.reviewer),
        }
    }
}

fn normalize_header(name: &str) -> &str {
    name.trim_start_matches('\u{feff}').trim()
}

fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value.trim())
}

/// Read review rows from CSV, keeping file order.
///
/// Fails with [`IngestError::MissingColumn`] naming the first required
/// column that is absent, and with [`IngestError::EmptyInput`] when the file
/// has no data rows (a zero-byte file included).
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>, IngestError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    let columns = ColumnMap::from_headers(headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(columns.row(&record?));
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    Ok(rows)
}

/// Read review rows from an in-memory CSV payload.
pub fn read_rows_from_slice(bytes: &[u8]) -> Result<Vec<Row>, IngestError> {
    read_rows(bytes)
}
