use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::InputError;
use crate::model::{EmployeeRecord, RecordTable};
use crate::REQUIRED_COLUMNS;

/// Load a comma-delimited employee file with a header row
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<RecordTable, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loading records");
    parse_records(file)
}

/// Parse CSV text from any reader into a record table
pub fn parse_records<R: Read>(reader: R) -> Result<RecordTable, InputError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(InputError::Empty);
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let missing = missing_columns(&columns);
    if !missing.is_empty() {
        return Err(InputError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: EmployeeRecord = result?;
        records.push(record);
    }

    debug!(rows = records.len(), columns = columns.len(), "parsed record table");
    Ok(RecordTable::new(columns, records))
}

/// Required columns absent from `columns`, in `REQUIRED_COLUMNS` order
pub fn missing_columns(columns: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|required| required.to_string())
        .collect()
}
