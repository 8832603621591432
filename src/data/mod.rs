//! Typed input records and their JSON loaders.
//!
//! Loaders report problems as [`CalendarError::Data`], naming the file and, for malformed
//! documents, the JSON path of the offending value.

pub(crate) mod activity;
pub(crate) mod city;
pub(crate) mod holiday;

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::foundation::error::{CalendarError, CalendarResult};

/// Deserialize a JSON document, naming the failing key path on error.
pub(crate) fn parse_json<T: DeserializeOwned, R: Read>(r: R, origin: &str) -> CalendarResult<T> {
    let mut de = serde_json::Deserializer::from_reader(r);
    serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        CalendarError::data(format!("{origin}: invalid value at '{path}': {}", e.inner()))
    })
}

/// Read a required JSON file. A missing file is a data error.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> CalendarResult<T> {
    match read_optional_json(path)? {
        Some(v) => Ok(v),
        None => Err(CalendarError::data(format!(
            "data file not found: {}",
            path.display()
        ))),
    }
}

/// Read an optional JSON file. A missing file yields `None`; anything else that goes
/// wrong is a data error.
pub(crate) fn read_optional_json<T: DeserializeOwned>(path: &Path) -> CalendarResult<Option<T>> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CalendarError::data(format!(
                "open data file '{}': {e}",
                path.display()
            )));
        }
    };
    parse_json(BufReader::new(f), &path.display().to_string()).map(Some)
}
