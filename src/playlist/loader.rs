//! Module to parse playlist rows into validated tracks

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{domain::track::Track, playlist::error::LoadError};

pub const FIELDS_PER_ROW: usize = 8;

/// A numeric column whose value did not parse. The row is dropped, the
/// load continues.
struct BadNumber {
    column: &'static str,
    value: String,
}

/// Reads a playlist file into validated tracks, preserving row order.
///
/// The first line is a header and is discarded without validation. A row
/// with the wrong field count aborts the whole load; a row whose numeric
/// fields fail to parse is skipped with a warning and loading continues.
pub fn load(path: &Path) -> Result<Vec<Track>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut lines = BufReader::new(file).lines();

    if let Some(header) = lines.next() {
        header.map_err(io_err)?;
    }

    let mut tracks = Vec::new();

    // data rows are numbered from 1, excluding the header
    for (idx, line) in lines.enumerate() {
        let row = idx + 1;
        let line = line.map_err(io_err)?;
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() != FIELDS_PER_ROW {
            return Err(LoadError::RowShape {
                line: row,
                found: fields.len(),
                expected: FIELDS_PER_ROW,
            });
        }

        match parse_row(&fields) {
            Ok(track) => tracks.push(track),
            Err(BadNumber { column, value }) => {
                log::warn!("skipping row {row}: {column} value {value:?} is not an integer");
            }
        }
    }

    Ok(tracks)
}

fn parse_row(fields: &[&str]) -> Result<Track, BadNumber> {
    fn int(column: &'static str, raw: &str) -> Result<i64, BadNumber> {
        raw.parse().map_err(|_| BadNumber {
            column,
            value: raw.to_string(),
        })
    }

    Ok(Track {
        name: fields[0].to_string(),
        artist: fields[1].to_string(),
        album: fields[2].to_string(),
        genre: fields[3].to_string(),
        size: int("size", fields[4])?,
        duration: int("duration", fields[5])?,
        year: int("year", fields[6])?,
        plays: int("plays", fields[7])?,
    })
}
