//! CSV header reading and slice loading

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{CheckError, Result};
use crate::model::{CellValue, Column, Schema, Table};

/// Read only the header line of a CSV file and return the ordered column
/// names. No data rows are parsed.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = open(path)?;
    let headers = headers(&mut reader, path)?;
    Ok(headers.iter().map(|name| name.to_string()).collect())
}

/// Load up to `limit` data rows of a CSV file, projected onto `columns` in
/// the given order. File row order is preserved; a file with fewer than
/// `limit` rows yields all of them.
pub fn load_slice(path: &Path, schema: Schema, columns: &[String], limit: usize) -> Result<Table> {
    let mut reader = open(path)?;
    let headers = headers(&mut reader, path)?;

    // Map the file's own header names to their positions, first wins
    let mut positions: IndexMap<&str, usize> = IndexMap::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        positions.entry(name).or_insert(idx);
    }

    // Resolve the projection: every requested column must exist in this file
    let mut projection = Vec::with_capacity(columns.len());
    for (out_idx, name) in columns.iter().enumerate() {
        let src_idx = *positions
            .get(name.as_str())
            .ok_or_else(|| CheckError::ColumnMissing {
                column: name.clone(),
                path: path.to_path_buf(),
            })?;
        projection.push((
            src_idx,
            Column::with_type(name.as_str(), out_idx, schema.column_type(name)),
        ));
    }

    let table_columns: Vec<Column> = projection.iter().map(|(_, c)| c.clone()).collect();
    let mut table = Table::new(table_columns);

    for (record_idx, result) in reader.records().enumerate() {
        if table.row_count() == limit {
            break;
        }
        let line = record_idx + 2; // 1-indexed, header is line 1
        let record = result.map_err(|e| CheckError::Parse {
            path: path.to_path_buf(),
            line,
            message: e.to_string(),
        })?;

        let mut cells = Vec::with_capacity(projection.len());
        for (src_idx, column) in &projection {
            let raw = record.get(*src_idx).ok_or_else(|| CheckError::Parse {
                path: path.to_path_buf(),
                line,
                message: format!("row has no field for column `{}`", column.name),
            })?;
            let cell =
                CellValue::parse(raw, column.column_type).map_err(|message| CheckError::Parse {
                    path: path.to_path_buf(),
                    line,
                    message: format!("column `{}`: {message}", column.name),
                })?;
            cells.push(cell);
        }
        table.add_row(cells, line);
    }

    Ok(table)
}

fn open(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CheckError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CheckError::Parse {
            path: path.to_path_buf(),
            line: 0,
            message: e.to_string(),
        },
    })?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file)))
}

fn headers(reader: &mut csv::Reader<BufReader<File>>, path: &Path) -> Result<csv::StringRecord> {
    let headers = reader
        .headers()
        .map_err(|e| CheckError::Parse {
            path: path.to_path_buf(),
            line: 1,
            message: e.to_string(),
        })?
        .clone();
    if headers.is_empty() {
        return Err(CheckError::Parse {
            path: path.to_path_buf(),
            line: 1,
            message: "no readable header".to_string(),
        });
    }
    Ok(headers)
}
