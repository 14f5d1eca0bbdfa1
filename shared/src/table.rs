//! Normalized tabular model and decoders
//!
//! Spreadsheet (xlsx/xls) and CSV payloads decode into the same
//! [`SheetTable`] shape so the render selector can treat all tabular
//! documents identically; only the decode step varies. Row shaping is a
//! pure function shared by both formats:
//!
//! - Columns derive once from row 0; a missing header cell gets the
//!   placeholder `Column N` (1-based).
//! - Blank rows are preserved, not skipped, so row indices stay
//!   meaningful for the viewer.
//! - Every row carries exactly one entry per declared column key, with
//!   all values coerced to text and absent cells as empty text.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use serde::{Deserialize, Serialize};

/// Decode failure: the payload was obtained but is structurally invalid
/// for its declared type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("no-valid-sheets")]
    NoValidSheets,
}

/// Sub-kind of a tabular payload, derived from the declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularKind {
    Xlsx,
    Xls,
    Csv,
}

impl TabularKind {
    /// Map a declared MIME string to the decoder to use.
    pub fn from_declared(declared: &str) -> Option<Self> {
        if declared.contains("spreadsheetml.sheet") {
            Some(Self::Xlsx)
        } else if declared.contains("application/vnd.ms-excel") {
            Some(Self::Xls)
        } else if declared.contains("text/csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

/// One column of a decoded worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable lookup key (stringified 0-based index)
    pub key: String,
    /// Header text, or the `Column N` placeholder
    pub display_name: String,
}

/// Normalized representation of one worksheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    pub columns: Vec<Column>,
    /// One entry per declared column key in each row, text-coerced
    pub rows: Vec<HashMap<String, String>>,
}

/// A named worksheet within a decoded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub table: SheetTable,
}

/// An ordered collection of decoded worksheets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn first_sheet_name(&self) -> Option<&str> {
        self.sheets.first().map(|s| s.name.as_str())
    }
}

/// Decode a tabular payload of the given sub-kind.
pub fn decode_tabular(bytes: &[u8], kind: TabularKind) -> Result<Workbook, DecodeError> {
    match kind {
        TabularKind::Xlsx | TabularKind::Xls => decode_workbook(bytes, kind),
        TabularKind::Csv => decode_csv(bytes),
    }
}

/// Decode a spreadsheet container into its included worksheets.
pub fn decode_workbook(bytes: &[u8], kind: TabularKind) -> Result<Workbook, DecodeError> {
    let mut raw: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    match kind {
        TabularKind::Xlsx => {
            let mut workbook =
                Xlsx::new(Cursor::new(bytes)).map_err(|_| DecodeError::NoValidSheets)?;
            for name in workbook.sheet_names().to_vec() {
                if let Ok(range) = workbook.worksheet_range(&name) {
                    raw.push((name, rows_from_range(&range)));
                }
            }
        }
        TabularKind::Xls => {
            let mut workbook =
                Xls::new(Cursor::new(bytes)).map_err(|_| DecodeError::NoValidSheets)?;
            for name in workbook.sheet_names().to_vec() {
                if let Ok(range) = workbook.worksheet_range(&name) {
                    raw.push((name, rows_from_range(&range)));
                }
            }
        }
        TabularKind::Csv => return decode_csv(bytes),
    }

    let sheets: Vec<Sheet> = raw
        .into_iter()
        .filter(|(_, rows)| include_worksheet(rows))
        .filter_map(|(name, rows)| shape_table(&rows).map(|table| Sheet { name, table }))
        .collect();

    if sheets.is_empty() {
        return Err(DecodeError::NoValidSheets);
    }
    Ok(Workbook { sheets })
}

/// Decode a CSV stream into a single synthetic worksheet named `Sheet1`.
pub fn decode_csv(bytes: &[u8]) -> Result<Workbook, DecodeError> {
    let rows = csv_rows(bytes)?;
    let table = shape_table(&rows).ok_or(DecodeError::NoValidSheets)?;
    Ok(Workbook {
        sheets: vec![Sheet {
            name: "Sheet1".to_string(),
            table,
        }],
    })
}

/// Shape raw cell rows into a table: row 0 becomes the columns, the rest
/// become keyed rows. Returns `None` when there are no rows at all.
pub fn shape_table(rows: &[Vec<String>]) -> Option<SheetTable> {
    let (header, data) = rows.split_first()?;

    let columns: Vec<Column> = if header.is_empty() {
        // Zero-width header row: synthesize a single default column
        vec![Column {
            key: "0".to_string(),
            display_name: "Column A".to_string(),
        }]
    } else {
        header
            .iter()
            .enumerate()
            .map(|(index, cell)| Column {
                key: index.to_string(),
                display_name: if cell.is_empty() {
                    format!("Column {}", index + 1)
                } else {
                    cell.clone()
                },
            })
            .collect()
    };

    let shaped = data
        .iter()
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    (column.key.clone(), row.get(index).cloned().unwrap_or_default())
                })
                .collect::<HashMap<_, _>>()
        })
        .collect();

    Some(SheetTable {
        columns,
        rows: shaped,
    })
}

/// A worksheet is included when it has at least one data row, or any
/// populated cell beyond a single header cell.
fn include_worksheet(rows: &[Vec<String>]) -> bool {
    let data_rows = rows.len().saturating_sub(1);
    let populated = rows.iter().flatten().filter(|cell| !cell.is_empty()).count();
    data_rows >= 1 || populated >= 2
}

fn rows_from_range(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Read CSV records without losing blank lines: the reader skips them, so
/// they are reinserted from record line positions (accounting for
/// newlines embedded in quoted fields) to keep row indices aligned with
/// the source.
fn csv_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, DecodeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut next_line: u64 = 1;
    for record in reader.records() {
        let record = record.map_err(|_| DecodeError::NoValidSheets)?;
        if let Some(position) = record.position() {
            let line = position.line();
            while next_line < line {
                rows.push(Vec::new());
                next_line += 1;
            }
            next_line = line;
        }
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        let embedded_newlines: u64 = cells
            .iter()
            .map(|cell| cell.matches('\n').count() as u64)
            .sum();
        rows.push(cells);
        next_line += 1 + embedded_newlines;
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn csv_blank_cells_become_empty_text() {
        let workbook = decode_csv(b"a,b\n1,\n,2").unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Sheet1"]);

        let table = &workbook.sheets[0].table;
        let names: Vec<&str> = table.columns.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["0"], "1");
        assert_eq!(table.rows[0]["1"], "");
        assert_eq!(table.rows[1]["0"], "");
        assert_eq!(table.rows[1]["1"], "2");
    }

    #[test]
    fn csv_preserves_blank_lines() {
        let workbook = decode_csv(b"a,b\n\n1,2").unwrap();
        let table = &workbook.sheets[0].table;
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["0"], "");
        assert_eq!(table.rows[0]["1"], "");
        assert_eq!(table.rows[1]["0"], "1");
    }

    #[test]
    fn csv_with_only_headers_is_a_valid_empty_sheet() {
        let workbook = decode_csv(b"a,b,c").unwrap();
        let table = &workbook.sheets[0].table;
        assert_eq!(table.columns.len(), 3);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn empty_csv_has_no_valid_sheets() {
        assert_eq!(decode_csv(b""), Err(DecodeError::NoValidSheets));
    }

    #[test]
    fn malformed_spreadsheet_has_no_valid_sheets() {
        assert_eq!(
            decode_workbook(b"not a zip archive", TabularKind::Xlsx),
            Err(DecodeError::NoValidSheets)
        );
        assert_eq!(
            decode_workbook(b"not a cfb container", TabularKind::Xls),
            Err(DecodeError::NoValidSheets)
        );
    }

    #[test]
    fn missing_header_cells_get_placeholder_names() {
        let table = shape_table(&[row(&["a", "", "c"]), row(&["1", "2", "3"])]).unwrap();
        let names: Vec<&str> = table.columns.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["a", "Column 2", "c"]);
    }

    #[test]
    fn zero_width_header_synthesizes_one_column() {
        let table = shape_table(&[Vec::new(), row(&["x"])]).unwrap();
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].display_name, "Column A");
        // The data row is wider than the declared columns; extras drop
        assert_eq!(table.rows[0]["0"], "x");
    }

    #[test]
    fn short_rows_pad_with_empty_text() {
        let table = shape_table(&[row(&["a", "b"]), row(&["1"])]).unwrap();
        assert_eq!(table.rows[0]["0"], "1");
        assert_eq!(table.rows[0]["1"], "");
    }

    #[test]
    fn worksheet_inclusion_rules() {
        // Header plus a data row: included
        assert!(include_worksheet(&[row(&["a"]), row(&["1"])]));
        // Two populated header cells, no data rows: included
        assert!(include_worksheet(&[row(&["a", "b"])]));
        // A single header cell and nothing else: excluded
        assert!(!include_worksheet(&[row(&["a"])]));
        // Nothing at all: excluded
        assert!(!include_worksheet(&[]));
        // A preserved blank row still counts as a data row
        assert!(include_worksheet(&[row(&["a"]), Vec::new()]));
    }

    #[test]
    fn tabular_kind_from_declared_type() {
        assert_eq!(
            TabularKind::from_declared(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            Some(TabularKind::Xlsx)
        );
        assert_eq!(
            TabularKind::from_declared("application/vnd.ms-excel"),
            Some(TabularKind::Xls)
        );
        assert_eq!(TabularKind::from_declared("text/csv"), Some(TabularKind::Csv));
        assert_eq!(TabularKind::from_declared("text/plain"), None);
    }

    #[test]
    fn cell_text_coercions() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Float(1.0)), "1");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(-3)), "-3");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
        assert_eq!(cell_text(&Data::String("x".into())), "x");
    }
}
