use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, open_workbook_auto};

use super::model::Table;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a frequency/amplitude table from a file.  Dispatch by extension.
///
/// The first column is read as frequency and the second as amplitude; any
/// further columns are ignored.
///
/// Supported formats: `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods`. The
/// first worksheet is read and its first row holds the headers.
pub fn load_table(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_spreadsheet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    if table.is_empty() {
        log::warn!("{} has a header row but no data rows", path.display());
    }
    log::debug!("Read {table}");
    Ok(table)
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

fn load_spreadsheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).context("opening spreadsheet")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("spreadsheet has no worksheets")?
        .context("reading first worksheet")?;

    table_from_range(path, &range)
}

/// Build a table from a worksheet range whose first row holds the headers.
fn table_from_range(path: &Path, range: &Range<Data>) -> Result<Table> {
    let mut rows = range.rows();
    let header = rows.next().context("worksheet is empty")?;
    if header.len() < 2 {
        bail!("expected at least 2 columns, found {}", header.len());
    }

    let mut table = Table {
        source: path.to_path_buf(),
        frequency_label: header_text(&header[0], 0),
        amplitude_label: header_text(&header[1], 1),
        frequency: Vec::with_capacity(range.height().saturating_sub(1)),
        amplitude: Vec::with_capacity(range.height().saturating_sub(1)),
    };

    // 1-based sheet row of the first data row (the one below the header).
    let first_data_row = range.start().map_or(0, |(r, _)| r as usize) + 2;

    for (row_no, row) in rows.enumerate() {
        let sheet_row = first_data_row + row_no;
        table
            .frequency
            .push(cell_to_f64(&row[0]).with_context(|| format!("Row {sheet_row}, column 1"))?);
        table
            .amplitude
            .push(cell_to_f64(&row[1]).with_context(|| format!("Row {sheet_row}, column 2"))?);
    }

    Ok(table)
}

/// Header cells are rendered as text; blank ones get pandas-style names.
fn header_text(cell: &Data, col: usize) -> String {
    match cell {
        Data::Empty => format!("Unnamed: {col}"),
        other => other.to_string(),
    }
}

fn cell_to_f64(cell: &Data) -> Result<f64> {
    match cell {
        Data::Float(v) => Ok(*v),
        Data::Int(i) => Ok(*i as f64),
        Data::Empty => Ok(f64::NAN),
        Data::String(s) => parse_number(s),
        other => bail!("{other:?} is not a number"),
    }
}

/// Parse a text field; blank fields read as NaN.
fn parse_number(s: &str) -> Result<f64> {
    let tok = s.trim();
    if tok.is_empty() {
        return Ok(f64::NAN);
    }
    tok.parse::<f64>()
        .with_context(|| format!("'{tok}' is not a number"))
}
