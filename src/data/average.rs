use thiserror::Error;

use super::model::{AveragedSeries, Table};

#[derive(Debug, Error, PartialEq)]
pub enum AverageError {
    #[error("no tables to average")]
    NoTables,
    #[error("table {index} has {rows} amplitude rows, the first table has {required}")]
    ShortTable {
        index: usize,
        rows: usize,
        required: usize,
    },
}

// ---------------------------------------------------------------------------
// Row-wise mean across tables
// ---------------------------------------------------------------------------

/// Average the amplitude column of `tables` row by row.
///
/// Rows are matched by position. The frequency column and both axis labels
/// come from the first table unchanged; every table must have at least as
/// many amplitude rows as the first table has frequency rows.
pub fn average_tables(tables: &[Table]) -> Result<AveragedSeries, AverageError> {
    let first = tables.first().ok_or(AverageError::NoTables)?;
    let required = first.frequency.len();

    for (index, table) in tables.iter().enumerate() {
        if table.amplitude.len() < required {
            return Err(AverageError::ShortTable {
                index,
                rows: table.amplitude.len(),
                required,
            });
        }
        if index > 0
            && (table.frequency_label != first.frequency_label
                || table.amplitude_label != first.amplitude_label)
        {
            log::warn!(
                "Headers of {} ('{}' / '{}') differ from the first table ('{}' / '{}'); matching by position",
                table.source.display(),
                table.frequency_label,
                table.amplitude_label,
                first.frequency_label,
                first.amplitude_label
            );
        }
    }

    let count = tables.len() as f64;
    let amplitude = (0..required)
        .map(|i| tables.iter().map(|t| t.amplitude[i]).sum::<f64>() / count)
        .collect();

    Ok(AveragedSeries {
        frequency_label: first.frequency_label.clone(),
        amplitude_label: first.amplitude_label.clone(),
        frequency: first.frequency.clone(),
        amplitude,
        table_count: tables.len(),
    })
}
