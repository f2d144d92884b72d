use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Table – one loaded measurement file
// ---------------------------------------------------------------------------

/// The two leading columns of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Where the table was read from (used in diagnostics).
    pub source: PathBuf,
    /// Header text of the first column.
    pub frequency_label: String,
    /// Header text of the second column.
    pub amplitude_label: String,
    /// First column (x).
    pub frequency: Vec<f64>,
    /// Second column (y) – same length as `frequency`.
    pub amplitude: Vec<f64>,
}

impl Table {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} rows, '{}' / '{}')",
            self.source.display(),
            self.len(),
            self.frequency_label,
            self.amplitude_label
        )
    }
}

// ---------------------------------------------------------------------------
// AveragedSeries – the plotted result
// ---------------------------------------------------------------------------

/// Frequency column of the first table paired with the mean amplitude.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedSeries {
    pub frequency_label: String,
    pub amplitude_label: String,
    pub frequency: Vec<f64>,
    pub amplitude: Vec<f64>,
    /// How many tables went into the mean.
    pub table_count: usize,
}

impl AveragedSeries {
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }

    /// `[x, y]` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.frequency
            .iter()
            .zip(self.amplitude.iter())
            .map(|(&x, &y)| [x, y])
    }
}
