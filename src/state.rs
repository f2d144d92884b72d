use crate::config::AnalysisConfig;
use crate::data::model::AveragedSeries;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the window shows, computed once before the event loop starts.
pub struct AppState {
    /// The averaged spectrum.
    pub series: AveragedSeries,

    /// Figure title.
    pub title: String,

    /// Visible frequency range.
    pub x_range: [f64; 2],
}

impl AppState {
    pub fn new(series: AveragedSeries, config: &AnalysisConfig) -> Self {
        Self {
            series,
            title: config.title.clone(),
            x_range: config.x_range,
        }
    }

    /// e.g. "Mean of 5 tables, 2048 rows".
    pub fn summary(&self) -> String {
        format!(
            "Mean of {} tables, {} rows",
            self.series.table_count,
            self.series.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_title_and_range_from_config() {
        let series = AveragedSeries {
            frequency_label: "Hz".to_string(),
            amplitude_label: "Amp".to_string(),
            frequency: vec![0.0, 1.0, 2.0],
            amplitude: vec![3.0, 3.0, 3.0],
            table_count: 5,
        };
        let state = AppState::new(series, &AnalysisConfig::default());

        assert_eq!(state.title, "FFT for one weight");
        assert_eq!(state.x_range, [0.0, 5000.0]);
        assert_eq!(state.summary(), "Mean of 5 tables, 3 rows");
    }
}
