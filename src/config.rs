use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Analysis settings
// ---------------------------------------------------------------------------

/// Directory holding the measurement spreadsheets, relative to the cwd.
pub const DATA_DIR: &str = "./data_set";

/// Number of runs recorded for one weight (`new1_1.xlsx` … `new1_5.xlsx`).
pub const RUN_COUNT: usize = 5;

/// Everything the analysis needs to know up front.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Input tables, averaged in this order.
    pub inputs: Vec<PathBuf>,
    /// Visible frequency range `[min, max]`.
    pub x_range: [f64; 2],
    /// Figure title, also used for the window title.
    pub title: String,
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            inputs: (1..=RUN_COUNT)
                .map(|run| PathBuf::from(DATA_DIR).join(format!("new1_{run}.xlsx")))
                .collect(),
            x_range: [0.0, 5000.0],
            title: "FFT for one weight".to_string(),
            window_size: [1000.0, 700.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_are_the_five_runs_in_order() {
        let config = AnalysisConfig::default();
        let names: Vec<String> = config
            .inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["new1_1.xlsx", "new1_2.xlsx", "new1_3.xlsx", "new1_4.xlsx", "new1_5.xlsx"]
        );
        assert!(config.inputs.iter().all(|p| p.starts_with(DATA_DIR)));
    }

    #[test]
    fn default_range_and_title() {
        let config = AnalysisConfig::default();
        assert_eq!(config.x_range, [0.0, 5000.0]);
        assert_eq!(config.title, "FFT for one weight");
    }
}
