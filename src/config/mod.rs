use serde::{Deserialize, Serialize};

/// Name of the user setting that stores the selected budget id.
pub const BUDGET_SETTING: &str = "budget";

/// Presentation preferences shared by the view rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// `chrono` format string for rendered dates.
    pub date_format: String,
    pub grouping_separator: char,
    pub decimal_places: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y/%m/%d".into(),
            grouping_separator: ',',
            decimal_places: 2,
        }
    }
}
