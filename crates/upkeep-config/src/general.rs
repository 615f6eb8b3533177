//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_workbook() -> String {
    String::from("upkeep.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Workbook file read and written by `upk` when `--workbook` is not given.
    #[serde(default = "default_workbook")]
    pub workbook: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
        }
    }
}
