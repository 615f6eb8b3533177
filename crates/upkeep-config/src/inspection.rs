//! Inspection lifecycle configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InspectionConfig {
    /// Refuse to complete a run whose template cannot be resolved, instead of
    /// falling back to a score of 100.
    #[serde(default)]
    pub strict_templates: bool,
}
