//! Per-invocation application state: the workbook path and the service
//! loaded from it.

use std::path::PathBuf;

use anyhow::Context;
use upkeep_config::UpkeepConfig;
use upkeep_service::{UpkeepService, Workbook};

use crate::cli::GlobalFlags;

pub struct AppContext {
    pub workbook_path: PathBuf,
    pub service: UpkeepService,
}

impl AppContext {
    /// Load config and the workbook named by `--workbook` or
    /// `general.workbook`. A missing workbook file starts empty.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = UpkeepConfig::load_with_dotenv().context("failed to load upkeep config")?;
        let workbook_path = PathBuf::from(
            flags
                .workbook
                .clone()
                .unwrap_or_else(|| config.general.workbook.clone()),
        );
        let workbook = Workbook::load(&workbook_path)
            .with_context(|| format!("failed to load workbook {}", workbook_path.display()))?;
        let service = UpkeepService::from_workbook(workbook, &config)
            .with_context(|| format!("workbook {} is inconsistent", workbook_path.display()))?;
        Ok(Self {
            workbook_path,
            service,
        })
    }

    /// Write the service state back to the workbook file.
    pub fn save(&self) -> anyhow::Result<()> {
        self.service
            .to_workbook()
            .save(&self.workbook_path)
            .with_context(|| format!("failed to save workbook {}", self.workbook_path.display()))
    }
}
