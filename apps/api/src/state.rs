use std::sync::Arc;

use crate::config::Config;
use crate::skill_gap::analyzer::SkillGapAnalyzer;
use crate::skill_gap::careers::CareerCatalog;
use crate::skill_gap::priority::PriorityTable;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Analyzer over the process-wide priority table.
    pub analyzer: SkillGapAnalyzer,
    pub careers: Arc<CareerCatalog>,
}

impl AppState {
    pub fn new(config: Config, table: PriorityTable, careers: CareerCatalog) -> Self {
        Self {
            config,
            analyzer: SkillGapAnalyzer::new(Arc::new(table)),
            careers: Arc::new(careers),
        }
    }
}
