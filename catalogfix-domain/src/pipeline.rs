use crate::columns::normalize_header;
use crate::config::CatalogConfig;
use crate::error::ConfigError;
use crate::fixers::{self, Fixed, Fixer};
use catalogfix_types::{ChangeLog, Table};
use tracing::{debug, info};

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub table: Table,
    pub changes: ChangeLog,
}

/// Runs fixers in order over a working copy of a table.
pub struct Pipeline {
    fixers: Vec<Box<dyn Fixer>>,
    normalize_headers: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        let config = CatalogConfig::default();
        Self {
            fixers: fixers::builtin_fixers(&config),
            normalize_headers: config.normalize_headers,
        }
    }
}

impl Pipeline {
    pub fn new(config: &CatalogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            fixers: fixers::builtin_fixers(config),
            normalize_headers: config.normalize_headers,
        })
    }

    pub fn with_fixers(fixers: Vec<Box<dyn Fixer>>) -> Self {
        Self {
            fixers,
            normalize_headers: false,
        }
    }

    pub fn normalize_headers(mut self, on: bool) -> Self {
        self.normalize_headers = on;
        self
    }

    /// Keys of the configured fixers, in run order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.fixers.iter().map(|f| f.meta().key).collect()
    }

    /// Fix `table` and return the corrected copy plus one change-log section
    /// per fixer. `table` itself is never modified.
    pub fn run(&self, table: &Table) -> PipelineOutcome {
        let mut working = table.clone();
        if self.normalize_headers {
            working.rename_columns(normalize_header);
        }

        let mut changes = ChangeLog::new();
        for fixer in &self.fixers {
            let meta = fixer.meta();
            let Fixed {
                table: next,
                changes: records,
            } = fixer.fix(&working);
            debug!(fixer = meta.key, changes = records.len(), "fixer finished");
            changes.push_section(meta.section, records);
            working = next;
        }

        info!(
            rows = working.row_count(),
            changes = changes.total(),
            "catalog fixes complete"
        );
        PipelineOutcome {
            table: working,
            changes,
        }
    }
}
