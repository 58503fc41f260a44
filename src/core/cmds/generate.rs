use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use log::{error, info};
use strum::Display;

use crate::core::collect::Collector;
use crate::core::render::ReportRenderer;
use crate::core::runner::QueryRunner;
use crate::types::AppResult;
use crate::types::config::Config;

/// Overall result of a report run, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RunStatus {
    Success,
    CollectionFailed,
    WriteFailed,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::CollectionFailed => 2,
            RunStatus::WriteFailed => 3,
        }
    }
}

pub async fn execute_generate<R: QueryRunner + 'static>(cfg: &Config, runner: Arc<R>) -> RunStatus {
    info!("This tool requires https://github.com/cli/cli installed and authenticated\n");

    let collector = Collector::new(runner, cfg);

    let mut coverage = match collector.pull_requests().await {
        Ok(coverage) => coverage,
        Err(e) => {
            error!("Failed to collect PR data: {e}");
            return RunStatus::CollectionFailed;
        }
    };

    if coverage.is_empty() {
        info!("No pull requests found for the configured labels");
    } else if cfg.issues().enabled() {
        let authors: Vec<String> = coverage.authors().map(str::to_string).collect();
        match collector.issues(&authors).await {
            Ok(issues) => coverage.merge_issues(issues),
            Err(e) => {
                error!("Failed to collect issue data: {e}");
                return RunStatus::CollectionFailed;
            }
        }
    }

    let ranked = coverage.ranked_authors();
    let report = ReportRenderer::new(cfg).render(&coverage, &ranked, Utc::now());

    let output = cfg.output();
    match save_report(Path::new(output), &report).await {
        Ok(()) => {
            info!("Saving stats {output}: Success");
            RunStatus::Success
        }
        Err(e) => {
            error!("Error writing data to \"{output}\": {e}");
            info!("Saving stats {output}: Failure");
            RunStatus::WriteFailed
        }
    }
}

async fn save_report(path: &Path, text: &str) -> AppResult<()> {
    tokio::fs::write(path, text).await?;
    Ok(())
}
