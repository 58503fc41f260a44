pub mod core;

// Re-export key items for easy importing in this crate
pub use crate::core::types;

// Re-export key items for easy importing in other crates
pub use crate::core::aggregate::{Coverage, RankedAuthor};
pub use crate::core::cmds::{RunStatus, execute_generate};
pub use crate::core::collect::Collector;
pub use crate::core::main_shared::run_main;
pub use crate::core::parse::{ParsedIssue, ParsedPullRequest, parse_issues, parse_pull_requests};
pub use crate::core::render::ReportRenderer;
pub use crate::core::runner::{GhCliRunner, QueryRunner};
