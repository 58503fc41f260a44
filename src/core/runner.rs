use std::future::Future;

use log::debug;
use tokio::process::Command;

use crate::types::config::Config;
use crate::types::{AppError, AppResult, Query, command_line};

/// Executes listing queries against the hosting platform and returns raw stdout.
pub trait QueryRunner: Send + Sync {
    fn run(&self, query: &Query) -> impl Future<Output = AppResult<String>> + Send;
}

/// Runs queries through the `gh` command-line client.
#[derive(Debug, Clone)]
pub struct GhCliRunner {
    program: String,
    repo: Option<String>,
    limit: u32,
}

impl GhCliRunner {
    pub fn new(program: impl Into<String>, repo: Option<String>, limit: u32) -> Self {
        Self {
            program: program.into(),
            repo,
            limit,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.gh(), Some(cfg.repo().to_string()), cfg.limit())
    }

    pub fn args(&self, query: &Query) -> Vec<String> {
        let mut args = query.args(self.limit);
        if let Some(repo) = &self.repo {
            args.push("--repo".into());
            args.push(repo.clone());
        }
        args
    }
}

impl QueryRunner for GhCliRunner {
    fn run(&self, query: &Query) -> impl Future<Output = AppResult<String>> + Send {
        let args = self.args(query);
        let command = command_line(&self.program, &args);
        let program = self.program.clone();
        async move {
            debug!("Running: {command}");
            let output = Command::new(&program)
                .args(&args)
                .kill_on_drop(true)
                .output()
                .await
                .map_err(|e| AppError::Command {
                    command: command.clone(),
                    detail: e.to_string(),
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(AppError::Command {
                    command,
                    detail: format!("{}: {}", output.status, stderr.trim()),
                });
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
    }
}
