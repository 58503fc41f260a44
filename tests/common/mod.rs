#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use prstats::QueryRunner;
use prstats::types::config::Config;
use prstats::types::{AppError, AppResult, Query};

/// Canned answers keyed by query; unknown queries return empty output.
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<Query, String>,
    failing: Option<Query>,
    delays: HashMap<Query, Duration>,
    calls: Mutex<Vec<Query>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pull_requests(mut self, label: &str, state: &str, output: &str) -> Self {
        self.responses.insert(
            Query::PullRequests {
                label: label.into(),
                state: state.into(),
            },
            output.into(),
        );
        self
    }

    pub fn issues(mut self, author: &str, label: &str, output: &str) -> Self {
        self.responses.insert(
            Query::Issues {
                author: author.into(),
                label: label.into(),
            },
            output.into(),
        );
        self
    }

    pub fn failing(mut self, query: Query) -> Self {
        self.failing = Some(query);
        self
    }

    pub fn slow(mut self, query: Query, delay: Duration) -> Self {
        self.delays.insert(query, delay);
        self
    }

    pub fn calls(&self) -> Vec<Query> {
        self.calls.lock().unwrap().clone()
    }
}

impl QueryRunner for FakeRunner {
    fn run(&self, query: &Query) -> impl Future<Output = AppResult<String>> + Send {
        self.calls.lock().unwrap().push(query.clone());
        let result = if self.failing.as_ref() == Some(query) {
            Err(AppError::Command {
                command: format!("fake {query}"),
                detail: "exit status: 1".into(),
            })
        } else {
            Ok(self.responses.get(query).cloned().unwrap_or_default())
        };
        let delay = self.delays.get(query).copied();
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }
}

pub fn config_with_labels(labels: &[&str]) -> Config {
    Config {
        labels: Some(labels.iter().map(|l| l.to_string()).collect()),
        repo: Some("acme/homework".into()),
        ..Default::default()
    }
}

/// `gh pr list` style line
pub fn pr_line(number: u64, author: &str) -> String {
    format!("{number}\tSome title\t{author}:feature-branch\n")
}
