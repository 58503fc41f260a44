use std::sync::Arc;

use log::{debug, info};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::aggregate::Coverage;
use crate::core::parse::{parse_issues, parse_pull_requests};
use crate::core::runner::QueryRunner;
use crate::types::config::Config;
use crate::types::{AppResult, Query, Record};

/// Fans queries out to a [`QueryRunner`] and folds the answers into [`Coverage`].
///
/// Every query of a pass runs concurrently. Results are gathered behind a
/// single join barrier and folded in declaration order (labels, then states
/// or authors), so the outcome never depends on which subprocess finished
/// first. A failing query fails the whole pass, but only after the rest of
/// the pass has finished; the first error observed is returned.
pub struct Collector<R> {
    runner: Arc<R>,
    labels: Vec<String>,
    states: Vec<String>,
    permits: Option<Arc<Semaphore>>,
}

impl<R: QueryRunner + 'static> Collector<R> {
    pub fn new(runner: Arc<R>, cfg: &Config) -> Self {
        Self {
            runner,
            labels: cfg.labels(),
            states: cfg.states().into_iter().map(|s| s.name).collect(),
            permits: cfg
                .max_concurrency()
                .map(|limit| Arc::new(Semaphore::new(limit))),
        }
    }

    /// One query per (label, state). Earlier states take precedence on collision.
    pub async fn pull_requests(&self) -> AppResult<Coverage> {
        let mut queries = Vec::with_capacity(self.labels.len() * self.states.len());
        for label in &self.labels {
            for state in &self.states {
                queries.push(Query::PullRequests {
                    label: label.clone(),
                    state: state.clone(),
                });
            }
        }

        let mut coverage = Coverage::new();
        for (query, text) in self.run_all(queries).await? {
            if let Query::PullRequests { label, state } = &query {
                let rank = self.rank_of(state);
                for pr in parse_pull_requests(&text) {
                    coverage.offer(
                        &pr.author,
                        label,
                        Record::pull_request(pr.number, state, rank),
                    );
                }
            }
        }
        debug!("Pull request pass found {} authors", coverage.authors().count());
        Ok(coverage)
    }

    /// One query per (label, author). The lowest issue number wins per pair.
    pub async fn issues(&self, authors: &[String]) -> AppResult<Coverage> {
        let mut queries = Vec::with_capacity(self.labels.len() * authors.len());
        for label in &self.labels {
            for author in authors {
                queries.push(Query::Issues {
                    author: author.clone(),
                    label: label.clone(),
                });
            }
        }

        let mut coverage = Coverage::new();
        for (query, text) in self.run_all(queries).await? {
            if let Query::Issues { author, label } = &query {
                for issue in parse_issues(&text) {
                    coverage.offer(author, label, Record::issue(issue.number));
                }
            }
        }
        Ok(coverage)
    }

    fn rank_of(&self, state: &str) -> usize {
        self.states
            .iter()
            .position(|s| s == state)
            .unwrap_or(self.states.len())
    }

    async fn run_all(&self, queries: Vec<Query>) -> AppResult<Vec<(Query, String)>> {
        let total = queries.len();
        let mut set = JoinSet::new();

        for (index, query) in queries.into_iter().enumerate() {
            let runner = Arc::clone(&self.runner);
            let permits = self.permits.clone();
            set.spawn(async move {
                let _permit = match permits {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                let result = runner.run(&query).await;
                if let Query::Issues { author, label } = &query {
                    info!("Gathering issues for {author}/{label}");
                }
                (index, query, result)
            });
        }

        // Keep joining after a failure so every started query reports back
        let mut slots: Vec<Option<(Query, String)>> = vec![None; total];
        let mut first_error = None;
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, query, Ok(text))) => slots[index] = Some((query, text)),
                Ok((_, query, Err(e))) => {
                    debug!("Query for {query} failed: {e}");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e.into());
                    }
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }
        Ok(slots.into_iter().flatten().collect())
    }
}
