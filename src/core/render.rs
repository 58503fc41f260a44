use chrono::{DateTime, SecondsFormat, Utc};

use crate::core::aggregate::{Coverage, RankedAuthor};
use crate::types::config::Config;
use crate::types::{Record, RecordKind};

const COLUMN_DELIMITER: &str = " | ";

/// Turns aggregated coverage into the markdown leaderboard.
pub struct ReportRenderer<'a> {
    cfg: &'a Config,
    repo_url: String,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self {
            cfg,
            repo_url: cfg.repo_url(),
        }
    }

    /// Title, timestamp line, then the table.
    pub fn render(
        &self,
        coverage: &Coverage,
        authors: &[RankedAuthor],
        generated_at: DateTime<Utc>,
    ) -> String {
        format!(
            "{}\n\n_as of {} UTC_\n\n{}",
            self.cfg.title(),
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.table(coverage, authors)
        )
    }

    pub fn table(&self, coverage: &Coverage, authors: &[RankedAuthor]) -> String {
        let labels = self.cfg.labels();
        let mut rows = Vec::with_capacity(authors.len() + 2);

        rows.push(
            std::iter::once("author")
                .chain(labels.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(COLUMN_DELIMITER),
        );
        rows.push(format!("{}---", "--- | ".repeat(labels.len())));

        let mut latest_count = usize::MAX;
        for author in authors {
            if author.count < latest_count {
                rows.push(format!(
                    "**{} task(s)**{}",
                    author.count,
                    COLUMN_DELIMITER.repeat(labels.len())
                ));
                latest_count = author.count;
            }

            let cells = std::iter::once(self.author_link(&author.name)).chain(
                labels
                    .iter()
                    .map(|label| match coverage.get(&author.name, label) {
                        Some(record) => self.record_link(record),
                        None => " ".to_string(),
                    }),
            );
            rows.push(cells.collect::<Vec<_>>().join(COLUMN_DELIMITER));
        }

        rows.join("\n") + "\n"
    }

    pub fn author_link(&self, author: &str) -> String {
        format!(
            "[{author}]({}pulls?q=is%3Apr+author%3A{author})",
            self.repo_url
        )
    }

    pub fn record_link(&self, record: &Record) -> String {
        let (code, bold) = self.cfg.style_for(record);
        let text = if bold {
            format!("**#{}**", record.number)
        } else {
            format!("#{} {code}", record.number)
        };
        let path = match record.kind {
            RecordKind::PullRequest => "pull",
            RecordKind::Issue => "issues",
        };
        format!("[{text}]({}{path}/{})", self.repo_url, record.number)
    }
}
