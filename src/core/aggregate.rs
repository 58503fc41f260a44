use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::types::Record;

/// author -> label -> best known record for that pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coverage {
    authors: BTreeMap<String, BTreeMap<String, Record>>,
}

/// An author and the number of labels they have any record for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedAuthor {
    pub name: String,
    pub count: usize,
}

impl Coverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `record` for (author, label) unless the existing entry outranks it.
    pub fn offer(&mut self, author: &str, label: &str, record: Record) {
        let labels = self.authors.entry(author.to_string()).or_default();
        match labels.get(label) {
            Some(existing) if !record.outranks(existing) => {}
            _ => {
                labels.insert(label.to_string(), record);
            }
        }
    }

    pub fn get(&self, author: &str, label: &str) -> Option<&Record> {
        self.authors.get(author)?.get(label)
    }

    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.authors.keys().map(String::as_str)
    }

    pub fn count(&self, author: &str) -> usize {
        self.authors.get(author).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Fill in labels from `issues` that have no pull-request entry yet.
    /// Existing entries are never replaced.
    pub fn merge_issues(&mut self, issues: Coverage) {
        for (author, labels) in issues.authors {
            let entry = self.authors.entry(author).or_default();
            for (label, record) in labels {
                entry.entry(label).or_insert(record);
            }
        }
    }

    /// Authors by descending coverage, then case-insensitive name.
    pub fn ranked_authors(&self) -> Vec<RankedAuthor> {
        let mut ranked: Vec<RankedAuthor> = self
            .authors
            .iter()
            .map(|(name, labels)| RankedAuthor {
                name: name.clone(),
                count: labels.len(),
            })
            .collect();
        ranked.sort_by(compare_ranked);
        ranked
    }
}

fn compare_ranked(a: &RankedAuthor, b: &RankedAuthor) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
