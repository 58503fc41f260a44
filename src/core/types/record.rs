/// Which URL namespace a record links into on the hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    PullRequest,
    Issue,
}

/// State name used for records found by the issue pass
pub const ISSUE_STATE: &str = "issue";

/// One observed submission for an (author, label) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub number: u64,
    pub state: String,
    pub kind: RecordKind,
    /// Position of `state` in the precedence list; lower wins.
    pub rank: usize,
}

impl Record {
    pub fn pull_request(number: u64, state: &str, rank: usize) -> Self {
        Self {
            number,
            state: state.to_string(),
            kind: RecordKind::PullRequest,
            rank,
        }
    }

    pub fn issue(number: u64) -> Self {
        Self {
            number,
            state: ISSUE_STATE.to_string(),
            kind: RecordKind::Issue,
            rank: usize::MAX,
        }
    }

    /// Better state first, then the lowest number.
    pub fn outranks(&self, other: &Record) -> bool {
        (self.rank, self.number) < (other.rank, other.number)
    }
}
