use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// `gh pr list` prints `<number>\t<title>\t<author>:<branch>[\t<more columns>]` when not
// attached to a tty. The author is the third column, up to its first colon.
static PULL_REQUEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?P<number>[0-9]+)\t[^\t\n]+\t(?P<author>[^\t\n:]+):[^\t\n]*(?:\t.*)?$")
        .expect("valid regex")
});

static ISSUE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?P<number>[0-9]+)(?:[^0-9\n].*)?$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPullRequest {
    pub number: u64,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIssue {
    pub number: u64,
}

/// Extract one pull request per matching line; other lines are ignored.
pub fn parse_pull_requests(text: &str) -> Vec<ParsedPullRequest> {
    PULL_REQUEST_LINE
        .captures_iter(text)
        .filter_map(|caps| {
            let number = parse_number(&caps["number"])?;
            Some(ParsedPullRequest {
                number,
                author: caps["author"].to_string(),
            })
        })
        .collect()
}

/// Extract the leading number of every line that starts with one.
pub fn parse_issues(text: &str) -> Vec<ParsedIssue> {
    ISSUE_LINE
        .captures_iter(text)
        .filter_map(|caps| parse_number(&caps["number"]).map(|number| ParsedIssue { number }))
        .collect()
}

fn parse_number(digits: &str) -> Option<u64> {
    match digits.parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) => {
            debug!("Skipping out-of-range id {digits}: {e}");
            None
        }
    }
}
