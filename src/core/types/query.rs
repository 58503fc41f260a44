use std::fmt;

/// A single listing request against the hosting platform's CLI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// Pull requests in `state` carrying `label`
    PullRequests { label: String, state: String },
    /// Issues in any state opened by `author` carrying `label`
    Issues { author: String, label: String },
}

impl Query {
    /// Arguments passed to `gh`, without the program name or `--repo`.
    pub fn args(&self, limit: u32) -> Vec<String> {
        let mut args: Vec<String> = match self {
            Query::PullRequests { label, state } => vec![
                "pr".into(),
                "list".into(),
                "--state".into(),
                state.clone(),
                "--label".into(),
                label.clone(),
            ],
            Query::Issues { author, label } => vec![
                "issue".into(),
                "list".into(),
                "--author".into(),
                author.clone(),
                "--state".into(),
                "all".into(),
                "--label".into(),
                label.clone(),
            ],
        };
        args.push("--limit".into());
        args.push(limit.to_string());
        args
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::PullRequests { label, state } => write!(f, "{state} PRs labeled {label:?}"),
            Query::Issues { author, label } => write!(f, "issues by {author} labeled {label:?}"),
        }
    }
}

/// Render a command line for log and error messages, quoting arguments with whitespace.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|arg| {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                format!("\"{arg}\"")
            } else {
                arg.clone()
            }
        }))
        .collect::<Vec<_>>()
        .join(" ")
}
