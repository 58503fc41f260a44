use prstats::{ParsedIssue, ParsedPullRequest, parse_issues, parse_pull_requests};

#[test]
fn test_parse_single_pull_request() {
    let parsed = parse_pull_requests("42\tTitle\talice:detail\n");
    assert_eq!(
        parsed,
        vec![ParsedPullRequest {
            number: 42,
            author: "alice".to_string(),
        }]
    );
}

#[test]
fn test_parse_pull_requests_skips_unmatched_lines() {
    let text = "\
Showing 3 of 3 pull requests

101\tAdd popup\tbob:popup\n\
not a record\n\
102\tNo author field\n\
103\tFix DOM\tCarol:js-dom\n";
    let parsed = parse_pull_requests(text);
    assert_eq!(
        parsed,
        vec![
            ParsedPullRequest {
                number: 101,
                author: "bob".to_string(),
            },
            ParsedPullRequest {
                number: 103,
                author: "Carol".to_string(),
            },
        ]
    );
}

#[test]
fn test_pull_request_author_is_not_trimmed() {
    let parsed = parse_pull_requests("7\tTitle\t dave :branch\n");
    assert_eq!(parsed[0].author, " dave ");
}

#[test]
fn test_trailing_columns_do_not_leak_into_author() {
    let parsed = parse_pull_requests("42\tTitle: with colon\talice:branch\tOPEN\t2021-09-01T12:34:56Z\n");
    assert_eq!(
        parsed,
        vec![ParsedPullRequest {
            number: 42,
            author: "alice".to_string(),
        }]
    );
}

#[test]
fn test_pull_request_requires_leading_digits() {
    assert!(parse_pull_requests("#42\tTitle\talice:detail\n").is_empty());
    assert!(parse_pull_requests("").is_empty());
}

#[test]
fn test_parse_single_issue() {
    assert_eq!(
        parse_issues("7 Some title\n"),
        vec![ParsedIssue { number: 7 }]
    );
}

#[test]
fn test_parse_issues_takes_whole_leading_number() {
    let text = "1234\tOPEN\tQuestion about JS DOM\t\nno number here\n56\n";
    assert_eq!(
        parse_issues(text),
        vec![ParsedIssue { number: 1234 }, ParsedIssue { number: 56 }]
    );
}

#[test]
fn test_non_ascii_digits_are_not_ids() {
    // Arabic-Indic digits
    assert!(parse_issues("\u{0667} title\n").is_empty());
}

#[test]
fn test_out_of_range_ids_are_skipped() {
    let text = "99999999999999999999999 huge\n8 fine\n";
    assert_eq!(parse_issues(text), vec![ParsedIssue { number: 8 }]);
}

#[test]
fn test_bare_number_line_does_not_swallow_next_line() {
    assert_eq!(
        parse_issues("5\n6 title\n"),
        vec![ParsedIssue { number: 5 }, ParsedIssue { number: 6 }]
    );
}
