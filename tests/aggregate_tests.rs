use prstats::types::Record;
use prstats::{Coverage, RankedAuthor};

fn names(ranked: &[RankedAuthor]) -> Vec<&str> {
    ranked.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_merge_adds_only_missing_labels() {
    let mut prs = Coverage::new();
    prs.offer("alice", "JS DOM", Record::pull_request(10, "merged", 0));

    let mut issues = Coverage::new();
    issues.offer("alice", "JS DOM", Record::issue(3));
    issues.offer("alice", "JS OOP", Record::issue(4));

    prs.merge_issues(issues);

    assert_eq!(
        prs.get("alice", "JS DOM"),
        Some(&Record::pull_request(10, "merged", 0))
    );
    assert_eq!(prs.get("alice", "JS OOP"), Some(&Record::issue(4)));
    assert_eq!(prs.count("alice"), 2);
}

#[test]
fn test_merge_keeps_issue_only_authors() {
    let mut prs = Coverage::new();
    let mut issues = Coverage::new();
    issues.offer("erin", "Friends App", Record::issue(77));

    prs.merge_issues(issues);

    assert_eq!(prs.count("erin"), 1);
}

#[test]
fn test_offer_prefers_better_state_and_lower_number() {
    let mut coverage = Coverage::new();
    coverage.offer("bob", "JS DOM", Record::pull_request(5, "open", 1));
    coverage.offer("bob", "JS DOM", Record::pull_request(9, "merged", 0));
    coverage.offer("bob", "JS DOM", Record::pull_request(2, "open", 1));
    assert_eq!(
        coverage.get("bob", "JS DOM"),
        Some(&Record::pull_request(9, "merged", 0))
    );

    coverage.offer("bob", "JS OOP", Record::issue(30));
    coverage.offer("bob", "JS OOP", Record::issue(12));
    assert_eq!(coverage.get("bob", "JS OOP"), Some(&Record::issue(12)));
}

#[test]
fn test_higher_coverage_comes_first() {
    let mut coverage = Coverage::new();
    for label in ["a", "b", "c"] {
        coverage.offer("Aaron", label, Record::issue(1));
    }
    for label in ["a", "b", "c", "d", "e"] {
        coverage.offer("zed", label, Record::issue(1));
    }

    let ranked = coverage.ranked_authors();
    assert_eq!(names(&ranked), vec!["zed", "Aaron"]);
    assert_eq!(ranked[0].count, 5);
    assert_eq!(ranked[1].count, 3);
}

#[test]
fn test_ties_sort_case_insensitively() {
    let mut coverage = Coverage::new();
    for author in ["Carol", "bob", "alice"] {
        for label in ["a", "b", "c"] {
            coverage.offer(author, label, Record::issue(1));
        }
    }
    assert_eq!(
        names(&coverage.ranked_authors()),
        vec!["alice", "bob", "Carol"]
    );
}

#[test]
fn test_case_only_differences_have_stable_order() {
    let mut coverage = Coverage::new();
    coverage.offer("bob", "a", Record::issue(1));
    coverage.offer("Bob", "a", Record::issue(1));
    assert_eq!(names(&coverage.ranked_authors()), vec!["Bob", "bob"]);
}
