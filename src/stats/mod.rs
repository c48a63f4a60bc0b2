//! Aggregation engine: pure reductions over the full commit list.
//!
//! All three functions are stateless and order-independent; callers must not
//! rely on the output sequence order. Consumers that need a deterministic
//! order (the chart builders) sort on their side.
//!
//! Degrade-gracefully policy: a commit whose timestamp is missing or
//! unparsable is excluded from the timeline aggregation but still counted in
//! the type and author aggregations.

use std::collections::HashMap;

use crate::models::{CategoryCount, Commit, DateTypeCount};

/// Group commits by `type` and count occurrences.
pub fn aggregate_by_type(commits: &[Commit]) -> Vec<CategoryCount> {
    count_by(commits, |c| c.commit_type.clone())
}

/// Group commits by `author` and count occurrences.
pub fn aggregate_by_author(commits: &[Commit]) -> Vec<CategoryCount> {
    count_by(commits, |c| c.author.clone())
}

/// Group commits by (calendar date, type) and count occurrences.
///
/// Commits without a valid calendar date are skipped.
pub fn aggregate_timeline(commits: &[Commit]) -> Vec<DateTypeCount> {
    let mut counts: HashMap<(String, String), u64> = HashMap::new();

    for commit in commits {
        let Some(date) = commit.date() else {
            tracing::debug!(hash = %commit.hash, "skipping commit with unparsable timestamp");
            continue;
        };
        *counts
            .entry((date.to_string(), commit.commit_type.clone()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((date, commit_type), count)| DateTypeCount {
            date,
            commit_type,
            count,
        })
        .collect()
}

fn count_by(commits: &[Commit], key: impl Fn(&Commit) -> String) -> Vec<CategoryCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for commit in commits {
        *counts.entry(key(commit)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(key, count)| CategoryCount { key, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn commit(hash: &str, author: &str, commit_type: &str, timestamp: &str) -> Commit {
        Commit {
            hash: hash.to_string(),
            author: author.to_string(),
            commit_type: commit_type.to_string(),
            timestamp: timestamp.to_string(),
            message: String::new(),
            files_changed: None,
            changes: None,
        }
    }

    fn sample_commits() -> Vec<Commit> {
        vec![
            commit("h1", "alice", "feature", "2025-01-01T09:00:00"),
            commit("h2", "alice", "feature", "2025-01-01T10:30:00"),
            commit("h3", "bob", "bugfix", "2025-01-01T11:00:00"),
            commit("h4", "bob", "feature", "2025-01-02T08:15:00"),
        ]
    }

    fn count_for(counts: &[CategoryCount], key: &str) -> u64 {
        counts.iter().find(|c| c.key == key).map_or(0, |c| c.count)
    }

    #[test]
    fn type_counts_sum_to_commit_total() {
        let commits = sample_commits();
        let counts = aggregate_by_type(&commits);

        let total: u64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, commits.len() as u64);
        assert_eq!(count_for(&counts, "feature"), 3);
        assert_eq!(count_for(&counts, "bugfix"), 1);
    }

    #[test]
    fn author_counts_sum_to_commit_total() {
        let commits = sample_commits();
        let counts = aggregate_by_author(&commits);

        let total: u64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, commits.len() as u64);
        assert_eq!(count_for(&counts, "alice"), 2);
        assert_eq!(count_for(&counts, "bob"), 2);
    }

    #[test]
    fn no_entries_for_absent_values() {
        let counts = aggregate_by_type(&sample_commits());
        assert!(counts.iter().all(|c| c.count > 0));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn timeline_groups_by_date_and_type() {
        let counts = aggregate_timeline(&sample_commits());

        let entry = |date: &str, commit_type: &str| {
            counts
                .iter()
                .find(|c| c.date == date && c.commit_type == commit_type)
                .map(|c| c.count)
        };
        assert_eq!(entry("2025-01-01", "feature"), Some(2));
        assert_eq!(entry("2025-01-01", "bugfix"), Some(1));
        assert_eq!(entry("2025-01-02", "feature"), Some(1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn timeline_excludes_unparsable_timestamps_but_category_counts_keep_them() {
        let mut commits = sample_commits();
        commits.push(commit("h5", "carol", "docs", ""));
        commits.push(commit("h6", "carol", "docs", "yesterday"));

        let timeline_total: u64 = aggregate_timeline(&commits).iter().map(|c| c.count).sum();
        assert_eq!(timeline_total, 4);

        let type_total: u64 = aggregate_by_type(&commits).iter().map(|c| c.count).sum();
        assert_eq!(type_total, 6);
        let author_total: u64 = aggregate_by_author(&commits).iter().map(|c| c.count).sum();
        assert_eq!(author_total, 6);
    }

    #[test]
    fn empty_input_yields_empty_results() {
        assert_eq!(aggregate_by_type(&[]), vec![]);
        assert_eq!(aggregate_by_author(&[]), vec![]);
        assert_eq!(aggregate_timeline(&[]), vec![]);
    }
}
