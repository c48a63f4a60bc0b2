//! gitstory - commit history analytics and interactive table engine
//!
//! # Usage
//! ```bash
//! gitstory commits.json                        # Show the full commit table
//! gitstory commits.json --author alice         # Filter by author
//! gitstory commits.json --sort changes --desc  # Sort by a column
//! gitstory commits.json --charts charts.json   # Write chart descriptors
//! ```

mod charts;
mod error;
mod models;
mod stats;
mod view;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charts::{ChartRenderer, ChartSpec};
use models::Commit;
use view::{ViewController, ViewSurface};

/// Analyze a parsed commit list and display it as a filterable table
#[derive(Parser)]
#[command(name = "gitstory")]
#[command(about = "Commit history analytics and interactive table", long_about = None)]
struct Cli {
    /// Path to the commits JSON file produced by the repository parser
    commits: PathBuf,

    /// Only show commits by this author
    #[arg(long)]
    author: Option<String>,

    /// Only show commits of this type (feature, bugfix, refactor, ...)
    #[arg(long)]
    commit_type: Option<String>,

    /// Only show commits on or after this date (YYYY-MM-DD)
    #[arg(long)]
    since: Option<NaiveDate>,

    /// Only show commits on or before this date (YYYY-MM-DD)
    #[arg(long)]
    until: Option<NaiveDate>,

    /// Sort by a column (timestamp, author, type, files_changed, changes, hash)
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    desc: bool,

    /// Write the three chart descriptors to this JSON file
    #[arg(long)]
    charts: Option<PathBuf>,
}

/// Terminal implementation of the view surface: rows are printed in the
/// order the controller dictates, hidden rows are skipped.
struct TerminalSurface {
    rows: HashMap<String, Commit>,
    hidden: HashSet<String>,
    order: Vec<String>,
    summary: String,
}

impl TerminalSurface {
    fn new(commits: &[Commit]) -> Self {
        Self {
            rows: commits
                .iter()
                .map(|c| (c.hash.clone(), c.clone()))
                .collect(),
            hidden: HashSet::new(),
            order: commits.iter().map(|c| c.hash.clone()).collect(),
            summary: String::new(),
        }
    }

    fn print(&self) {
        println!(
            "{:<10} {:<12} {:<20} {:<10} {:>5} {:>7}  {}",
            "HASH", "DATE", "AUTHOR", "TYPE", "FILES", "CHANGES", "MESSAGE"
        );
        for hash in &self.order {
            if self.hidden.contains(hash) {
                continue;
            }
            let Some(commit) = self.rows.get(hash) else {
                continue;
            };
            println!(
                "{:<10} {:<12} {:<20} {:<10} {:>5} {:>7}  {}",
                commit.hash,
                commit
                    .date()
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
                commit.author,
                commit.commit_type,
                commit
                    .files_changed
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
                commit
                    .changes
                    .map_or_else(|| "-".to_string(), |n| n.to_string()),
                truncate(&commit.message, 50),
            );
        }
        println!();
        println!("{}", self.summary);
    }
}

impl ViewSurface for TerminalSurface {
    fn set_options(&mut self, _authors: &[String], _types: &[String]) {
        // A terminal table has no select controls to populate.
    }

    fn set_row_visible(&mut self, hash: &str, visible: bool) {
        if visible {
            self.hidden.remove(hash);
        } else {
            self.hidden.insert(hash.to_string());
        }
    }

    fn set_row_order(&mut self, order: &[String]) {
        self.order = order.to_vec();
    }

    fn set_summary(&mut self, text: &str) {
        self.summary = text.to_string();
    }
}

fn truncate(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        message.to_string()
    } else {
        let head: String = message.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

/// Collects descriptors into one JSON object for writing to disk.
#[derive(Default)]
struct FileChartRenderer {
    out: serde_json::Map<String, serde_json::Value>,
}

impl ChartRenderer for FileChartRenderer {
    fn render(&mut self, name: &str, spec: &ChartSpec) -> error::Result<()> {
        let value =
            serde_json::to_value(spec).map_err(|e| error::AppError::Render(e.to_string()))?;
        self.out.insert(name.to_string(), value);
        Ok(())
    }
}

fn load_commits(path: &std::path::Path) -> error::Result<Vec<Commit>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let commits = load_commits(&cli.commits)
        .with_context(|| format!("Failed to load commit list from {}", cli.commits.display()))?;

    let mut controller = ViewController::new(commits.clone());
    let mut surface = TerminalSurface::new(&commits);
    controller.attach(&mut surface);

    if cli.author.is_some() || cli.commit_type.is_some() || cli.since.is_some() || cli.until.is_some()
    {
        let mut criteria = controller.filter().clone();
        if cli.author.is_some() {
            criteria.author = cli.author.clone();
        }
        if cli.commit_type.is_some() {
            criteria.commit_type = cli.commit_type.clone();
        }
        if cli.since.is_some() {
            criteria.date_start = cli.since;
        }
        if cli.until.is_some() {
            criteria.date_end = cli.until;
        }
        controller.apply_filters(criteria, &mut surface);
    }

    if let Some(column) = &cli.sort {
        controller.sort_by(column, &mut surface);
        if cli.desc {
            // Activating the same column header again toggles the direction.
            controller.sort_by(column, &mut surface);
        }
    }

    surface.print();

    if let Some(path) = &cli.charts {
        let mut renderer = FileChartRenderer::default();
        charts::render_dashboard_charts(&commits, &mut renderer);

        // Chart output is fire-and-forget: a write failure must not take
        // down the table view.
        let payload = serde_json::Value::Object(renderer.out);
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => println!("Charts written to {}", path.display()),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to write charts"),
            },
            Err(e) => tracing::warn!(error = %e, "failed to serialize charts"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncate_keeps_short_messages_intact() {
        assert_eq!(truncate("short", 50), "short");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("abcdefgh", 5), "abcde...");
    }
}
