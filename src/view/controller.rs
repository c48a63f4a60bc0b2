//! Controller for the interactive commit table.
//!
//! Owns the only mutable state in the engine: current filter criteria, sort
//! criteria, and the derived visible/ordered row sequence. Every control
//! event (select change, date change, reset, column header) runs to
//! completion and then reconciles the attached `ViewSurface`.
//!
//! The full commit list is never mutated; filtering and sorting operate on
//! an index sequence into it.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::Commit;
use crate::view::surface::ViewSurface;

/// Active filter constraints. `None` on a dimension means unconstrained;
/// date bounds are inclusive. Constraints AND-compose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub author: Option<String>,
    pub commit_type: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort. `column = None` means no sort; the current order stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriteria {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortDirection::Ascending,
        }
    }
}

pub struct ViewController {
    commits: Vec<Commit>,
    authors: Vec<String>,
    types: Vec<String>,
    /// Min/max commit dates in the dataset; `None` when no commit carries a
    /// valid date (empty-dataset fallback: no date constraint).
    date_bounds: Option<(NaiveDate, NaiveDate)>,
    filter: FilterCriteria,
    sort: SortCriteria,
    /// Indices into `commits`, in display order.
    visible: Vec<usize>,
}

impl ViewController {
    /// Initialize from the full commit list: derive the author/type
    /// vocabularies (sorted lexically) and the dataset date bounds, seed the
    /// filter bounds from them, and show everything unsorted.
    pub fn new(commits: Vec<Commit>) -> Self {
        let mut authors: Vec<String> = commits.iter().map(|c| c.author.clone()).collect();
        authors.sort();
        authors.dedup();

        let mut types: Vec<String> = commits.iter().map(|c| c.commit_type.clone()).collect();
        types.sort();
        types.dedup();

        let dates: Vec<NaiveDate> = commits.iter().filter_map(|c| c.date()).collect();
        let date_bounds = match (dates.iter().min(), dates.iter().max()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        };

        let visible = (0..commits.len()).collect();

        let mut controller = Self {
            commits,
            authors,
            types,
            date_bounds,
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            visible,
        };
        controller.filter = controller.default_filter();
        controller
    }

    /// Push the option vocabularies and the initial view to a surface.
    pub fn attach(&self, surface: &mut dyn ViewSurface) {
        surface.set_options(&self.authors, &self.types);
        self.update_view(surface);
    }

    /// Replace the filter criteria, recompute the visible set, re-run the
    /// current sort over it, and reconcile the surface.
    pub fn apply_filters(&mut self, criteria: FilterCriteria, surface: &mut dyn ViewSurface) {
        self.filter = criteria;
        self.recompute_visible();
        self.apply_sort();
        self.update_view(surface);
    }

    /// Restore author/type to unconstrained and the date bounds to the
    /// dataset min/max. The current sort still applies.
    pub fn reset_filters(&mut self, surface: &mut dyn ViewSurface) {
        self.apply_filters(self.default_filter(), surface);
    }

    /// Sort by a column header. The same column toggles direction; a new
    /// column starts ascending.
    pub fn sort_by(&mut self, column: &str, surface: &mut dyn ViewSurface) {
        if self.sort.column.as_deref() == Some(column) {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort.column = Some(column.to_string());
            self.sort.direction = SortDirection::Ascending;
        }
        self.apply_sort();
        self.update_view(surface);
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> &SortCriteria {
        &self.sort
    }

    /// The visible commits' hashes in display order.
    pub fn visible_hashes(&self) -> Vec<&str> {
        self.visible
            .iter()
            .map(|&idx| self.commits[idx].hash.as_str())
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} commits",
            self.visible.len(),
            self.commits.len()
        )
    }

    fn default_filter(&self) -> FilterCriteria {
        FilterCriteria {
            author: None,
            commit_type: None,
            date_start: self.date_bounds.map(|(min, _)| min),
            date_end: self.date_bounds.map(|(_, max)| max),
        }
    }

    fn recompute_visible(&mut self) {
        self.visible = (0..self.commits.len())
            .filter(|&idx| self.matches(&self.commits[idx]))
            .collect();
    }

    fn matches(&self, commit: &Commit) -> bool {
        if let Some(author) = &self.filter.author {
            if commit.author != *author {
                return false;
            }
        }
        if let Some(commit_type) = &self.filter.commit_type {
            if commit.commit_type != *commit_type {
                return false;
            }
        }
        // An undated commit is only ever excluded from the timeline; it
        // passes the date predicate so the seeded bounds show the full set.
        if let Some(date) = commit.date() {
            if self.filter.date_start.is_some_and(|start| date < start) {
                return false;
            }
            if self.filter.date_end.is_some_and(|end| date > end) {
                return false;
            }
        }
        true
    }

    fn apply_sort(&mut self) {
        let Some(column) = self.sort.column.clone() else {
            return;
        };
        let direction = self.sort.direction;
        let commits = &self.commits;

        // Stable sort: equal keys keep their pre-sort relative order, so
        // repeated sorts on unchanged data are deterministic.
        self.visible.sort_by(|&a, &b| {
            let ordering = compare_column(&commits[a], &commits[b], &column);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    fn update_view(&self, surface: &mut dyn ViewSurface) {
        let mut shown = vec![false; self.commits.len()];
        for &idx in &self.visible {
            shown[idx] = true;
        }
        for (idx, commit) in self.commits.iter().enumerate() {
            surface.set_row_visible(&commit.hash, shown[idx]);
        }

        let order: Vec<String> = self
            .visible
            .iter()
            .map(|&idx| self.commits[idx].hash.clone())
            .collect();
        surface.set_row_order(&order);
        surface.set_summary(&self.summary());
    }
}

/// Type-aware column comparison: `timestamp` as date-time, the size metrics
/// as integers (missing → 0), everything else as case-sensitive strings.
fn compare_column(a: &Commit, b: &Commit, column: &str) -> Ordering {
    match column {
        "timestamp" => a.date_time().cmp(&b.date_time()),
        "files_changed" => a.files_changed.unwrap_or(0).cmp(&b.files_changed.unwrap_or(0)),
        "changes" => a.changes.unwrap_or(0).cmp(&b.changes.unwrap_or(0)),
        other => text_field(a, other).cmp(text_field(b, other)),
    }
}

fn text_field<'a>(commit: &'a Commit, column: &str) -> &'a str {
    match column {
        "hash" => &commit.hash,
        "author" => &commit.author,
        "type" => &commit.commit_type,
        "message" => &commit.message,
        // Unrecognized columns compare as empty strings, which keeps the
        // current order under a stable sort.
        _ => "",
    }
}
