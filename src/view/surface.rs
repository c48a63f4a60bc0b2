/// The rendering target the controller drives.
///
/// A surface displays one row per commit, keyed by `hash`, and exposes
/// filter controls whose vocabularies the controller populates. Any target
/// works: a terminal table, a web table, or a test double that records
/// calls.
pub trait ViewSurface {
    /// Populate the author and type select vocabularies.
    fn set_options(&mut self, authors: &[String], types: &[String]);

    /// Show or hide the row for one commit.
    fn set_row_visible(&mut self, hash: &str, visible: bool);

    /// Reorder the visible rows to match `order` exactly.
    fn set_row_order(&mut self, order: &[String]);

    /// Display the human-readable count summary.
    fn set_summary(&mut self, text: &str);
}
