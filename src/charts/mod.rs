//! Chart specification builder: declarative Vega-Lite descriptors.
//!
//! Pure transformations from aggregation output to renderer-agnostic chart
//! descriptors. No rendering happens here; a `ChartRenderer` implementation
//! receives the finished descriptors and may fail without affecting anything
//! else.
//! - `spec`: ChartSpec, Mark, Encoding, FieldDef serde structs
//! - `colors`: fixed commit-type → color table with fallback
//! - `build`: the three descriptor builders

pub mod build;
pub mod colors;
pub mod spec;

pub use build::*;
pub use spec::*;

use crate::error::Result;
use crate::models::Commit;
use crate::stats;

/// A rendering target for chart descriptors (file writer, web view, test
/// double). Implementations may reject a descriptor; the handoff is
/// fire-and-forget and a failure never propagates.
pub trait ChartRenderer {
    fn render(&mut self, name: &str, spec: &ChartSpec) -> Result<()>;
}

/// Build all three dashboard descriptors and hand them to the renderer.
///
/// A failure on one chart is logged and does not block the remaining charts
/// or the table view.
pub fn render_dashboard_charts(commits: &[Commit], renderer: &mut dyn ChartRenderer) {
    let charts = [
        (
            "type_distribution",
            build_type_distribution_chart(&stats::aggregate_by_type(commits)),
        ),
        (
            "author_distribution",
            build_author_distribution_chart(&stats::aggregate_by_author(commits)),
        ),
        (
            "timeline",
            build_timeline_chart(&stats::aggregate_timeline(commits)),
        ),
    ];

    for (name, spec) in charts {
        if let Err(e) = renderer.render(name, &spec) {
            tracing::warn!(chart = name, error = %e, "chart renderer rejected descriptor");
        }
    }
}
