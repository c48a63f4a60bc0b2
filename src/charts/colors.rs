//! Fixed commit-type → color mapping.
//!
//! Types outside the fixed set take the `other` color, so unrecognized
//! labels still render consistently.

use crate::charts::spec::ColorScale;

pub const TYPE_COLORS: &[(&str, &str)] = &[
    ("feature", "#2ecc71"),
    ("bugfix", "#e74c3c"),
    ("refactor", "#3498db"),
    ("docs", "#f39c12"),
    ("style", "#9b59b6"),
    ("test", "#1abc9c"),
    ("chore", "#95a5a6"),
    ("other", "#7f8c8d"),
];

pub const FALLBACK_COLOR: &str = "#7f8c8d";

/// Color for a commit type, falling back to the `other` color for labels
/// outside the fixed set.
pub fn color_for(commit_type: &str) -> &'static str {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == commit_type)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Build an index-aligned color scale for the given type labels.
///
/// The caller supplies labels in its own deterministic order; the scale
/// preserves that order.
pub fn scale_for(types: &[String]) -> ColorScale {
    ColorScale {
        domain: types.to_vec(),
        range: types.iter().map(|t| color_for(t).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_types_have_distinct_colors() {
        let mut colors: Vec<&str> = TYPE_COLORS.iter().map(|(_, c)| *c).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), TYPE_COLORS.len());
    }

    #[test]
    fn unknown_type_falls_back() {
        assert_eq!(color_for("experiment"), FALLBACK_COLOR);
        assert_eq!(color_for(""), FALLBACK_COLOR);
    }

    #[test]
    fn scale_is_index_aligned() {
        let scale = scale_for(&["bugfix".to_string(), "mystery".to_string()]);
        assert_eq!(scale.domain, vec!["bugfix", "mystery"]);
        assert_eq!(scale.range, vec![color_for("bugfix"), FALLBACK_COLOR]);
    }
}
