//! The three dashboard descriptor builders.
//!
//! Builders are deterministic: aggregation output has no guaranteed order,
//! so rows are sorted by key before they land in the descriptor, and all
//! percentages use a single round-half-up-to-one-decimal rule. Identical
//! input always produces a byte-identical descriptor.

use serde_json::json;

use crate::charts::colors;
use crate::charts::spec::{ChartSpec, DataValues, Encoding, FieldDef, Mark, VEGA_LITE_SCHEMA};
use crate::models::{CategoryCount, DateTypeCount};

const DISTRIBUTION_SIZE: u32 = 300;
const TIMELINE_WIDTH: u32 = 700;
const TIMELINE_HEIGHT: u32 = 300;

/// Round half-up to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sorted copy of the counts; aggregation output order is unspecified.
fn sorted_by_key(counts: &[CategoryCount]) -> Vec<CategoryCount> {
    let mut sorted = counts.to_vec();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));
    sorted
}

/// Arc chart of commits per type, colored from the fixed type table.
///
/// An empty input produces a degenerate descriptor with no data rows; the
/// percentage derivation is skipped entirely rather than dividing by zero.
pub fn build_type_distribution_chart(counts: &[CategoryCount]) -> ChartSpec {
    let sorted = sorted_by_key(counts);
    let total: u64 = sorted.iter().map(|c| c.count).sum();

    let values = if total == 0 {
        Vec::new()
    } else {
        sorted
            .iter()
            .map(|c| {
                json!({
                    "type": c.key,
                    "count": c.count,
                    "percentage": round1(c.count as f64 / total as f64 * 100.0),
                })
            })
            .collect()
    };

    let types: Vec<String> = sorted.iter().map(|c| c.key.clone()).collect();

    ChartSpec {
        schema: VEGA_LITE_SCHEMA.to_string(),
        description: "Commit type distribution".to_string(),
        width: DISTRIBUTION_SIZE,
        height: DISTRIBUTION_SIZE,
        data: DataValues { values },
        mark: Mark::new("arc"),
        encoding: Encoding {
            theta: Some(FieldDef::quantitative("count")),
            color: Some(
                FieldDef::nominal("type")
                    .with_title("Type")
                    .with_scale(colors::scale_for(&types)),
            ),
            tooltip: Some(vec![
                FieldDef::nominal("type").with_title("Type"),
                FieldDef::quantitative("count").with_title("Commits"),
                FieldDef::quantitative("percentage").with_title("Share (%)"),
            ]),
            ..Encoding::default()
        },
    }
}

/// Arc chart of commits per author.
///
/// Authors are open-ended, so the color channel carries no fixed scale and
/// the renderer's default categorical palette applies.
pub fn build_author_distribution_chart(counts: &[CategoryCount]) -> ChartSpec {
    let sorted = sorted_by_key(counts);
    let total: u64 = sorted.iter().map(|c| c.count).sum();

    let values = if total == 0 {
        Vec::new()
    } else {
        sorted
            .iter()
            .map(|c| {
                json!({
                    "author": c.key,
                    "count": c.count,
                    "percentage": round1(c.count as f64 / total as f64 * 100.0),
                })
            })
            .collect()
    };

    ChartSpec {
        schema: VEGA_LITE_SCHEMA.to_string(),
        description: "Commit author distribution".to_string(),
        width: DISTRIBUTION_SIZE,
        height: DISTRIBUTION_SIZE,
        data: DataValues { values },
        mark: Mark::new("arc"),
        encoding: Encoding {
            theta: Some(FieldDef::quantitative("count")),
            color: Some(FieldDef::nominal("author").with_title("Author")),
            tooltip: Some(vec![
                FieldDef::nominal("author").with_title("Author"),
                FieldDef::quantitative("count").with_title("Commits"),
                FieldDef::quantitative("percentage").with_title("Share (%)"),
            ]),
            ..Encoding::default()
        },
    }
}

/// Stacked bar chart of commit activity over time, one stack layer per type.
pub fn build_timeline_chart(counts: &[DateTypeCount]) -> ChartSpec {
    let mut sorted = counts.to_vec();
    sorted.sort_by(|a, b| (&a.date, &a.commit_type).cmp(&(&b.date, &b.commit_type)));

    let values = sorted
        .iter()
        .map(|c| {
            json!({
                "date": c.date,
                "type": c.commit_type,
                "count": c.count,
            })
        })
        .collect();

    let mut types: Vec<String> = sorted.iter().map(|c| c.commit_type.clone()).collect();
    types.sort();
    types.dedup();

    ChartSpec {
        schema: VEGA_LITE_SCHEMA.to_string(),
        description: "Commit activity over time by type".to_string(),
        width: TIMELINE_WIDTH,
        height: TIMELINE_HEIGHT,
        data: DataValues { values },
        mark: Mark::new("bar"),
        encoding: Encoding {
            x: Some(FieldDef::temporal("date").with_title("Date")),
            y: Some(FieldDef::quantitative("count").with_title("Commits")),
            color: Some(
                FieldDef::nominal("type")
                    .with_title("Type")
                    .with_scale(colors::scale_for(&types)),
            ),
            tooltip: Some(vec![
                FieldDef::temporal("date").with_title("Date"),
                FieldDef::nominal("type").with_title("Type"),
                FieldDef::quantitative("count").with_title("Commits"),
            ]),
            ..Encoding::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counts(entries: &[(&str, u64)]) -> Vec<CategoryCount> {
        entries
            .iter()
            .map(|(key, count)| CategoryCount {
                key: key.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn round1_is_half_up() {
        assert_eq!(round1(12.25), 12.3);
        assert_eq!(round1(12.75), 12.8);
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(25.0), 25.0);
    }

    #[test]
    fn percentages_sum_to_roughly_100() {
        let spec = build_type_distribution_chart(&counts(&[
            ("feature", 1),
            ("bugfix", 1),
            ("docs", 1),
        ]));

        let sum: f64 = spec
            .data
            .values
            .iter()
            .map(|v| v["percentage"].as_f64().unwrap())
            .sum();
        assert!((sum - 100.0).abs() <= 0.1 * 3.0, "sum was {sum}");
    }

    #[test]
    fn empty_input_yields_degenerate_descriptor() {
        let spec = build_type_distribution_chart(&[]);
        assert!(spec.data.values.is_empty());

        let spec = build_author_distribution_chart(&[]);
        assert!(spec.data.values.is_empty());

        let spec = build_timeline_chart(&[]);
        assert!(spec.data.values.is_empty());
    }

    #[test]
    fn descriptor_is_deterministic_regardless_of_input_order() {
        let forward = build_type_distribution_chart(&counts(&[("feature", 2), ("bugfix", 1)]));
        let reversed = build_type_distribution_chart(&counts(&[("bugfix", 1), ("feature", 2)]));

        assert_eq!(
            serde_json::to_string(&forward).unwrap(),
            serde_json::to_string(&reversed).unwrap()
        );
    }

    #[test]
    fn type_chart_uses_fixed_colors_with_fallback() {
        let spec = build_type_distribution_chart(&counts(&[("bugfix", 1), ("mystery", 1)]));
        let scale = spec.encoding.color.unwrap().scale.unwrap();

        assert_eq!(scale.domain, vec!["bugfix", "mystery"]);
        assert_eq!(scale.range[0], colors::color_for("bugfix"));
        assert_eq!(scale.range[1], colors::FALLBACK_COLOR);
    }

    #[test]
    fn author_chart_has_no_fixed_color_scale() {
        let spec = build_author_distribution_chart(&counts(&[("alice", 2)]));
        assert!(spec.encoding.color.unwrap().scale.is_none());
    }

    #[test]
    fn timeline_rows_are_sorted_by_date_then_type() {
        let rows = vec![
            DateTypeCount {
                date: "2025-01-02".to_string(),
                commit_type: "feature".to_string(),
                count: 1,
            },
            DateTypeCount {
                date: "2025-01-01".to_string(),
                commit_type: "feature".to_string(),
                count: 2,
            },
            DateTypeCount {
                date: "2025-01-01".to_string(),
                commit_type: "bugfix".to_string(),
                count: 1,
            },
        ];
        let spec = build_timeline_chart(&rows);

        let keys: Vec<(String, String)> = spec
            .data
            .values
            .iter()
            .map(|v| {
                (
                    v["date"].as_str().unwrap().to_string(),
                    v["type"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2025-01-01".to_string(), "bugfix".to_string()),
                ("2025-01-01".to_string(), "feature".to_string()),
                ("2025-01-02".to_string(), "feature".to_string()),
            ]
        );
    }
}
