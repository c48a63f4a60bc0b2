//! Serde structs mirroring the subset of Vega-Lite v5 the dashboard uses.
//!
//! A `ChartSpec` is a self-contained declarative description: schema id,
//! data rows, mark type, encoding channels, optional fixed color scale and
//! tooltip fields. It carries no behavior.

use serde::Serialize;
use serde_json::Value;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
    pub data: DataValues,
    pub mark: Mark,
    pub encoding: Encoding,
}

/// Inline data rows, pre-computed by the builders.
#[derive(Debug, Clone, Serialize)]
pub struct DataValues {
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<bool>,
}

impl Mark {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            tooltip: Some(true),
        }
    }
}

/// Encoding channels. Only the channels a chart uses are serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Vec<FieldDef>>,
}

/// A field-to-channel mapping with optional title and fixed color scale.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ColorScale>,
}

impl FieldDef {
    pub fn quantitative(field: &str) -> Self {
        Self::new(field, "quantitative")
    }

    pub fn nominal(field: &str) -> Self {
        Self::new(field, "nominal")
    }

    pub fn temporal(field: &str) -> Self {
        Self::new(field, "temporal")
    }

    fn new(field: &str, field_type: &str) -> Self {
        Self {
            field: field.to_string(),
            field_type: field_type.to_string(),
            title: None,
            scale: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_scale(mut self, scale: ColorScale) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Explicit category → color mapping (domain and range are index-aligned).
#[derive(Debug, Clone, Serialize)]
pub struct ColorScale {
    pub domain: Vec<String>,
    pub range: Vec<String>,
}
