use serde::{Deserialize, Serialize};

/// Count of commits sharing one categorical key (an author or a type).
///
/// One entry exists per distinct value present in the input; zero counts are
/// never synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub key: String,
    pub count: u64,
}

/// Count of commits sharing one (calendar date, type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTypeCount {
    /// YYYY-MM-DD
    pub date: String,
    #[serde(rename = "type")]
    pub commit_type: String,
    pub count: u64,
}
