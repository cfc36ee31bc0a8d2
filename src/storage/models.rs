use serde::{Deserialize, Serialize};

/// An uploaded image. The bytes live in the object store under `img_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: u64,
    #[serde(default)]
    pub img_name: Option<String>,
}

/// A project link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: u64,
    #[serde(default)]
    pub live_link: Option<String>,
    pub github_link: String,
}

/// A free-text project description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub id: u64,
    pub description: String,
}

/// Caller-supplied fields for a new link.
///
/// `github_link` is optional here so that a missing value is rejected by the
/// storage layer as a not-null violation, like any other column rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLink {
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

/// Caller-supplied fields for a new description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDescription {
    #[serde(default)]
    pub description: Option<String>,
}
