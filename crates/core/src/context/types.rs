use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A collab context resource, identified by UUID.
///
/// The context ties an app instance to the collab it lives in. The server
/// may include fields we do not model; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub context: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "appId")]
    pub app_id: Option<u64>,
    pub collab: Collab,
}

/// A collaborative workspace record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collab {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "isPublic")]
    pub public: bool,
}
