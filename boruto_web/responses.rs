use serde::{Deserialize, Serialize};

use boruto_types::Hero;

/// The JSON envelope shared by the heroes and search endpoints.
///
/// `prevPage`/`nextPage` are omitted from the JSON when absent. A failure
/// envelope always carries an empty `heroes` list and no page links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<i32>,
    #[serde(default)]
    pub heroes: Vec<Hero>,
}

impl ApiResponse {
    pub fn ok(heroes: Vec<Hero>, prev_page: Option<i32>, next_page: Option<i32>) -> Self {
        Self {
            success: true,
            message: "ok".to_string(),
            prev_page,
            next_page,
            heroes,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            prev_page: None,
            next_page: None,
            heroes: Vec::new(),
        }
    }
}
