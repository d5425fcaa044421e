//! Port API paths and request/response types.

use serde::{Deserialize, Serialize};

use ecrsync_core::types::Blueprint;

/// Client-credentials token exchange.
pub const ACCESS_TOKEN: &str = "auth/access_token";

/// Entity collection of a blueprint.
pub fn entities_path(blueprint: &Blueprint) -> String {
    format!("blueprints/{}/entities", blueprint)
}

/// Query parameters requesting create-if-absent and shallow merge.
pub const UPSERT_MERGE: [(&str, &str); 2] = [("upsert", "true"), ("merge", "true")];

/// Request body for the token exchange. Not `Debug`: it carries the secret.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

/// Response from the token exchange.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Port error response format.
#[derive(Debug, Deserialize)]
pub struct PortErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
