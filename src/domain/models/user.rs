//! Authenticated principal.

use serde::{Deserialize, Serialize};

use super::de::null_as_empty;

/// The principal a token authenticates as, as returned by `GET /users/me`.
///
/// For an integration token this is the integration's bot user. Both fields
/// may be missing or `null` in the payload; such an `id` decodes as an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Notion user identifier
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,

    /// Display name, if the workspace has set one
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name to show for this principal.
    ///
    /// Returns `name` when it is present and non-empty, otherwise falls back
    /// to `id`.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}
