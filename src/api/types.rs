//! Request and response shapes shared with the backend.

use serde::{Deserialize, Serialize};

/// Body of a generation request, serialized camelCase on the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Plugin name, already normalized (no whitespace).
    pub plugin_name: String,
    /// Plugin version, three-part numeric.
    pub version: String,
    /// Version of the platform the plugin targets.
    pub target_version: String,
    /// Free-form plugin description.
    pub description: String,
}

/// Response shape shared by the generate and recompile endpoints.
///
/// `success` is the application-level outcome flag; a successful transport
/// round trip can still carry `success: false` with a server-supplied
/// `error`. All other fields are optional on the wire.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    /// Application-level outcome.
    pub success: bool,
    /// Identifier of the generated plugin, present on success.
    #[serde(default)]
    pub plugin_id: Option<String>,
    /// Human-readable success message.
    #[serde(default)]
    pub message: Option<String>,
    /// Server-supplied error description.
    #[serde(default)]
    pub error: Option<String>,
    /// Download path for the compiled artifact, when compilation succeeded.
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ApiResponse {
    /// The best available failure text: `error` first, then `message`.
    pub fn failure_text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Opaque reference to a generated plugin artifact.
///
/// Carried by the `Succeeded` view state and used to key recompile and
/// download requests. The client never inspects the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    /// Server-assigned plugin identifier.
    pub plugin_id: String,
}

impl ArtifactRef {
    /// Wrap a server-assigned identifier.
    pub fn new(plugin_id: impl Into<String>) -> Self {
        ArtifactRef {
            plugin_id: plugin_id.into(),
        }
    }
}
