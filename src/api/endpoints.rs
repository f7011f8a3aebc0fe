//! Backend endpoint URL construction.

use crate::api::types::ArtifactRef;
use crate::error::{RequestError, Result};
use url::Url;

/// Builds the backend URLs from a base URL.
///
/// Path segments for plugin identifiers and filenames are percent-encoded
/// by the `url` crate, so a server-assigned identifier can never break out
/// of its path segment.
///
/// # Examples
///
/// ```
/// use pluginforge_client::api::Endpoints;
///
/// let endpoints = Endpoints::new("http://localhost:5000").unwrap();
/// assert_eq!(
///     endpoints.generate_url().as_str(),
///     "http://localhost:5000/api/generate"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse the base URL of the backend.
    pub fn new(base: impl AsRef<str>) -> Result<Self> {
        let base = Url::parse(base.as_ref())
            .map_err(|e| RequestError::Config(format!("invalid base url: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(RequestError::Config(format!(
                "base url cannot carry a path: {base}"
            )));
        }
        Ok(Endpoints { base })
    }

    /// `POST {base}/api/generate`
    pub fn generate_url(&self) -> Url {
        self.join(&["api", "generate"])
    }

    /// `POST {base}/api/plugins/{id}/recompile`
    pub fn recompile_url(&self, artifact: &ArtifactRef) -> Url {
        self.join(&["api", "plugins", &artifact.plugin_id, "recompile"])
    }

    /// `{base}/api/download/{id}/{filename}`
    ///
    /// Only constructed here; the core never fetches it.
    pub fn download_url(&self, artifact: &ArtifactRef, filename: &str) -> Url {
        self.join(&["api", "download", &artifact.plugin_id, filename])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        {
            // Infallible: `new` rejects cannot-be-a-base URLs.
            let mut path = url.path_segments_mut().expect("base url verified at construction");
            path.pop_if_empty();
            path.extend(segments);
        }
        url
    }
}
