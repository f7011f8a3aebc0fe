//! Wire types and endpoint construction for the PluginForge backend.
//!
//! The backend is an opaque HTTP collaborator; this module fixes the two
//! things the client must agree on with it:
//!
//! - **Request/response shapes** - [`GenerateRequest`] going out,
//!   [`ApiResponse`] coming back from both the generate and the recompile
//!   endpoint
//! - **URL construction** - [`Endpoints`] builds the generate, recompile,
//!   and download URLs from a base URL; the download URL is only
//!   constructed here, never fetched
//!
//! [`ArtifactRef`] is the opaque identifier for a generated plugin, handed
//! outward by the submission flow and used to key later recompile and
//! download requests.

mod endpoints;
mod types;

pub use endpoints::Endpoints;
pub use types::{ApiResponse, ArtifactRef, GenerateRequest};
