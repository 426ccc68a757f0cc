//! Session-scoped connection to the image-data server.
//!
//! Every view handler delegates its reads and writes here; this module owns
//! no data. The connection is passed into handlers explicitly, never held in
//! global state.

mod error;
mod http;
mod params;
mod types;

pub use error::GatewayError;
pub use http::HttpGateway;
pub use params::{ParamValue, QueryParams};
pub use types::{AnnotationLink, AnnotationRef, ImageRow, ObjectRef, UserIdentity};

use async_trait::async_trait;

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Identity of the session owner, resolved when the session was opened.
    fn user(&self) -> &UserIdentity;

    fn user_id(&self) -> i64 {
        self.user().id
    }

    /// Run a parameterized query. Rows come back in the server's order and
    /// callers must not re-sort them.
    async fn execute_query(
        &self,
        text: &str,
        params: &QueryParams,
    ) -> Result<Vec<ImageRow>, GatewayError>;

    /// Look up a single object by type name and id. Missing or inaccessible
    /// objects are `None`, not an error.
    async fn get_object(
        &self,
        type_name: &str,
        id: i64,
    ) -> Result<Option<ObjectRef>, GatewayError>;

    /// Annotation links attached to the given parents, optionally scoped to
    /// a namespace. The server cannot filter these by owner; callers that
    /// need owner scoping filter the result themselves.
    async fn annotation_links(
        &self,
        parent_type: &str,
        parent_ids: &[i64],
        namespace: Option<&str>,
    ) -> Result<Vec<AnnotationLink>, GatewayError>;

    /// Create a boolean annotation and link it to the parent object.
    /// Returns the id of the new annotation.
    async fn create_bool_annotation(
        &self,
        parent_type: &str,
        parent_id: i64,
        namespace: &str,
        value: bool,
    ) -> Result<i64, GatewayError>;

    async fn delete_object(&self, type_name: &str, id: i64) -> Result<(), GatewayError>;
}
