use async_trait::async_trait;
use serde::Deserialize;

use super::{
    AnnotationLink, Gateway, GatewayError, ImageRow, ObjectRef, QueryParams, UserIdentity,
};

/// JSON client for the image-data server's session API.
///
/// One instance per request, bound to the caller's session key. Connecting
/// validates the key and caches the session owner's identity.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    session_key: String,
    identity: UserIdentity,
}

#[derive(Deserialize)]
struct RowsBody {
    rows: Vec<ImageRow>,
}

#[derive(Deserialize)]
struct LinksBody {
    links: Vec<AnnotationLink>,
}

#[derive(Deserialize)]
struct CreatedBody {
    id: i64,
}

impl HttpGateway {
    pub async fn connect(
        http: reqwest::Client,
        base_url: &str,
        session_key: &str,
    ) -> Result<Self, GatewayError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let resp = http
            .get(format!("{}/api/session", base_url))
            .bearer_auth(session_key)
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GatewayError::InvalidSession);
        }
        let identity: UserIdentity = check(resp).await?.json().await?;
        tracing::debug!("gateway session opened for user {}", identity.id);

        Ok(HttpGateway {
            http,
            base_url,
            session_key: session_key.to_string(),
            identity,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(GatewayError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl Gateway for HttpGateway {
    fn user(&self) -> &UserIdentity {
        &self.identity
    }

    async fn execute_query(
        &self,
        text: &str,
        params: &QueryParams,
    ) -> Result<Vec<ImageRow>, GatewayError> {
        let resp = self
            .http
            .post(self.url("/api/query"))
            .bearer_auth(&self.session_key)
            .json(&serde_json::json!({ "query": text, "params": params }))
            .send()
            .await?;
        let body: RowsBody = check(resp).await?.json().await?;
        Ok(body.rows)
    }

    async fn get_object(
        &self,
        type_name: &str,
        id: i64,
    ) -> Result<Option<ObjectRef>, GatewayError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/objects/{}/{}", type_name, id)))
            .bearer_auth(&self.session_key)
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let object: ObjectRef = check(resp).await?.json().await?;
        Ok(Some(object))
    }

    async fn annotation_links(
        &self,
        parent_type: &str,
        parent_ids: &[i64],
        namespace: Option<&str>,
    ) -> Result<Vec<AnnotationLink>, GatewayError> {
        let resp = self
            .http
            .post(self.url("/api/annotations/links"))
            .bearer_auth(&self.session_key)
            .json(&serde_json::json!({
                "parentType": parent_type,
                "parentIds": parent_ids,
                "ns": namespace,
            }))
            .send()
            .await?;
        let body: LinksBody = check(resp).await?.json().await?;
        Ok(body.links)
    }

    async fn create_bool_annotation(
        &self,
        parent_type: &str,
        parent_id: i64,
        namespace: &str,
        value: bool,
    ) -> Result<i64, GatewayError> {
        let resp = self
            .http
            .post(self.url("/api/annotations"))
            .bearer_auth(&self.session_key)
            .json(&serde_json::json!({
                "parentType": parent_type,
                "parentId": parent_id,
                "ns": namespace,
                "boolValue": value,
            }))
            .send()
            .await?;
        let body: CreatedBody = check(resp).await?.json().await?;
        Ok(body.id)
    }

    async fn delete_object(&self, type_name: &str, id: i64) -> Result<(), GatewayError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/objects/{}/{}", type_name, id)))
            .bearer_auth(&self.session_key)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}
