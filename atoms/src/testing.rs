//! In-memory stand-in for the data server, recording every call so tests
//! can assert on exactly what was executed, created and deleted.

use std::sync::Mutex;

use async_trait::async_trait;
use gallery_shared::gateway::{
    AnnotationLink, AnnotationRef, Gateway, GatewayError, ImageRow, ObjectRef, QueryParams,
    UserIdentity,
};
use lambda_http::Body;

pub struct MockGateway {
    identity: UserIdentity,
    images: Vec<ObjectRef>,
    rows: Vec<ImageRow>,
    pub links: Mutex<Vec<AnnotationLink>>,
    /// Every executed query: (text, params).
    pub queries: Mutex<Vec<(String, QueryParams)>>,
    /// Every annotation create: (parent type, parent id, namespace, value).
    pub creates: Mutex<Vec<(String, i64, String, bool)>>,
    /// Every delete: (type name, id).
    pub deletes: Mutex<Vec<(String, i64)>>,
    next_id: Mutex<i64>,
}

impl MockGateway {
    pub fn new(user_id: i64, first_name: &str, last_name: &str) -> Self {
        MockGateway {
            identity: UserIdentity {
                id: user_id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
            images: Vec::new(),
            rows: Vec::new(),
            links: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            creates: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            next_id: Mutex::new(1000),
        }
    }

    pub fn with_image(mut self, id: i64, name: Option<&str>) -> Self {
        self.images.push(ObjectRef {
            id,
            name: name.map(str::to_string),
        });
        self
    }

    pub fn with_rows(mut self, rows: Vec<ImageRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_like_link(self, owner_id: i64, image_id: i64, annotation_id: i64) -> Self {
        self.links.lock().unwrap().push(AnnotationLink {
            id: annotation_id,
            parent_id: image_id,
            owner_id,
            child: AnnotationRef {
                id: annotation_id,
                namespace: Some(crate::likes::service::LIKE_NAMESPACE.to_string()),
            },
        });
        self
    }
}

#[async_trait]
impl Gateway for MockGateway {
    fn user(&self) -> &UserIdentity {
        &self.identity
    }

    async fn execute_query(
        &self,
        text: &str,
        params: &QueryParams,
    ) -> Result<Vec<ImageRow>, GatewayError> {
        self.queries
            .lock()
            .unwrap()
            .push((text.to_string(), params.clone()));
        Ok(self.rows.clone())
    }

    async fn get_object(
        &self,
        _type_name: &str,
        id: i64,
    ) -> Result<Option<ObjectRef>, GatewayError> {
        Ok(self.images.iter().find(|object| object.id == id).cloned())
    }

    async fn annotation_links(
        &self,
        _parent_type: &str,
        parent_ids: &[i64],
        namespace: Option<&str>,
    ) -> Result<Vec<AnnotationLink>, GatewayError> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .filter(|link| parent_ids.contains(&link.parent_id))
            .filter(|link| namespace.is_none() || link.child.namespace.as_deref() == namespace)
            .cloned()
            .collect())
    }

    async fn create_bool_annotation(
        &self,
        parent_type: &str,
        parent_id: i64,
        namespace: &str,
        value: bool,
    ) -> Result<i64, GatewayError> {
        self.creates.lock().unwrap().push((
            parent_type.to_string(),
            parent_id,
            namespace.to_string(),
            value,
        ));
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;
        self.links.lock().unwrap().push(AnnotationLink {
            id,
            parent_id,
            owner_id: self.identity.id,
            child: AnnotationRef {
                id,
                namespace: Some(namespace.to_string()),
            },
        });
        Ok(id)
    }

    async fn delete_object(&self, type_name: &str, id: i64) -> Result<(), GatewayError> {
        self.deletes
            .lock()
            .unwrap()
            .push((type_name.to_string(), id));
        self.links.lock().unwrap().retain(|link| link.child.id != id);
        Ok(())
    }
}

/// Collapse a response body to text for assertions.
pub fn body_text(body: &Body) -> String {
    match body {
        Body::Text(text) => text.clone(),
        Body::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Body::Empty => String::new(),
    }
}
