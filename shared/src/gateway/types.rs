use serde::{Deserialize, Serialize};

/// The session owner, as reported by the data server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// One row of a query result. The listing queries project images down to
/// id plus display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRow {
    pub id: i64,
    pub name: String,
}

/// A resolved server-side object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectRef {
    pub id: i64,
    pub name: Option<String>,
}

/// The child annotation hanging off a link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnnotationRef {
    pub id: i64,
    pub namespace: Option<String>,
}

/// A parent-object-to-annotation relationship, carrying the id of the user
/// who created it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationLink {
    pub id: i64,
    pub parent_id: i64,
    pub owner_id: i64,
    pub child: AnnotationRef,
}
