use serde::Deserialize;

/// Form body of POST /like.
#[derive(Debug, Deserialize)]
pub struct LikeForm {
    /// Image id, as submitted (form fields are strings).
    pub id: String,
    /// Boolean-ish flag; an absent field means "unlike".
    #[serde(default)]
    pub like: Option<String>,
}
