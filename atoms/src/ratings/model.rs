use gallery_shared::gateway::QueryParams;

pub use gallery_shared::gateway::ImageRow;

/// A prepared listing query: text plus its typed bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingQuery {
    pub text: String,
    pub params: QueryParams,
}
