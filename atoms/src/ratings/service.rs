use gallery_shared::gateway::{Gateway, ImageRow, QueryParams};

use super::model::RatingQuery;

/// Images count as "best" when at least one rating annotation holds this
/// value.
pub const TOP_RATING: i64 = 5;

const BASE_QUERY: &str = "select image from Image as image \
    left outer join fetch image.annotationLinks as annLink \
    left outer join fetch annLink.child as ann \
    where ann.longValue = :rating";

/// Build the listing query. The rating and the optional namespace travel as
/// bound parameters; nothing user-supplied reaches the query text.
pub fn rating_query(namespace: Option<&str>) -> RatingQuery {
    let mut text = BASE_QUERY.to_string();
    let mut params = QueryParams::new().add_long("rating", TOP_RATING);
    if let Some(ns) = namespace {
        text.push_str(" and ann.ns = :ns");
        params = params.add_str("ns", ns);
    }
    RatingQuery { text, params }
}

/// Fetch the 5-star images. Row order is the server's and is preserved.
pub async fn load_top_rated(
    gateway: &impl Gateway,
    namespace: Option<&str>,
) -> Result<Vec<ImageRow>, String> {
    let query = rating_query(namespace);
    gateway
        .execute_query(&query.text, &query.params)
        .await
        .map_err(|e| format!("rating query failed: {}", e))
}
