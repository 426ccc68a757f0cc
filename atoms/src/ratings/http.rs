use gallery_shared::gateway::Gateway;
use gallery_shared::{render, Config, ListingMode};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};

use super::service::load_top_rated;

/// Route the like toggle bounces back to.
pub const BEST_ROUTE: &str = "/best";

/// Query-string and form flags arrive as strings; anything except an
/// explicit "off" spelling counts as set.
pub fn flag_is_set(value: Option<&str>) -> bool {
    match value {
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "" | "0" | "false" | "off"),
        None => false,
    }
}

/// GET /best - the 5-star listing.
///
/// `page` mode renders HTML unless the `json` query flag is set, in which
/// case the same rows go out as `{"data": [...]}`. `api` mode always
/// answers JSON with a `count` field.
pub async fn best_handler(
    gateway: &impl Gateway,
    config: &Config,
    json_flag: Option<&str>,
) -> Result<Response<Body>, Error> {
    let rows = match load_top_rated(gateway, config.rating_namespace.as_deref()).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("❌ rating listing failed: {}", e);
            return render::error_response(StatusCode::INTERNAL_SERVER_ERROR, &e);
        }
    };
    tracing::info!("rating listing: {} image(s)", rows.len());

    match config.listing_mode {
        ListingMode::Api => render::json_response(
            StatusCode::OK,
            &serde_json::json!({ "count": rows.len(), "data": rows }),
        ),
        ListingMode::Page if flag_is_set(json_flag) => {
            render::json_response(StatusCode::OK, &serde_json::json!({ "data": rows }))
        }
        ListingMode::Page => {
            let mut content = String::from("<h1>Top rated images</h1>\n<ul>\n");
            for row in &rows {
                content.push_str(&format!(
                    "<li>{} (id: {})</li>\n",
                    render::escape(&row.name),
                    row.id
                ));
            }
            content.push_str("</ul>");
            render::html_response(render::html_page("Top rated images", &content))
        }
    }
}
