use gallery_shared::gateway::Gateway;
use gallery_shared::render;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};

use super::model::LikeForm;
use super::service::set_liked;
use crate::ratings::http::{flag_is_set, BEST_ROUTE};

/// POST /like - toggle the current user's like on an image, then bounce
/// back to the listing. The redirect happens whether or not anything
/// changed; only a malformed request or a failed remote call answers
/// differently.
pub async fn like_handler(
    gateway: &impl Gateway,
    form: Option<LikeForm>,
) -> Result<Response<Body>, Error> {
    let Some(form) = form else {
        return render::error_response(StatusCode::BAD_REQUEST, "Invalid form body");
    };
    let image_id: i64 = match form.id.parse() {
        Ok(id) => id,
        Err(_) => return render::error_response(StatusCode::BAD_REQUEST, "Invalid image id"),
    };
    let liked = flag_is_set(form.like.as_deref());

    match set_liked(gateway, image_id, liked).await {
        Ok(outcome) => {
            tracing::info!(
                "like toggle: image={} liked={} outcome={:?}",
                image_id,
                liked,
                outcome
            );
            render::redirect(BEST_ROUTE)
        }
        Err(e) => {
            tracing::error!("❌ like toggle failed: image={} error={}", image_id, e);
            render::error_response(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}
