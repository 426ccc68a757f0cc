use gallery_shared::gateway::Gateway;
use gallery_shared::render;
use lambda_http::{Body, Error, Response};

use super::service::profile_context;

/// GET / - landing page greeting the logged-in user.
pub async fn index_handler(gateway: &impl Gateway) -> Result<Response<Body>, Error> {
    let ctx = profile_context(gateway);
    tracing::info!("profile page for user {}", ctx.user_id);

    let content = format!(
        "<h1>Welcome, {} {}</h1>\n<p>Your user id: {}</p>",
        render::escape(&ctx.first_name),
        render::escape(&ctx.last_name),
        ctx.user_id
    );
    render::html_response(render::html_page("Profile", &content))
}
