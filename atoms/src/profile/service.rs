use gallery_shared::gateway::Gateway;

use super::model::ProfileContext;

/// Identity fields for the landing page, straight from the session. No
/// remote call happens here; the identity was cached when the session
/// connection was opened.
pub fn profile_context(gateway: &impl Gateway) -> ProfileContext {
    let user = gateway.user();
    ProfileContext {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        user_id: user.id,
    }
}
