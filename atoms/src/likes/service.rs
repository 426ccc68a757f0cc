use gallery_shared::gateway::Gateway;

/// Namespace marking an annotation as this app's "like".
pub const LIKE_NAMESPACE: &str = "web.app.demo.like";

/// What a toggle invocation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Created,
    Deleted,
    Unchanged,
    ImageMissing,
}

/// Set or clear the current user's like on an image.
///
/// A missing or inaccessible image is a silent no-op. The link query cannot
/// be owner-scoped server-side, so all like links on the image are fetched
/// and filtered to the current user here. At most one create or delete
/// happens per call, and re-liking an already-liked image never creates a
/// duplicate.
pub async fn set_liked(
    gateway: &impl Gateway,
    image_id: i64,
    liked: bool,
) -> Result<ToggleOutcome, String> {
    let image = gateway
        .get_object("Image", image_id)
        .await
        .map_err(|e| format!("image lookup failed: {}", e))?;
    let Some(image) = image else {
        return Ok(ToggleOutcome::ImageMissing);
    };

    let links = gateway
        .annotation_links("Image", &[image.id], Some(LIKE_NAMESPACE))
        .await
        .map_err(|e| format!("like link lookup failed: {}", e))?;
    let user_id = gateway.user_id();
    let mine = links.into_iter().find(|link| link.owner_id == user_id);

    match (mine, liked) {
        (None, true) => {
            gateway
                .create_bool_annotation("Image", image.id, LIKE_NAMESPACE, true)
                .await
                .map_err(|e| format!("like create failed: {}", e))?;
            Ok(ToggleOutcome::Created)
        }
        (Some(link), false) => {
            gateway
                .delete_object("BooleanAnnotation", link.child.id)
                .await
                .map_err(|e| format!("like delete failed: {}", e))?;
            Ok(ToggleOutcome::Deleted)
        }
        _ => Ok(ToggleOutcome::Unchanged),
    }
}
