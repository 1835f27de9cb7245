// Upskill recommendations: field detection, static content table, video search.

pub mod db;
pub mod field;
pub mod videos;

use tracing::debug;

use crate::upskill::db::{UpskillBundle, UpskillDb};
use crate::upskill::field::{detect_field, Field};
use crate::upskill::videos::VideoSearch;

pub const MAX_VIDEOS: usize = 3;

/// Builds the upskill bundle for free-text interests and returns it with the
/// detected field. Never fails.
///
/// Search results replace the bundle's videos when there are any; otherwise
/// the curated videos are kept, capped at [`MAX_VIDEOS`].
pub async fn build_upskill(
    text: &str,
    db: &UpskillDb,
    videos: &dyn VideoSearch,
) -> (Field, UpskillBundle) {
    let field = detect_field(text);
    let mut bundle = db.bundle(field);

    let found = videos.search(field.video_query(), MAX_VIDEOS).await;
    debug!(
        "Upskill field '{}': {} searched videos",
        field.key(),
        found.len()
    );

    if found.is_empty() {
        bundle.videos.truncate(MAX_VIDEOS);
    } else {
        bundle.videos = found;
    }
    (field, bundle)
}
