//! Artwork identity resolution.
//!
//! Decides which artwork a track is represented by: its own embedded art
//! or its album's art. Whether per-file artwork is served at all is a
//! deployment decision, so the feature flag is an explicit parameter here
//! rather than global configuration state.

use serde::{Deserialize, Serialize};

use crate::model::Track;

/// Which entity an artwork identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkKind {
    /// Art embedded in the media file itself
    MediaFile,
    /// The album's artwork
    Album,
}

/// An artwork identity: the kind of entity plus its id, consumed by the
/// artwork-serving endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkId {
    pub kind: ArtworkKind,
    pub id: String,
}

/// Resolves the artwork identity for a track.
///
/// A track is represented by its own embedded art only when the deployment
/// allows media-file artwork and the track actually carries art; in every
/// other case it falls back to the album's artwork.
pub fn cover_art_id(track: &Track, media_file_cover_art_enabled: bool) -> ArtworkId {
    if media_file_cover_art_enabled && track.has_cover_art {
        ArtworkId {
            kind: ArtworkKind::MediaFile,
            id: track.id.clone(),
        }
    } else {
        ArtworkId {
            kind: ArtworkKind::Album,
            id: track.album_id.clone(),
        }
    }
}
