//! Test utilities and fixtures for trackfold tests.
//!
//! Provides mock factories to reduce boilerplate when building track
//! records in tests. Customize with struct update syntax:
//!
//! ```ignore
//! let track = Track {
//!     year: 1985,
//!     ..mock_track()
//! };
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::model::Track;

/// Creates a mock [`Track`] with every descriptive album field populated.
///
/// All tracks built from this mock agree on their album-level metadata,
/// matching the aggregator's uniformity assumption.
pub fn mock_track() -> Track {
    Track {
        id: "1".to_string(),
        title: "Test Track".to_string(),
        album_id: "AlbumID".to_string(),
        album: "Album".to_string(),
        artist_id: "ArtistID".to_string(),
        artist: "Artist".to_string(),
        album_artist_id: "AlbumArtistID".to_string(),
        album_artist: "AlbumArtist".to_string(),
        sort_album_name: "SortAlbumName".to_string(),
        sort_artist_name: "SortArtistName".to_string(),
        sort_album_artist_name: "SortAlbumArtistName".to_string(),
        order_album_name: "OrderAlbumName".to_string(),
        order_artist_name: "OrderArtistName".to_string(),
        order_album_artist_name: "OrderAlbumArtistName".to_string(),
        mbz_album_artist_id: "MbzAlbumArtistID".to_string(),
        mbz_album_type: "MbzAlbumType".to_string(),
        mbz_album_comment: "MbzAlbumComment".to_string(),
        mbz_release_group_id: "MbzReleaseGroupID".to_string(),
        compilation: true,
        catalog_num: "CatalogNum".to_string(),
        path: "/music/file.mp3".to_string(),
        folder_id: "Folder1".to_string(),
        ..Track::default()
    }
}

/// Creates a mock [`Track`] with the specified id and path.
///
/// Useful where path ordering or identity matters.
pub fn mock_track_at_path(id: &str, path: &str) -> Track {
    Track {
        id: id.to_string(),
        title: format!("Track {}", id),
        path: path.to_string(),
        duration: 180.0,
        ..mock_track()
    }
}

/// Parses a "YYYY-MM-DD HH:MM" timestamp into UTC.
pub fn ts(v: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M")
        .expect("valid test timestamp")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_track_defaults() {
        let track = mock_track();
        assert_eq!(track.album_id, "AlbumID");
        assert_eq!(track.album, "Album");
        assert!(track.compilation);
        assert!(!track.has_cover_art);
        assert_eq!(track.duration, 0.0);
    }

    #[test]
    fn test_mock_track_at_path() {
        let track = mock_track_at_path("42", "/music/song.flac");
        assert_eq!(track.id, "42");
        assert_eq!(track.path, "/music/song.flac");
        assert_eq!(track.title, "Track 42");
    }

    #[test]
    fn test_ts_parses_utc() {
        let a = ts("2022-12-19 08:30");
        let b = ts("2022-12-19 09:30");
        assert!(a < b);
    }
}
