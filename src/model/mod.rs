//! Core data models for the music library.
//!
//! Defines the primary entities: [`Track`] (one audio file's metadata
//! snapshot) and [`Album`] (the aggregate computed from a track list),
//! plus the supporting participant and explicit-content types.
//!
//! Both records are transient: they are constructed from upstream data,
//! never mutated afterwards, and discarded once the caller has consumed
//! the result. Persistence lives elsewhere.

pub mod tags;

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use tags::{RawTags, TagKey, TagMap};

/// Disc number to disc subtitle. Disc 0 in the source data means
/// "unspecified" and is recorded as disc 1.
pub type Discs = BTreeMap<u32, String>;

/// Explicit-content marker for a track or album.
///
/// Ordered so that the strictest status wins: `Explicit > Clean > None`.
/// An album's status is simply the maximum over its tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExplicitStatus {
    /// No marker present
    #[default]
    #[serde(rename = "")]
    None,
    /// Marked clean ("c" on the wire)
    #[serde(rename = "c")]
    Clean,
    /// Marked explicit ("e" on the wire)
    #[serde(rename = "e")]
    Explicit,
}

/// A credited participant (artist, composer, ...) on a track or album.
///
/// Identity is the `id` field alone; two participants with the same id are
/// the same person even if their display or sort names differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub sort_name: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sort_name: None,
        }
    }

    pub fn with_sort_name(
        id: impl Into<String>,
        name: impl Into<String>,
        sort_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sort_name: Some(sort_name.into()),
        }
    }
}

/// The role a participant plays on a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Artist,
    AlbumArtist,
    Composer,
    Conductor,
    Lyricist,
    Arranger,
    Producer,
    Engineer,
    Mixer,
    Remixer,
    DjMixer,
    Director,
    Performer,
}

/// Participant lists keyed by role. Order within a list is meaningful.
pub type Participants = HashMap<Role, Vec<Participant>>;

/// A track (audio file) metadata snapshot, the atomic input unit for
/// aggregation and playlist export.
///
/// Empty strings and zero values mean "unknown" throughout; timestamps use
/// `None` as their zero value. `library_path` is the library root the track
/// was scanned under and is only consulted by the playlist exporter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub album_id: String,
    pub album: String,
    pub artist_id: String,
    pub artist: String,
    pub album_artist_id: String,
    pub album_artist: String,
    pub sort_album_name: String,
    pub sort_artist_name: String,
    pub sort_album_artist_name: String,
    pub order_album_name: String,
    pub order_artist_name: String,
    pub order_album_artist_name: String,
    pub mbz_album_id: String,
    pub mbz_album_artist_id: String,
    pub mbz_album_type: String,
    pub mbz_album_comment: String,
    pub mbz_release_group_id: String,
    pub compilation: bool,
    pub catalog_num: String,
    pub comment: String,
    pub explicit_status: ExplicitStatus,
    /// Duration in seconds, fractional
    pub duration: f32,
    /// File size in bytes
    pub size: u64,
    /// Release year, 0 = unknown
    pub year: i32,
    /// Release date string, "" = unknown
    pub date: String,
    /// Disc number, 0 = unspecified (treated as disc 1)
    pub disc_number: u32,
    pub disc_subtitle: String,
    /// Storage path, relative to `library_path`
    pub path: String,
    /// Root of the library this track belongs to
    pub library_path: String,
    /// Identifier of the folder that owns this track
    pub folder_id: String,
    /// Whether the file carries embedded cover art
    pub has_cover_art: bool,
    /// Free-form tag categories (case-insensitive keys) to label lists
    pub tags: RawTags,
    pub participants: Participants,
    /// Last modification of the underlying file
    pub updated_at: Option<DateTime<Utc>>,
    /// When the file was first seen by the library
    pub birth_time: Option<DateTime<Utc>>,
}

/// The computed aggregate representing one release.
///
/// Produced by [`crate::aggregate::to_album`]; the zero value
/// (`Album::default()`) is the result of reducing an empty track list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist_id: String,
    pub artist: String,
    pub album_artist_id: String,
    pub album_artist: String,
    pub sort_album_name: String,
    pub sort_album_artist_name: String,
    pub order_album_name: String,
    pub order_album_artist_name: String,
    pub mbz_album_id: String,
    pub mbz_album_artist_id: String,
    pub mbz_album_type: String,
    pub mbz_album_comment: String,
    pub mbz_release_group_id: String,
    pub compilation: bool,
    pub catalog_num: String,
    pub comment: String,
    pub explicit_status: ExplicitStatus,
    /// Sum of track durations, in seconds
    pub duration: f32,
    /// Sum of track sizes, in bytes
    pub size: u64,
    /// Smallest non-zero track year, 0 if none
    pub min_year: i32,
    /// Largest non-zero track year, 0 if none
    pub max_year: i32,
    /// The release date all dated tracks agree on, "" otherwise
    pub date: String,
    pub discs: Discs,
    pub tags: TagMap,
    pub participants: Participants,
    /// Path of the track whose embedded art represents the album
    pub embed_art_path: String,
    /// Distinct folder identifiers of the input tracks
    pub folder_ids: HashSet<String>,
    /// Latest track modification
    pub updated_at: Option<DateTime<Utc>>,
    /// Earliest track first-seen time
    pub created_at: Option<DateTime<Utc>>,
}
