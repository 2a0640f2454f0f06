//! Album aggregation - reduces a list of tracks into one album record.
//!
//! Per-track metadata for the same album frequently disagrees (different
//! rips, partial tags, case-mangled genres), so each album field has an
//! explicit reconciliation rule:
//!
//! - Descriptive fields are assumed uniform and come from the first track.
//! - Duration and size are sums; years are min/max over non-zero values.
//! - Date and comment require consensus and go empty on conflict.
//! - MusicBrainz album ID uses the most frequent non-empty value.
//! - Tags and participants are merged with frequency/encounter-order rules.
//!
//! [`to_album`] is a total pure function: an empty slice produces
//! `Album::default()`, and no input can make it fail.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::model::tags::merge_tags;
use crate::model::{Album, Participants, Role, Track};

/// Reduces an ordered track list into a single [`Album`].
///
/// Tracks are assumed to belong to the same album; divergent descriptive
/// fields are upstream data problems and are not resolved here (the first
/// track is taken as representative).
pub fn to_album(tracks: &[Track]) -> Album {
    let Some(first) = tracks.first() else {
        return Album::default();
    };

    debug!(tracks = tracks.len(), album = %first.album, "reducing tracks into album");

    let mut album = Album {
        id: first.album_id.clone(),
        name: first.album.clone(),
        artist_id: first.artist_id.clone(),
        artist: first.artist.clone(),
        album_artist_id: first.album_artist_id.clone(),
        album_artist: first.album_artist.clone(),
        sort_album_name: first.sort_album_name.clone(),
        sort_album_artist_name: first.sort_album_artist_name.clone(),
        order_album_name: first.order_album_name.clone(),
        order_album_artist_name: first.order_album_artist_name.clone(),
        mbz_album_artist_id: first.mbz_album_artist_id.clone(),
        mbz_album_type: first.mbz_album_type.clone(),
        mbz_album_comment: first.mbz_album_comment.clone(),
        mbz_release_group_id: first.mbz_release_group_id.clone(),
        compilation: first.compilation,
        catalog_num: first.catalog_num.clone(),
        ..Album::default()
    };

    // Distinct non-empty dates, in first-seen order
    let mut dates: Vec<&str> = Vec::new();

    for track in tracks {
        album.duration += track.duration;
        album.size += track.size;

        if track.year != 0 {
            album.min_year = if album.min_year == 0 {
                track.year
            } else {
                album.min_year.min(track.year)
            };
            album.max_year = album.max_year.max(track.year);
        }

        if !track.date.is_empty() && !dates.contains(&track.date.as_str()) {
            dates.push(&track.date);
        }

        album.explicit_status = album.explicit_status.max(track.explicit_status);

        // Disc 0 means unspecified; first-seen subtitle wins for a disc
        album
            .discs
            .entry(effective_disc(track))
            .or_insert_with(|| track.disc_subtitle.clone());

        album.folder_ids.insert(track.folder_id.clone());
    }

    // A single agreed-upon date survives; any disagreement clears it
    if let [date] = dates.as_slice() {
        album.date = date.to_string();
    }

    if tracks.iter().all(|t| t.comment == first.comment) {
        album.comment = first.comment.clone();
    }

    album.updated_at = tracks.iter().filter_map(|t| t.updated_at).max();
    album.created_at = tracks.iter().filter_map(|t| t.birth_time).min();

    album.mbz_album_id = most_frequent(tracks.iter().map(|t| t.mbz_album_id.as_str()));
    album.tags = merge_tags(tracks.iter().map(|t| &t.tags));
    album.participants = merge_participants(tracks);
    album.embed_art_path = embed_art_path(tracks);

    album
}

/// Disc number with 0 ("unspecified") mapped to disc 1.
fn effective_disc(track: &Track) -> u32 {
    track.disc_number.max(1)
}

/// Most frequent non-empty value; ties go to the first-encountered one.
///
/// Counting is a single ordered pass over an insertion-ordered list, so the
/// result never depends on hash-map iteration order.
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut ordered: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for value in values {
        if value.is_empty() {
            continue;
        }
        match index.get(value) {
            Some(&i) => ordered[i].1 += 1,
            None => {
                index.insert(value, ordered.len());
                ordered.push((value, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(value, count) in &ordered {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string()).unwrap_or_default()
}

/// Per role, the union of all tracks' participants in first-encounter
/// order, de-duplicated by participant id (first occurrence keeps its
/// display and sort names).
fn merge_participants(tracks: &[Track]) -> Participants {
    let mut merged: Participants = HashMap::new();
    let mut seen: HashMap<Role, HashSet<&str>> = HashMap::new();

    for track in tracks {
        for (role, list) in &track.participants {
            let bucket = merged.entry(*role).or_default();
            let seen_ids = seen.entry(*role).or_default();
            for participant in list {
                if seen_ids.insert(participant.id.as_str()) {
                    bucket.push(participant.clone());
                }
            }
        }
    }

    merged
}

/// Chooses the track whose embedded art represents the album: lowest disc
/// number first, path as the tie-break. Path never overrides a lower disc.
fn embed_art_path(tracks: &[Track]) -> String {
    tracks
        .iter()
        .filter(|t| t.has_cover_art)
        .min_by(|a, b| {
            effective_disc(a)
                .cmp(&effective_disc(b))
                .then_with(|| a.path.cmp(&b.path))
        })
        .map(|t| t.path.clone())
        .unwrap_or_default()
}
