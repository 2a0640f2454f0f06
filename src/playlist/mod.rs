//! Playlist export in the extended M3U (`.m3u8`) text format.
//!
//! The output is plain UTF-8 text consumed byte-for-byte by download and
//! streaming endpoints, so formatting here is exact: every line is
//! newline-terminated, track text is emitted verbatim with no escaping,
//! and durations use EXTINF's round-half-down convention.

use std::fmt::Write;
use std::path::MAIN_SEPARATOR;

use tracing::debug;

use crate::model::Track;

/// Serializes a track list into M3U8 playlist text.
///
/// Tracks appear in input order, without sorting or deduplication. With
/// `absolute_paths` the track's library root is joined in front of its
/// storage path as a plain string, not an OS-path normalization.
///
/// An empty track list yields exactly the two header lines.
pub fn to_m3u8(tracks: &[Track], title: &str, absolute_paths: bool) -> String {
    debug!(tracks = tracks.len(), title, "exporting playlist");

    // Header + roughly two short lines per track
    let mut out = String::with_capacity(32 + tracks.len() * 96);
    out.push_str("#EXTM3U\n");
    let _ = writeln!(out, "#PLAYLIST:{title}");

    for track in tracks {
        let _ = writeln!(
            out,
            "#EXTINF:{},{} - {}",
            rounded_duration(track.duration),
            track.artist,
            track.title
        );
        if absolute_paths {
            let _ = writeln!(out, "{}{}{}", track.library_path, MAIN_SEPARATOR, track.path);
        } else {
            out.push_str(&track.path);
            out.push('\n');
        }
    }

    out
}

/// EXTINF duration: whole seconds, rounding exact halves down.
/// 180.5 -> 180, 240.6 -> 241; never below 0 for non-negative input.
fn rounded_duration(duration: f32) -> u32 {
    (duration - 0.5).ceil().max(0.0) as u32
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rounded duration stays within half a second of the input
        #[test]
        fn rounding_stays_within_half_second(ticks in 0u32..1_000_000) {
            let duration = ticks as f32 * 0.5;
            let rounded = rounded_duration(duration) as f32;
            prop_assert!(rounded >= duration - 0.5);
            prop_assert!(rounded <= duration + 0.5);
        }

        /// Exact halves always round down
        #[test]
        fn exact_halves_round_down(whole in 0u32..100_000) {
            let duration = whole as f32 + 0.5;
            prop_assert_eq!(rounded_duration(duration), whole);
        }

        /// Output line count is two header lines plus two per track
        #[test]
        fn line_count_tracks_input(n in 0usize..50) {
            let tracks: Vec<Track> = (0..n)
                .map(|i| Track {
                    title: format!("T{i}"),
                    path: format!("{i}.mp3"),
                    ..Track::default()
                })
                .collect();
            let result = to_m3u8(&tracks, "P", false);
            prop_assert_eq!(result.lines().count(), 2 + n * 2);
        }
    }
}
