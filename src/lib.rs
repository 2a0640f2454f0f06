//! Trackfold - album aggregation and playlist export for music libraries.
//!
//! This crate is the pure model core of a music server: it reconciles the
//! per-track metadata of an album into one coherent [`Album`] record and
//! serializes track lists into portable M3U8 playlist text. Everything here
//! is a synchronous, side-effect-free function of its inputs; scanning,
//! tag extraction, persistence, and serving live in the host system.
//!
//! - [`aggregate::to_album`] reduces tracks into an album using explicit
//!   consensus, frequency, and tie-break rules.
//! - [`playlist::to_m3u8`] produces byte-exact playlist text.
//! - [`cover::cover_art_id`] picks the artwork identity for a track.

pub mod aggregate;
pub mod cover;
pub mod model;
pub mod playlist;
#[cfg(test)]
pub mod test_utils;

pub use aggregate::to_album;
pub use cover::{ArtworkId, ArtworkKind, cover_art_id};
pub use model::{Album, Track};
pub use playlist::to_m3u8;
