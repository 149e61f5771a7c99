// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use serde::{Deserialize, Serialize};

/// A song as returned by the Eco Iglesia Letras REST backend.
///
/// Every field the renderer touches is optional or defaulted: the backend has
/// gone through several schema revisions and older records may be missing any
/// of them.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Song {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<ArtistSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_signature: Option<String>,
    /// Flat lyric text, used only when `sections` is absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    /// Alternating chord/lyric text paired with the flat `lyrics` fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chords_lyrics: Option<String>,
    /// Structured sections; when non-empty these take precedence over the
    /// flat fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SongSection>>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes_count: u64,
}

/// The artist summary embedded in song responses.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ArtistSummary {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub verified: bool,
}

/// One structural unit of a song (verse, chorus, bridge, ...).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SongSection {
    /// Section type tag. The backend uses a fixed vocabulary but free text is
    /// tolerated; see [`SectionType`](crate::SectionType).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
    /// Plain lyric text for this section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Alternating chord/lyric text for this section, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chords_lyrics: Option<String>,
}

/// A selectable musical key from `GET /songs/keys/available`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct KeyOption {
    pub value: String,
    pub label: String,
}

/// Response body of `POST /songs/{id}/transpose`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TransposedContent {
    #[serde(default)]
    pub chords_lyrics: String,
}
