// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Types deriving the appropriate serde traits for parsing song JSON from the
//! Eco Iglesia Letras REST backend, and the pure functions that turn a song
//! record into render-ready sections.
//!
//! The renderer works in three steps: [`normalize_sections`] unifies the two
//! input shapes (structured sections vs. a single flat lyric blob) into an
//! ordered list of [`NormalizedSection`]s, each with a resolved display title;
//! [`chord_rows`] groups a chords-over-lyrics text block into paired display
//! rows; sections without chords go through [`plain_lines`] untouched.
//!
//! ```
//! use cancionero::{chord_rows, normalize_sections, types::Song};
//!
//! let song: Song = serde_json::from_str(r#"{
//!     "title": "Grande es tu fidelidad",
//!     "lyrics": "Oh Dios eterno, tu misericordia",
//!     "chords_lyrics": "C       G\nOh Dios eterno, tu misericordia"
//! }"#)?;
//! for section in normalize_sections(&song) {
//!     println!("{}:", section.title);
//!     for row in chord_rows(&section.chords_lyrics) {
//!         println!("{}\n{}", row.chord_line, row.lyric_line);
//!     }
//! }
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod types;

use crate::types::Song;

/// The fixed vocabulary of section type tags, with a default branch for free
/// text so that unknown tags still render.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SectionType {
    Intro,
    Verso,
    Precoro,
    Coro,
    Puente,
    Repetir,
    Refrain,
    Final,
    Instrumental,
    Solo,
    /// Synthesized for the flat-lyrics fallback; not a tag the backend emits
    /// inside `sections`.
    Letra,
    Other(String),
}

impl SectionType {
    /// Maps a raw type tag to its variant. Anything outside the fixed
    /// vocabulary is kept as [`SectionType::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "intro" => Self::Intro,
            "verso" => Self::Verso,
            "precoro" => Self::Precoro,
            "coro" => Self::Coro,
            "puente" => Self::Puente,
            "repetir" => Self::Repetir,
            "refrain" => Self::Refrain,
            "final" => Self::Final,
            "instrumental" => Self::Instrumental,
            "solo" => Self::Solo,
            "letra" => Self::Letra,
            _ => Self::Other(tag.to_owned()),
        }
    }

    /// Returns the display heading for a section of this type at the given
    /// position in the section list.
    ///
    /// The labels are the site's existing Spanish UI copy and must match
    /// verbatim. Verses are numbered by halving their position in the overall
    /// list, not by counting prior verses; that is the behaviour the rest of
    /// the site was built around, so it is kept as-is.
    pub fn title(&self, index: usize) -> String {
        match self {
            Self::Intro => "Intro".to_owned(),
            Self::Verso => format!("Verso {}", index / 2 + 1),
            Self::Precoro => "Pre-Coro".to_owned(),
            Self::Coro => "Coro".to_owned(),
            Self::Puente => "Puente".to_owned(),
            Self::Repetir => "Repetir".to_owned(),
            Self::Refrain => "Refrain".to_owned(),
            Self::Final => "Final".to_owned(),
            Self::Instrumental => "Instrumental".to_owned(),
            Self::Solo => "Solo".to_owned(),
            Self::Letra => "Letra".to_owned(),
            Self::Other(tag) => capitalize(tag),
        }
    }

    /// Returns the CSS class used to colour a section of this type.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Intro => "section-intro",
            Self::Verso => "section-verso",
            Self::Precoro => "section-precoro",
            Self::Coro => "section-coro",
            Self::Puente => "section-puente",
            Self::Repetir => "section-repetir",
            Self::Refrain => "section-refrain",
            Self::Final => "section-final",
            Self::Instrumental => "section-instrumental",
            Self::Solo => "section-solo",
            Self::Letra | Self::Other(_) => "section-letra",
        }
    }
}

/// Uppercases the first letter of the given tag, leaving the rest as-is.
fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A render-ready section, unifying the structured and flat input shapes.
///
/// These are recomputed on every render pass and never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedSection {
    pub section_type: SectionType,
    /// Resolved display heading, e.g. `"Verso 2"`.
    pub title: String,
    /// Plain text shown when chords are absent or chord mode is off.
    pub text: String,
    /// Interleavable chord/lyric text, empty if none.
    pub chords_lyrics: String,
    /// Whether `chords_lyrics` is non-empty after trimming. Judged per
    /// section, independent of the rest of the song.
    pub has_chords: bool,
}

/// Produces the ordered list of display sections for a song.
///
/// Structured sections take precedence; a song with only flat `lyrics` yields
/// a single "Letra" section; a song with neither yields an empty list. All
/// missing fields degrade to empty strings, never errors.
pub fn normalize_sections(song: &Song) -> Vec<NormalizedSection> {
    if let Some(sections) = &song.sections
        && !sections.is_empty()
    {
        sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let tag = section
                    .section_type
                    .as_deref()
                    .filter(|tag| !tag.is_empty())
                    .unwrap_or("verso");
                let section_type = SectionType::from_tag(tag);
                let chords_lyrics = section.chords_lyrics.clone().unwrap_or_default();
                NormalizedSection {
                    title: section_type.title(index),
                    section_type,
                    text: section.text.clone().unwrap_or_default(),
                    has_chords: !chords_lyrics.trim().is_empty(),
                    chords_lyrics,
                }
            })
            .collect()
    } else if let Some(lyrics) = &song.lyrics
        && !lyrics.is_empty()
    {
        let chords_lyrics = song.chords_lyrics.clone().unwrap_or_default();
        vec![NormalizedSection {
            section_type: SectionType::Letra,
            title: "Letra".to_owned(),
            text: lyrics.clone(),
            has_chords: !chords_lyrics.trim().is_empty(),
            chords_lyrics,
        }]
    } else {
        Vec::new()
    }
}

/// One display row of a chord sheet: a chord line over a lyric line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChordRow {
    pub chord_line: String,
    pub lyric_line: String,
}

impl ChordRow {
    /// Returns the chord line if it has any visible content. The line is
    /// returned untrimmed so chord symbols keep their horizontal alignment.
    pub fn visible_chord(&self) -> Option<&str> {
        if self.chord_line.trim().is_empty() {
            None
        } else {
            Some(&self.chord_line)
        }
    }

    /// Returns the lyric line if it has any visible content.
    pub fn visible_lyric(&self) -> Option<&str> {
        if self.lyric_line.trim().is_empty() {
            None
        } else {
            Some(&self.lyric_line)
        }
    }
}

/// Groups a chords-over-lyrics text block into paired display rows.
///
/// Lines are assumed to alternate strictly: chord line, lyric line, chord
/// line, ... A trailing unpaired chord line becomes a row with an empty lyric
/// line. No chord-token detection is performed; this is a formatting
/// convention, not a parser of chord symbols.
pub fn chord_rows(text: &str) -> Vec<ChordRow> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .collect::<Vec<_>>()
        .chunks(2)
        .map(|pair| ChordRow {
            chord_line: pair[0].to_owned(),
            lyric_line: pair.get(1).copied().unwrap_or_default().to_owned(),
        })
        .collect()
}

/// Splits plain lyric text into display lines, preserving line breaks exactly
/// as authored, interior blank lines included.
pub fn plain_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SongSection;

    fn section(tag: Option<&str>, text: &str, chords_lyrics: Option<&str>) -> SongSection {
        SongSection {
            section_type: tag.map(str::to_owned),
            text: Some(text.to_owned()),
            chords_lyrics: chords_lyrics.map(str::to_owned),
        }
    }

    #[test]
    fn normalize_empty_song() {
        assert_eq!(normalize_sections(&Song::default()), vec![]);
    }

    #[test]
    fn normalize_flat_lyrics_fallback() {
        let song = Song {
            lyrics: Some("A\nB".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            normalize_sections(&song),
            vec![NormalizedSection {
                section_type: SectionType::Letra,
                title: "Letra".to_owned(),
                text: "A\nB".to_owned(),
                chords_lyrics: String::new(),
                has_chords: false,
            }]
        );
    }

    #[test]
    fn normalize_sections_take_precedence_over_flat_fields() {
        let song = Song {
            lyrics: Some("flat lyrics".to_owned()),
            chords_lyrics: Some("C\nflat lyrics".to_owned()),
            sections: Some(vec![
                section(Some("intro"), "intro text", None),
                section(Some("coro"), "coro text", Some("G\ncoro text")),
            ]),
            ..Default::default()
        };
        let normalized = normalize_sections(&song);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].title, "Intro");
        assert_eq!(normalized[1].title, "Coro");
        assert_eq!(normalized[1].text, "coro text");
    }

    #[test]
    fn normalize_empty_sections_fall_back_to_flat_lyrics() {
        let song = Song {
            lyrics: Some("flat".to_owned()),
            sections: Some(vec![]),
            ..Default::default()
        };
        let normalized = normalize_sections(&song);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].section_type, SectionType::Letra);
    }

    #[test]
    fn normalize_missing_type_defaults_to_verso() {
        let song = Song {
            sections: Some(vec![section(None, "text", None), section(Some(""), "", None)]),
            ..Default::default()
        };
        let normalized = normalize_sections(&song);
        assert_eq!(normalized[0].section_type, SectionType::Verso);
        assert_eq!(normalized[1].section_type, SectionType::Verso);
    }

    #[test]
    fn has_chords_is_judged_per_section() {
        let song = Song {
            sections: Some(vec![
                section(Some("verso"), "a", Some("C\na")),
                section(Some("coro"), "b", None),
                section(Some("puente"), "c", Some("   \n  ")),
            ]),
            ..Default::default()
        };
        let normalized = normalize_sections(&song);
        assert_eq!(
            normalized
                .iter()
                .map(|section| section.has_chords)
                .collect::<Vec<_>>(),
            vec![true, false, false]
        );
    }

    #[test]
    fn verso_titles_halve_the_index() {
        assert_eq!(SectionType::from_tag("verso").title(0), "Verso 1");
        assert_eq!(SectionType::from_tag("verso").title(1), "Verso 1");
        assert_eq!(SectionType::from_tag("verso").title(2), "Verso 2");
        assert_eq!(SectionType::from_tag("verso").title(3), "Verso 2");
        assert_eq!(SectionType::from_tag("verso").title(4), "Verso 3");
    }

    #[test]
    fn fixed_titles_ignore_the_index() {
        assert_eq!(SectionType::from_tag("intro").title(3), "Intro");
        assert_eq!(SectionType::from_tag("precoro").title(0), "Pre-Coro");
        assert_eq!(SectionType::from_tag("coro").title(7), "Coro");
        assert_eq!(SectionType::from_tag("final").title(1), "Final");
    }

    #[test]
    fn unknown_types_are_capitalized_as_is() {
        assert_eq!(SectionType::from_tag("bridge2").title(0), "Bridge2");
        assert_eq!(SectionType::from_tag("éxodo").title(0), "Éxodo");
        assert_eq!(SectionType::from_tag("x").title(5), "X");
    }

    #[test]
    fn chord_rows_pairs_alternating_lines() {
        assert_eq!(
            chord_rows("C\nHello\nG\nWorld"),
            vec![
                ChordRow {
                    chord_line: "C".to_owned(),
                    lyric_line: "Hello".to_owned(),
                },
                ChordRow {
                    chord_line: "G".to_owned(),
                    lyric_line: "World".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn chord_rows_keeps_a_trailing_unpaired_chord_line() {
        assert_eq!(
            chord_rows("C\nHello\nG"),
            vec![
                ChordRow {
                    chord_line: "C".to_owned(),
                    lyric_line: "Hello".to_owned(),
                },
                ChordRow {
                    chord_line: "G".to_owned(),
                    lyric_line: String::new(),
                },
            ]
        );
    }

    #[test]
    fn chord_rows_empty_input() {
        assert_eq!(chord_rows(""), vec![]);
    }

    #[test]
    fn chord_rows_whitespace_lines_still_pair() {
        // Whitespace-only lines count for pairing but render as empty.
        let rows = chord_rows("  \n \n ");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].visible_chord(), None);
        assert_eq!(rows[0].visible_lyric(), None);
        assert_eq!(rows[1].chord_line, " ");
        assert_eq!(rows[1].lyric_line, "");
    }

    #[test]
    fn visible_chord_is_not_trimmed() {
        let row = ChordRow {
            chord_line: "    C   G7".to_owned(),
            lyric_line: "Santo, santo".to_owned(),
        };
        assert_eq!(row.visible_chord(), Some("    C   G7"));
        assert_eq!(row.visible_lyric(), Some("Santo, santo"));
    }

    #[test]
    fn plain_lines_preserves_interior_blank_lines() {
        assert_eq!(plain_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn song_parses_from_backend_json() {
        let song: Song = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Tal Como Soy",
                "slug": "tal-como-soy",
                "artist": {"id": 2, "name": "Marcos Vidal", "slug": "marcos-vidal", "verified": true},
                "key_signature": "D",
                "tempo": "72 BPM",
                "lyrics": "Tal como soy",
                "chords_lyrics": null,
                "sections": [
                    {"type": "verso", "text": "Tal como soy", "chords_lyrics": "D  A\nTal como soy"},
                    {"type": "coro", "text": "Vengo a ti"}
                ],
                "views": 120,
                "likes_count": 4
            }"#,
        )
        .unwrap();
        assert_eq!(song.artist.as_ref().unwrap().name, "Marcos Vidal");
        let normalized = normalize_sections(&song);
        assert_eq!(normalized.len(), 2);
        assert!(normalized[0].has_chords);
        assert!(!normalized[1].has_chords);
    }
}
