// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use cancionero::{
    NormalizedSection,
    types::{KeyOption, Song},
};

/// The key a song page is currently displayed in, together with the
/// server-supplied replacement content for that key.
///
/// This is page-level state scoped to the view: there is a single transposed
/// blob applied uniformly to every section rendered in chord mode, not one
/// per section.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeyView {
    /// The song's stored key.
    pub original_key: Option<String>,
    /// The key the user is viewing the song in.
    pub current_key: Option<String>,
    /// Transposed chords/lyrics for `current_key`, fetched from the backend.
    pub transposed: Option<String>,
}

impl KeyView {
    /// The initial view for a freshly loaded song: its own key, untransposed.
    pub fn for_song(song: &Song) -> Self {
        Self {
            original_key: song.key_signature.clone(),
            current_key: song.key_signature.clone(),
            transposed: None,
        }
    }

    /// Whether the user is viewing a key other than the song's stored one.
    pub fn is_transposed(&self) -> bool {
        self.current_key != self.original_key
    }

    /// Returns the chords/lyrics text to render for the given section: the
    /// transposed replacement when one is in effect, otherwise the section's
    /// own stored text.
    pub fn content_for<'a>(&'a self, section: &'a NormalizedSection) -> &'a str {
        if self.is_transposed()
            && let Some(transposed) = &self.transposed
        {
            transposed
        } else {
            &section.chords_lyrics
        }
    }

    /// Records a completed transposition to the given key.
    pub fn apply_transposition(&mut self, target_key: &str, chords_lyrics: String) {
        if self.original_key.as_deref() == Some(target_key) {
            self.reset();
        } else {
            self.current_key = Some(target_key.to_owned());
            self.transposed = Some(chords_lyrics);
        }
    }

    /// Returns to the song's own key, dropping any transposed content.
    pub fn reset(&mut self) {
        self.current_key = self.original_key.clone();
        self.transposed = None;
    }
}

/// Returns the key `offset` steps away from `current` in the ordered list of
/// available keys, wrapping around the ends.
pub fn step_key<'a>(keys: &'a [KeyOption], current: &str, offset: isize) -> Option<&'a KeyOption> {
    let position = keys.iter().position(|key| key.value == current)?;
    let stepped = (position as isize + offset).rem_euclid(keys.len() as isize);
    keys.get(stepped as usize)
}

/// Whether the song page should open in chord mode: true iff any section has
/// chords. Recomputed whenever the song changes, never persisted.
pub fn default_show_chords(sections: &[NormalizedSection]) -> bool {
    sections.iter().any(|section| section.has_chords)
}

/// Returns the song's views and likes counters formatted for display.
pub fn song_stats_label(song: &Song) -> String {
    format!("{} visitas, {} me gusta", song.views, song.likes_count)
}

/// Returns whether the given song should be displayed when the given search
/// filter is entered.
pub fn song_matches_filter(song: &Song, filter: &str) -> bool {
    let filter = filter.to_lowercase();
    song.title.to_lowercase().contains(&filter)
        || song
            .artist
            .as_ref()
            .is_some_and(|artist| artist.name.to_lowercase().contains(&filter))
        || song
            .genre
            .as_ref()
            .is_some_and(|genre| genre.to_lowercase().contains(&filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cancionero::normalize_sections;
    use cancionero::types::SongSection;

    fn keys(values: &[&str]) -> Vec<KeyOption> {
        values
            .iter()
            .map(|value| KeyOption {
                value: (*value).to_owned(),
                label: (*value).to_owned(),
            })
            .collect()
    }

    fn chord_song(key: &str, chords_lyrics: &str) -> Song {
        Song {
            key_signature: Some(key.to_owned()),
            sections: Some(vec![SongSection {
                section_type: Some("verso".to_owned()),
                text: Some("Hi".to_owned()),
                chords_lyrics: Some(chords_lyrics.to_owned()),
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn content_falls_back_when_transposition_is_missing() {
        let song = chord_song("C", "C\nHi");
        let section = normalize_sections(&song).remove(0);
        // A failed transposition request leaves `transposed` unset even if
        // the current key differs; the section's own content must win.
        let view = KeyView {
            original_key: Some("C".to_owned()),
            current_key: Some("D".to_owned()),
            transposed: None,
        };
        assert_eq!(view.content_for(&section), "C\nHi");
    }

    #[test]
    fn content_substitutes_transposed_text() {
        let song = chord_song("C", "C\nHi");
        let section = normalize_sections(&song).remove(0);
        let mut view = KeyView::for_song(&song);
        assert!(!view.is_transposed());
        assert_eq!(view.content_for(&section), "C\nHi");

        view.apply_transposition("D", "D\nHi".to_owned());
        assert!(view.is_transposed());
        assert_eq!(view.current_key.as_deref(), Some("D"));
        assert_eq!(view.content_for(&section), "D\nHi");
    }

    #[test]
    fn transposing_back_to_the_original_key_resets() {
        let song = chord_song("C", "C\nHi");
        let mut view = KeyView::for_song(&song);
        view.apply_transposition("D", "D\nHi".to_owned());
        view.apply_transposition("C", "C again\nHi".to_owned());
        assert_eq!(view, KeyView::for_song(&song));
    }

    #[test]
    fn step_key_wraps_around() {
        let keys = keys(&["C", "D", "E"]);
        assert_eq!(step_key(&keys, "C", 1).unwrap().value, "D");
        assert_eq!(step_key(&keys, "E", 1).unwrap().value, "C");
        assert_eq!(step_key(&keys, "C", -1).unwrap().value, "E");
        assert_eq!(step_key(&keys, "F#", 1), None);
        assert_eq!(step_key(&[], "C", 1), None);
    }

    #[test]
    fn chord_mode_defaults_from_content() {
        let with_chords = normalize_sections(&chord_song("C", "C\nHi"));
        assert!(default_show_chords(&with_chords));

        let without = normalize_sections(&Song {
            lyrics: Some("only words".to_owned()),
            ..Default::default()
        });
        assert!(!default_show_chords(&without));
        assert!(!default_show_chords(&[]));
    }

    #[test]
    fn stats_label_shows_views_and_likes() {
        let song = Song {
            views: 120,
            likes_count: 4,
            ..Default::default()
        };
        assert_eq!(song_stats_label(&song), "120 visitas, 4 me gusta");
        assert_eq!(song_stats_label(&Song::default()), "0 visitas, 0 me gusta");
    }

    #[test]
    fn filter_matches_title_artist_and_genre() {
        let song = Song {
            title: "Renuévame".to_owned(),
            artist: Some(cancionero::types::ArtistSummary {
                name: "Marcos Witt".to_owned(),
                ..Default::default()
            }),
            genre: Some("Adoración".to_owned()),
            ..Default::default()
        };
        assert!(song_matches_filter(&song, "renué"));
        assert!(song_matches_filter(&song, "witt"));
        assert!(song_matches_filter(&song, "adoración"));
        assert!(song_matches_filter(&song, ""));
        assert!(!song_matches_filter(&song, "navidad"));
    }
}
