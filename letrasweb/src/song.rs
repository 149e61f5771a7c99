// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{
    api,
    model::{KeyView, default_show_chords, song_stats_label, step_key},
    section::Section,
};
use cancionero::{
    normalize_sections,
    types::{KeyOption, Song},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_params_map;

/// The song detail page: metadata header, key controls and the rendered
/// sections.
#[component]
pub fn SongPage() -> impl IntoView {
    let params = use_params_map();
    let (song, write_song) = signal(None::<Song>);
    let (keys, write_keys) = signal(Vec::<KeyOption>::new());
    let (key_view, write_key_view) = signal(KeyView::default());
    let (show_chords, write_show_chords) = signal(false);
    let (error, write_error) = signal(None::<String>);

    spawn_local(load_keys(write_keys));
    Effect::new(move |_| {
        if let Some(slug) = params.read().get("slug") {
            spawn_local(load_song(
                slug,
                write_song,
                write_key_view,
                write_show_chords,
                write_error,
            ));
        }
    });

    view! {
        <div class="song-page">
            <p id="error">{error}</p>
            {move || {
                let song = song.read();
                let song = song.as_ref()?;
                let sections = normalize_sections(song);
                Some(view! {
                    <header class="song-header">
                        <h1>{song.title.clone()}</h1>
                        {song.artist.as_ref().map(|artist| view! {
                            <p class="artist">{artist.name.clone()}</p>
                        })}
                        <p class="meta">
                            {song.genre.as_ref().map(|genre| view! {
                                <span class="genre">{genre.clone()}</span>
                            })}
                            {song.tempo.as_ref().map(|tempo| view! {
                                <span class="tempo">{tempo.clone()}</span>
                            })}
                            {song.key_signature.as_ref().map(|key| view! {
                                <span class="key">{format!("Tono: {key}")}</span>
                            })}
                            <span class="stats">{song_stats_label(song)}</span>
                        </p>
                    </header>
                    <KeyControls
                        song_id=song.id
                        original_key=song.key_signature.clone()
                        keys
                        key_view
                        write_key_view
                        show_chords
                        write_show_chords
                    />
                    <div class="sections">
                        {sections.into_iter().map(|section| view! {
                            <Section section key_view=key_view show_chords=show_chords/>
                        }).collect::<Vec<_>>()}
                    </div>
                })
            }}
        </div>
    }
}

/// Chord mode toggle and the key selector with semitone step buttons. The
/// selector is only shown for songs with a stored key.
#[component]
fn KeyControls(
    song_id: u64,
    original_key: Option<String>,
    keys: ReadSignal<Vec<KeyOption>>,
    key_view: ReadSignal<KeyView>,
    write_key_view: WriteSignal<KeyView>,
    show_chords: ReadSignal<bool>,
    write_show_chords: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="key-controls">
            <input type="button"
                value=move || if show_chords.get() { "Solo letra" } else { "Ver acordes" }
                on:click=move |_| write_show_chords.update(|show| *show = !*show) />
            {original_key.map(|original| {
                let original_for_select = original.clone();
                let original_for_flat = original.clone();
                let original_for_sharp = original;
                view! {
                    <span class="key-label">"Tono:"</span>
                    <input type="button" value="♭"
                        on:click=move |_| step_and_request(song_id, original_for_flat.clone(), keys, key_view, write_key_view, -1) />
                    <select
                        prop:value=move || key_view.get().current_key.unwrap_or_default()
                        on:change:target=move |event| request_key(song_id, original_for_select.clone(), event.target().value(), write_key_view)>
                        {move || keys.get().iter().map(|key| view! {
                            <option value={key.value.clone()}>{key.label.clone()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                    <input type="button" value="♯"
                        on:click=move |_| step_and_request(song_id, original_for_sharp.clone(), keys, key_view, write_key_view, 1) />
                    <input type="button" value="Original"
                        disabled=move || !key_view.get().is_transposed()
                        on:click=move |_| write_key_view.update(KeyView::reset) />
                }
            })}
        </div>
    }
}

async fn load_keys(write_keys: WriteSignal<Vec<KeyOption>>) {
    match api::fetch_available_keys().await {
        Ok(keys) => write_keys.set(keys),
        Err(e) => gloo_console::error!(format!("No se pudieron cargar las tonalidades: {e}")),
    }
}

async fn load_song(
    slug: String,
    write_song: WriteSignal<Option<Song>>,
    write_key_view: WriteSignal<KeyView>,
    write_show_chords: WriteSignal<bool>,
    write_error: WriteSignal<Option<String>>,
) {
    match api::fetch_song(&slug).await {
        Ok(song) => {
            write_error.set(None);
            write_key_view.set(KeyView::for_song(&song));
            write_show_chords.set(default_show_chords(&normalize_sections(&song)));
            write_song.set(Some(song));
        }
        Err(e) => write_error.set(Some(e.to_string())),
    }
}

/// Requests the key `offset` steps from the current one in the available key
/// list.
fn step_and_request(
    song_id: u64,
    original_key: String,
    keys: ReadSignal<Vec<KeyOption>>,
    key_view: ReadSignal<KeyView>,
    write_key_view: WriteSignal<KeyView>,
    offset: isize,
) {
    let Some(current) = key_view.read_untracked().current_key.clone() else {
        return;
    };
    let keys = keys.read_untracked();
    let Some(target) = step_key(&keys, &current, offset) else {
        return;
    };
    request_key(song_id, original_key, target.value.clone(), write_key_view);
}

fn request_key(
    song_id: u64,
    original_key: String,
    target_key: String,
    write_key_view: WriteSignal<KeyView>,
) {
    spawn_local(change_key(song_id, original_key, target_key, write_key_view));
}

async fn change_key(
    song_id: u64,
    original_key: String,
    target_key: String,
    write_key_view: WriteSignal<KeyView>,
) {
    // Going back to the song's own key needs no server round trip.
    if target_key == original_key {
        write_key_view.update(KeyView::reset);
        return;
    }
    match api::transpose_song(song_id, &target_key).await {
        Ok(content) => write_key_view.update(|view| {
            view.apply_transposition(&target_key, content.chords_lyrics);
        }),
        // The page keeps showing the previous key and the stored chords.
        Err(e) => gloo_console::error!(format!("No se pudo transportar a {target_key}: {e}")),
    }
}
