// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{api, model::song_matches_filter};
use cancionero::types::Song;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

/// List of all available songs, filterable by title, artist or genre.
#[component]
pub fn SongList() -> impl IntoView {
    let (songs, write_songs) = signal(Vec::<Song>::new());
    let (filter, write_filter) = signal(String::new());
    let (error, write_error) = signal(None::<String>);

    spawn_local(load_songs(write_songs, write_error));

    view! {
        <div class="song-list-page">
            <h1>"Canciones"</h1>
            <input type="search" placeholder="Buscar por título, artista o género"
                on:input:target=move |event| write_filter.set(event.target().value()) />
            <p id="error">{error}</p>
            <ul class="song-list">
                {move || {
                    let filter = filter.read();
                    songs.read().iter()
                        .filter(|song| song_matches_filter(song, &filter))
                        .map(|song| {
                            let label = if let Some(artist) = &song.artist {
                                format!("{} - {}", song.title, artist.name)
                            } else {
                                song.title.clone()
                            };
                            view! {
                                <li><A href=format!("/canciones/{}", song.slug)>{label}</A></li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

async fn load_songs(
    write_songs: WriteSignal<Vec<Song>>,
    write_error: WriteSignal<Option<String>>,
) {
    match api::fetch_songs().await {
        Ok(songs) => {
            write_error.set(None);
            write_songs.set(songs);
        }
        Err(e) => write_error.set(Some(e.to_string())),
    }
}
