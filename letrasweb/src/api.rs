// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! REST client for the Eco Iglesia Letras backend.

use cancionero::types::{KeyOption, Song, TransposedContent};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Base path under which the backend is served.
pub const API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("error de red: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("el servidor respondió {0}")]
    Status(u16),
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&format!("{API_BASE}{path}")).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}

/// Fetches the full song list.
pub async fn fetch_songs() -> Result<Vec<Song>, ApiError> {
    get_json("/songs/").await
}

/// Fetches a single song by its slug.
pub async fn fetch_song(slug: &str) -> Result<Song, ApiError> {
    get_json(&format!("/songs/{slug}")).await
}

/// Fetches the ordered list of selectable musical keys.
pub async fn fetch_available_keys() -> Result<Vec<KeyOption>, ApiError> {
    get_json("/songs/keys/available").await
}

/// Asks the backend to transpose the song's chords to the given target key.
pub async fn transpose_song(song_id: u64, target_key: &str) -> Result<TransposedContent, ApiError> {
    let response = Request::post(&format!("{API_BASE}/songs/{song_id}/transpose"))
        .query([("target_key", target_key)])
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}
