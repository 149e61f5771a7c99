// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

mod api;
mod model;
mod section;
mod song;
mod songlist;

use crate::{song::SongPage, songlist::SongList};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "No encontrado">
                <Route path=path!("/") view=SongList/>
                <Route path=path!("/canciones/:slug") view=SongPage/>
            </Routes>
        </Router>
    }
}
