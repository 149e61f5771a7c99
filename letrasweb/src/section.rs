// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::model::KeyView;
use cancionero::{NormalizedSection, chord_rows, plain_lines};
use leptos::prelude::*;

/// One song section: its heading plus either paired chord/lyric rows or the
/// plain lyric text.
#[component]
pub fn Section(
    section: NormalizedSection,
    #[prop(into)] key_view: Signal<KeyView>,
    #[prop(into)] show_chords: Signal<bool>,
) -> impl IntoView {
    move || {
        let body = if show_chords.get() && section.has_chords {
            let key_view = key_view.read();
            chords_view(key_view.content_for(&section)).into_any()
        } else {
            plain_view(&section.text).into_any()
        };
        view! {
            <section class=section.section_type.css_class()>
                <h2>{section.title.clone()}</h2>
                {body}
            </section>
        }
    }
}

fn chords_view(content: &str) -> impl IntoView {
    view! {
        <div class="chords-lyrics">
            {chord_rows(content).into_iter().map(|row| view! {
                <div class="chord-row">
                    {row.visible_chord().map(|chord| view! {
                        <pre class="chord-line">{chord.to_owned()}</pre>
                    })}
                    {row.visible_lyric().map(|lyric| view! {
                        <p class="lyric-line">{lyric.to_owned()}</p>
                    })}
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

fn plain_view(text: &str) -> impl IntoView {
    view! {
        <p class="lyrics">
            {plain_lines(text).into_iter().map(|line| view! {
                {line.to_owned()}<br/>
            }).collect::<Vec<_>>()}
        </p>
    }
}
