// Copyright 2026 The cancionero Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use cancionero::{chord_rows, normalize_sections, plain_lines, types::Song};
use clap::Parser;
use eyre::Report;
use log::debug;
use std::{fs::File, io::BufReader, path::PathBuf};

fn main() -> Result<(), Report> {
    pretty_env_logger::init();

    match Args::parse() {
        Args::Print { path, chords } => {
            debug!("Reading song from {}", path.display());
            let song: Song = serde_json::from_reader(BufReader::new(File::open(path)?))?;
            print_header(&song);
            print_sections(&song, chords);
        }
    }

    Ok(())
}

#[derive(Clone, Debug, Parser)]
enum Args {
    /// Print the lyrics from the given song JSON file to standard output.
    Print {
        path: PathBuf,
        /// Print chord lines interleaved with the lyrics where available.
        #[arg(long)]
        chords: bool,
    },
}

fn print_header(song: &Song) {
    println!("= {} =", song.title);
    if let Some(artist) = &song.artist {
        println!("Artista: {}", artist.name);
    }
    if let Some(key) = &song.key_signature {
        println!("Tono: {key}");
    }
    if let Some(tempo) = &song.tempo {
        println!("Tempo: {tempo}");
    }
}

fn print_sections(song: &Song, chords: bool) {
    for section in normalize_sections(song) {
        println!();
        println!("{}:", section.title);
        if chords && section.has_chords {
            for row in chord_rows(&section.chords_lyrics) {
                if let Some(chord) = row.visible_chord() {
                    println!("{chord}");
                }
                if let Some(lyric) = row.visible_lyric() {
                    println!("{lyric}");
                }
            }
        } else {
            for line in plain_lines(&section.text) {
                println!("{line}");
            }
        }
    }
}
