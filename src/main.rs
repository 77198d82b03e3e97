// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! # MPV drop helper.
//!
//! Feeds files, or a raw drag-and-drop payload read from standard input, to
//! MPV as if they had been dropped onto the player window.
//!
//! By default the resulting commands are printed in MPV's input command
//! syntax, so they can be inspected or piped to a running player. Built with
//! the `mpv` feature, `--play` sends them to an embedded player instead and
//! waits for playback to finish.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use mpvdrop::{
    CommandExecutor, DropAction, DropError, PrintExecutor, config, drop_files, drop_mime_data,
};

/// Drop files onto MPV from the command line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Files or URLs to drop, ignored when --mime is given
    files: Vec<String>,

    /// How dropped files join the playlist: replace, append-play or insert-next
    #[arg(short, long)]
    action: Option<DropAction>,

    /// Read a raw drop payload of this MIME type from standard input
    #[arg(short, long, value_name = "TYPE")]
    mime: Option<String>,

    /// Play the dropped files in an embedded MPV instead of printing commands
    #[cfg(feature = "mpv")]
    #[arg(long)]
    play: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// The entry point of the application.
fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = config::load_config();
    let action = args.action.unwrap_or(config.default_action);

    #[cfg(feature = "mpv")]
    if args.play {
        let mut executor = mpvdrop::player::MpvExecutor::new(config.audio_only)
            .context("Failed to initialise MPV")?;
        run(&mut executor, &config, &args, action)?;
        return executor.wait_until_finished();
    }

    let mut executor = PrintExecutor::new(io::stdout().lock());
    run(&mut executor, &config, &args, action)
}

/// Performs the drop described by the command line arguments.
///
/// # Errors
///
/// Returns an error if standard input cannot be read, if the payload MIME type
/// is not supported, or if the executor fails a command.
fn run<E: CommandExecutor>(
    executor: &mut E,
    config: &config::AppConfig,
    args: &Args,
    action: DropAction,
) -> Result<()> {
    let classifier = config.classifier();

    match &args.mime {
        Some(mime_type) => {
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .context("Failed to read drop payload")?;

            match drop_mime_data(executor, &classifier, mime_type, &data, action) {
                Ok(0) => log::warn!("No files found in drop payload"),
                Ok(count) => log::info!("Dropped {} file(s) from payload", count),
                Err(e @ DropError::UnsupportedMimeType(_)) => return Err(e.into()),
                Err(e) => return Err(e).context("Failed to drop payload"),
            }
        }
        None => {
            drop_files(executor, &classifier, &args.files, action)
                .context("Failed to drop files")?;
        }
    }

    Ok(())
}

/// Sets up `env_logger`, honouring `RUST_LOG` when it is set.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
