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

//! Embedded MPV command execution.
//!
//! This module runs player commands against a `libmpv` context owned by the
//! calling thread. Commands are passed through unchanged, `libmpv` blocks
//! until each one has been applied, which is exactly the ordering guarantee
//! the drop sequencer relies on.

use anyhow::{Context, Result};
use log::debug;

use crate::player::{CommandExecutor, format_command};

/// A [`CommandExecutor`] backed by an embedded MPV player.
pub struct MpvExecutor {
    handler: mpv::MpvHandler,
}

impl MpvExecutor {
    /// Creates and initialises a new MPV context.
    ///
    /// # Arguments
    ///
    /// * `audio_only` - Disable video output, as for a music player.
    ///
    /// # Errors
    ///
    /// Returns an error if the MPV context cannot be created or configured.
    pub fn new(audio_only: bool) -> Result<Self> {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("input-default-bindings", true)
            .context("Failed to enable default key bindings")?;
        builder
            .set_option("input-vo-keyboard", true)
            .context("Failed to enable keyboard input")?;
        builder
            .set_option("osc", true)
            .context("Failed to enable on screen controller")?;
        if audio_only {
            builder
                .set_option("vo", "null")
                .context("Failed to set no video output")?;
        }
        let handler = builder.build().context("Failed to build MPV handler")?;

        Ok(Self { handler })
    }

    /// Runs the MPV event loop until playback is over.
    ///
    /// Playback is over once the player goes idle after having started at
    /// least one file, or when the player shuts down (for example because the
    /// user closed the window).
    pub fn wait_until_finished(&mut self) -> Result<()> {
        let mut started = false;

        loop {
            match self.handler.wait_event(-1.0) {
                Some(mpv::Event::StartFile) => {
                    started = true;
                }
                Some(mpv::Event::Idle) if started => {
                    debug!("MPV is idle, playback finished");
                    return Ok(());
                }
                Some(mpv::Event::Shutdown) => {
                    debug!("MPV shut down");
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}

impl CommandExecutor for MpvExecutor {
    fn run_command(&mut self, args: &[&str]) -> Result<()> {
        self.handler
            .command(args)
            .with_context(|| format!("MPV rejected command: {}", format_command(args)))
    }
}
