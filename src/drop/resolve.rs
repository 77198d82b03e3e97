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

//! Drop planning.
//!
//! This module decides what a batch of dropped files means to the player and
//! in which order the resulting commands must be applied. Nothing is executed
//! here, the output is a plan for the [`sequencer`](crate::player::sequencer).
//!
//! # Rules
//!
//! * A batch made up entirely of subtitle files is attached to the current
//!   media, one subtitle per file, whatever the drop action.
//! * Otherwise every file is loaded into the playlist. Only the first file of
//!   the batch ever starts playback, so the user's first pick is what plays.

use std::fmt;

use crate::drop::{DropAction, subtitle::SubtitleClassifier};

/// How a loaded file joins the playlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayMode {
    /// Stop current playback and play this file.
    Replace,
    /// Append to the playlist, starting playback if nothing is playing.
    AppendPlay,
    /// Insert after the current entry without starting playback.
    InsertNextQueue,
    /// Insert after the current entry and start playback if idle.
    InsertNextPlay,
}

impl PlayMode {
    /// The token the player understands for this mode.
    pub fn token(self) -> &'static str {
        match self {
            PlayMode::Replace => "replace",
            PlayMode::AppendPlay => "append-play",
            PlayMode::InsertNextQueue => "insert-next",
            PlayMode::InsertNextPlay => "insert-next-play",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single step of a resolved drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannedCommand<'a> {
    AttachSubtitle(&'a str),
    LoadFile(&'a str, PlayMode),
}

impl<'a> PlannedCommand<'a> {
    /// The file reference this step acts on.
    pub fn file(&self) -> &'a str {
        match *self {
            PlannedCommand::AttachSubtitle(file) => file,
            PlannedCommand::LoadFile(file, _) => file,
        }
    }
}

/// Plans the commands for one drop event.
///
/// The returned plan must be applied strictly in order. For
/// [`DropAction::InsertNext`] the files are planned last to first, each one
/// inserted directly after the current entry, which leaves them in their
/// original order in the playlist. Playback is held back until the final
/// insertion.
pub fn resolve<'a, S, C>(batch: &'a [S], action: DropAction, classifier: &C) -> Vec<PlannedCommand<'a>>
where
    S: AsRef<str>,
    C: SubtitleClassifier + ?Sized,
{
    if batch.is_empty() {
        return Vec::new();
    }

    // All or nothing, a single media file means the subtitles are loaded as
    // playlist entries along with it
    let all_subtitles = batch
        .iter()
        .all(|file| classifier.is_probable_subtitle(file.as_ref()));

    if all_subtitles {
        return batch
            .iter()
            .map(|file| PlannedCommand::AttachSubtitle(file.as_ref()))
            .collect();
    }

    match action {
        DropAction::InsertNext => batch
            .iter()
            .enumerate()
            .rev()
            .map(|(i, file)| {
                let mode = if i > 0 {
                    PlayMode::InsertNextQueue
                } else {
                    PlayMode::InsertNextPlay
                };
                PlannedCommand::LoadFile(file.as_ref(), mode)
            })
            .collect(),

        DropAction::Replace | DropAction::AppendPlay => batch
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let mode = if i == 0 && action == DropAction::Replace {
                    PlayMode::Replace
                } else {
                    PlayMode::AppendPlay
                };
                PlannedCommand::LoadFile(file.as_ref(), mode)
            })
            .collect(),
    }
}
