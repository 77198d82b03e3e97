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

//! Drag-and-drop and paste handling.
//!
//! This module turns a drop event into player commands. A drop either arrives
//! as a list of files, or as a raw payload with a declared MIME type that is
//! parsed into a list of files first.
//!
//! # Sub-modules
//!
//! * [`mime`]: Acceptability of the content types a drop source may offer.
//! * [`parse`]: Extraction of file references from a text payload.
//! * [`subtitle`]: Detection of subtitle files.
//! * [`resolve`]: Planning of the commands for a batch of files.

pub mod mime;
pub mod parse;
pub mod resolve;
pub mod subtitle;

use std::{fmt, str::FromStr};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    drop::subtitle::SubtitleClassifier,
    player::{CommandExecutor, sequencer},
};

/// What the user wants done with the dropped files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropAction {
    /// Replace whatever is playing with the dropped files.
    #[default]
    Replace,
    /// Append to the playlist and start playing if idle.
    AppendPlay,
    /// Insert directly after the current playlist entry.
    InsertNext,
}

impl DropAction {
    pub fn as_str(self) -> &'static str {
        match self {
            DropAction::Replace => "replace",
            DropAction::AppendPlay => "append-play",
            DropAction::InsertNext => "insert-next",
        }
    }
}

impl fmt::Display for DropAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown drop action '{0}', expected replace, append-play or insert-next")]
pub struct ParseDropActionError(String);

impl FromStr for DropAction {
    type Err = ParseDropActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(DropAction::Replace),
            "append-play" => Ok(DropAction::AppendPlay),
            "insert-next" => Ok(DropAction::InsertNext),
            _ => Err(ParseDropActionError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum DropError {
    /// The payload's content type is not a file list format.
    #[error("unsupported MIME type for drop: {0}")]
    UnsupportedMimeType(String),

    /// The command executor rejected a command, later commands were not sent.
    #[error(transparent)]
    Executor(#[from] anyhow::Error),
}

/// Handles a drop of files.
///
/// The files are planned according to `action` and the resulting commands are
/// issued to `executor` one at a time, in order.
///
/// # Errors
///
/// Returns [`DropError::Executor`] if the executor fails a command.
pub fn drop_files<E, C, S>(
    executor: &mut E,
    classifier: &C,
    files: &[S],
    action: DropAction,
) -> Result<(), DropError>
where
    E: CommandExecutor + ?Sized,
    C: SubtitleClassifier + ?Sized,
    S: AsRef<str>,
{
    let plan = resolve::resolve(files, action, classifier);

    info!("Dropped {} file(s) with action {}", files.len(), action);

    sequencer::issue(executor, &plan)
}

/// Handles a drop of raw data with the given MIME type.
///
/// Returns the number of file references found in the payload. Zero means
/// the payload was acceptable but held no usable lines.
///
/// # Errors
///
/// Returns [`DropError::UnsupportedMimeType`], without issuing any commands,
/// if the MIME type is not a supported file list format. Executor failures
/// are returned as for [`drop_files`].
pub fn drop_mime_data<E, C>(
    executor: &mut E,
    classifier: &C,
    mime_type: &str,
    data: &[u8],
    action: DropAction,
) -> Result<usize, DropError>
where
    E: CommandExecutor + ?Sized,
    C: SubtitleClassifier + ?Sized,
{
    if mime::score_mime(mime_type).is_none() {
        warn!("Ignoring drop with unsupported MIME type {}", mime_type);
        return Err(DropError::UnsupportedMimeType(mime_type.to_string()));
    }

    let files = parse::parse_file_list(data);

    drop_files(executor, classifier, &files, action)?;

    Ok(files.len())
}
