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


//! # Drag-and-drop handling for MPV.
//!
//! Turns files or text dropped onto a player into an ordered series of player
//! commands.
//!
//! A drop goes through the following stages:
//!
//! * **MIME scoring**: A raw payload is only accepted if its content type is a
//!   text file list, see [`score_mime`].
//! * **Parsing**: The payload text is split into file references, see
//!   [`parse_file_list`].
//! * **Resolution**: The batch of files and the requested [`DropAction`] are
//!   turned into a plan, attaching subtitles or loading files into the
//!   playlist.
//! * **Sequencing**: The planned commands are sent to a [`CommandExecutor`]
//!   strictly one after the other.
//!
//! ## Example
//!
//! ```
//! use mpvdrop::{DropAction, ExtensionClassifier, PrintExecutor, drop_mime_data};
//!
//! let mut executor = PrintExecutor::new(Vec::new());
//! let classifier = ExtensionClassifier::default();
//!
//! let count = drop_mime_data(
//!     &mut executor,
//!     &classifier,
//!     "text/uri-list",
//!     b"file:///music/a.flac\nfile:///music/b.flac\n",
//!     DropAction::InsertNext,
//! )?;
//!
//! assert_eq!(count, 2);
//! assert_eq!(
//!     String::from_utf8(executor.into_inner())?,
//!     "osd-auto loadfile file:///music/b.flac insert-next\n\
//!      osd-auto loadfile file:///music/a.flac insert-next-play\n"
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod drop;
pub mod player;

pub use drop::{
    DropAction, DropError, drop_files, drop_mime_data,
    mime::{score_mime, select_mime_type},
    parse::parse_file_list,
    resolve::{PlannedCommand, PlayMode, resolve},
    subtitle::{ExtensionClassifier, SubtitleClassifier},
};
pub use player::{Command, CommandExecutor, PrintExecutor, sequencer::issue};
