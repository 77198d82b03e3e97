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

//! Player command construction and execution.
//!
//! The player is only ever reached through a [`CommandExecutor`], which
//! accepts one command at a time. Nothing in this crate interprets what a
//! command does, only the order in which commands are sent.
//!
//! Executors provided here:
//!
//! * [`PrintExecutor`]: Writes commands in the player's input command syntax,
//!   one per line.
//! * `MpvExecutor`: Runs commands against an embedded `libmpv` instance,
//!   available with the `mpv` feature.

#[cfg(feature = "mpv")]
mod mpv;
mod print;
pub mod sequencer;

use std::fmt;

use anyhow::Result;

use crate::drop::resolve::PlannedCommand;

#[cfg(feature = "mpv")]
pub use mpv::MpvExecutor;
pub use print::{PrintExecutor, format_command};

/// A sink for player commands.
///
/// Each call must complete, successfully or not, before it returns. An error
/// tells the caller not to send any further commands belonging to the same
/// operation.
pub trait CommandExecutor {
    fn run_command(&mut self, args: &[&str]) -> Result<()>;
}

impl<F> CommandExecutor for F
where
    F: FnMut(&[&str]) -> Result<()>,
{
    fn run_command(&mut self, args: &[&str]) -> Result<()> {
        self(args)
    }
}

/// A player command as an owned list of tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Borrows the tokens in the form executors accept.
    pub fn args(&self) -> Vec<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }
}

impl From<&PlannedCommand<'_>> for Command {
    fn from(planned: &PlannedCommand<'_>) -> Self {
        match *planned {
            PlannedCommand::AttachSubtitle(file) => Command::new(["osd-auto", "sub-add", file]),
            PlannedCommand::LoadFile(file, mode) => {
                Command::new(["osd-auto", "loadfile", file, mode.token()])
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_command(&self.args()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::drop::resolve::PlayMode;

    #[test]
    fn test_subtitle_tokens() {
        let command = Command::from(&PlannedCommand::AttachSubtitle("/subs/film.srt"));
        assert_eq!(command.args(), vec!["osd-auto", "sub-add", "/subs/film.srt"]);
    }

    #[test]
    fn test_load_tokens() {
        let command = Command::from(&PlannedCommand::LoadFile("film.mkv", PlayMode::InsertNextQueue));
        assert_eq!(
            command.tokens(),
            ["osd-auto", "loadfile", "film.mkv", "insert-next"]
        );
    }

    #[test]
    fn test_display_quotes_arguments() {
        let command = Command::from(&PlannedCommand::LoadFile("My Film.mkv", PlayMode::Replace));
        assert_eq!(command.to_string(), r#"osd-auto loadfile "My Film.mkv" replace"#);
    }
}
