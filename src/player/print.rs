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

//! Textual command output.

use std::io::Write;

use anyhow::{Context, Result};

use crate::player::CommandExecutor;

/// Writes each command as a line of input command syntax.
///
/// The output can be fed to a player's input pipe, or simply read to see what
/// a drop would do.
pub struct PrintExecutor<W: Write> {
    out: W,
}

impl<W: Write> PrintExecutor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CommandExecutor for PrintExecutor<W> {
    fn run_command(&mut self, args: &[&str]) -> Result<()> {
        writeln!(self.out, "{}", format_command(args)).context("Failed to write command")?;
        self.out.flush().context("Failed to flush command output")
    }
}

/// Joins command arguments into a single input command line.
///
/// Arguments that would otherwise be split or misread are double quoted, with
/// backslash escapes for quotes, backslashes and line breaks.
pub fn format_command(args: &[&str]) -> String {
    args.iter()
        .map(|arg| quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '#' | ';'));

    if !needs_quotes {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
