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

//! Text file list parsing.
//!
//! Dropped or pasted text is a list of file references, one per line, in the
//! style of `text/uri-list`. Blank lines and `#` comments are ignored.

use log::debug;

const COMMENT_MARKER: &str = "#";

/// Extracts the file references from a raw text payload.
///
/// Lines may be terminated by `\n` or `\r\n`. Each remaining line is emitted
/// verbatim, in order of appearance. Lines that are not valid UTF-8 are
/// skipped rather than treated as an error, the payload being free-form text
/// from the user or the operating system.
pub fn parse_file_list(raw: &[u8]) -> Vec<String> {
    raw.split(|&b| b == b'\n')
        .map(strip_linebreaks)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match std::str::from_utf8(line) {
            Ok(line) => Some(line),
            Err(e) => {
                debug!("Skipping malformed line in drop payload: {}", e);
                None
            }
        })
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

fn strip_linebreaks(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\r' && b != b'\n')
        .map_or(0, |pos| pos + 1);
    &line[..end]
}
