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

//! MIME type acceptability for raw drop payloads.
//!
//! Text file lists are the only payload format understood, so only a handful
//! of text content types are accepted.

/// Scores a declared content type for use as a dropped file list.
///
/// Higher scores are preferred. `None` means the type is not supported and
/// the payload must not be parsed. Matching is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use mpvdrop::score_mime;
///
/// assert!(score_mime("text/uri-list") > score_mime("text/plain"));
/// assert_eq!(score_mime("image/png"), None);
/// ```
pub fn score_mime(content_type: &str) -> Option<u32> {
    match content_type {
        // X11 and Wayland file list format.
        "text/uri-list" => Some(10),
        // Plain text is treated as a file list too, for convenience.
        "text/plain;charset=utf-8" => Some(5),
        "text/plain" => Some(4),
        "text" => Some(0),
        _ => None,
    }
}

/// Picks the preferred content type from the types offered by a drop source.
///
/// Returns the supported offer with the highest score, the earliest offer
/// winning a tie, or `None` if nothing offered is supported.
pub fn select_mime_type<'a, S: AsRef<str>>(offers: &'a [S]) -> Option<&'a str> {
    let mut best: Option<(u32, &'a str)> = None;

    for offer in offers {
        let offer = offer.as_ref();
        if let Some(score) = score_mime(offer) {
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, offer));
            }
        }
    }

    best.map(|(_, offer)| offer)
}
