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

//! Subtitle file detection.

/// File extensions recognised as subtitles when nothing else is configured.
pub const DEFAULT_SUBTITLE_EXTENSIONS: &[&str] = &[
    "utf", "utf8", "utf-8", "idx", "sub", "srt", "rt", "ssa", "ass", "mks", "vtt", "sup", "scc",
    "smi", "lrc", "pgs",
];

/// Decides whether a dropped file reference is probably a subtitle file.
pub trait SubtitleClassifier {
    fn is_probable_subtitle(&self, file: &str) -> bool;
}

impl<F> SubtitleClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_probable_subtitle(&self, file: &str) -> bool {
        self(file)
    }
}

/// Classifies file references by their extension.
///
/// The extension is whatever follows the last `.` in the final path segment
/// and is compared without regard to case. Both `/` and `\` separate path
/// segments, so local paths and URIs are handled alike.
#[derive(Debug, Clone)]
pub struct ExtensionClassifier {
    extensions: Vec<String>,
}

impl ExtensionClassifier {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    fn extension(file: &str) -> Option<&str> {
        let name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }
}

impl Default for ExtensionClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SUBTITLE_EXTENSIONS)
    }
}

impl SubtitleClassifier for ExtensionClassifier {
    fn is_probable_subtitle(&self, file: &str) -> bool {
        Self::extension(file).is_some_and(|ext| {
            self.extensions
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
    }
}
