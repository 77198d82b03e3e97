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


use anyhow::{Result, bail};

use mpvdrop::{
    CommandExecutor, DropAction, DropError, ExtensionClassifier, PrintExecutor, drop_files,
    drop_mime_data, select_mime_type,
};

/// Records every command it is given, optionally failing one of them.
#[derive(Default)]
struct RecordingExecutor {
    commands: Vec<Vec<String>>,
    fail_on: Option<usize>,
}

impl CommandExecutor for RecordingExecutor {
    fn run_command(&mut self, args: &[&str]) -> Result<()> {
        if self.fail_on == Some(self.commands.len()) {
            bail!("command {} rejected", self.commands.len());
        }
        self.commands
            .push(args.iter().map(|arg| arg.to_string()).collect());
        Ok(())
    }
}

impl RecordingExecutor {
    fn files_and_modes(&self) -> Vec<(String, String)> {
        self.commands
            .iter()
            .map(|command| (command[2].clone(), command[3].clone()))
            .collect()
    }
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(file, mode)| (file.to_string(), mode.to_string()))
        .collect()
}

#[test]
fn test_insert_next_batch() {
    let mut executor = RecordingExecutor::default();

    drop_files(
        &mut executor,
        &ExtensionClassifier::default(),
        &["A.mkv", "B.mkv", "C.mkv"],
        DropAction::InsertNext,
    )
    .unwrap();

    assert_eq!(
        executor.files_and_modes(),
        pairs(&[
            ("C.mkv", "insert-next"),
            ("B.mkv", "insert-next"),
            ("A.mkv", "insert-next-play"),
        ])
    );
}

#[test]
fn test_replace_batch() {
    let mut executor = RecordingExecutor::default();

    drop_files(
        &mut executor,
        &ExtensionClassifier::default(),
        &["A.mkv", "B.mkv"],
        DropAction::Replace,
    )
    .unwrap();

    assert_eq!(
        executor.files_and_modes(),
        pairs(&[("A.mkv", "replace"), ("B.mkv", "append-play")])
    );
}

#[test]
fn test_subtitle_batch_with_stray_media_file() {
    // Every file but one is a subtitle, the whole batch is still loaded as
    // media rather than partially attached
    let files = ["en.srt", "fr.srt", "film.mkv", "de.srt"];
    let mut executor = RecordingExecutor::default();

    drop_files(
        &mut executor,
        &ExtensionClassifier::default(),
        &files,
        DropAction::AppendPlay,
    )
    .unwrap();

    assert_eq!(executor.commands.len(), files.len());
    assert!(executor.commands.iter().all(|command| command[1] == "loadfile"));

    // Without the media file, the same subtitles are attached instead
    let mut executor = RecordingExecutor::default();

    drop_files(
        &mut executor,
        &ExtensionClassifier::default(),
        &["en.srt", "fr.srt", "de.srt"],
        DropAction::AppendPlay,
    )
    .unwrap();

    assert_eq!(
        executor.commands,
        vec![
            vec!["osd-auto", "sub-add", "en.srt"],
            vec!["osd-auto", "sub-add", "fr.srt"],
            vec!["osd-auto", "sub-add", "de.srt"],
        ]
    );
}

#[test]
fn test_empty_batch_under_every_action() {
    for action in [DropAction::Replace, DropAction::AppendPlay, DropAction::InsertNext] {
        let mut executor = RecordingExecutor::default();
        let files: [&str; 0] = [];

        drop_files(&mut executor, &ExtensionClassifier::default(), &files, action).unwrap();

        assert!(executor.commands.is_empty());
    }
}

#[test]
fn test_payload_from_best_offer() {
    let offers = ["text/plain", "text/uri-list", "image/png"];
    let mime_type = select_mime_type(&offers).unwrap();
    assert_eq!(mime_type, "text/uri-list");

    let payload = b"# comment\n\nfile1.mkv\nfile2.srt\n";
    let mut executor = RecordingExecutor::default();

    let count = drop_mime_data(
        &mut executor,
        &ExtensionClassifier::default(),
        mime_type,
        payload,
        DropAction::Replace,
    )
    .unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        executor.files_and_modes(),
        pairs(&[("file1.mkv", "replace"), ("file2.srt", "append-play")])
    );
}

#[test]
fn test_unsupported_payload_distinct_from_empty() {
    let mut executor = RecordingExecutor::default();
    let classifier = ExtensionClassifier::default();

    let unsupported = drop_mime_data(
        &mut executor,
        &classifier,
        "application/octet-stream",
        b"file1.mkv\n",
        DropAction::Replace,
    );
    assert!(matches!(unsupported, Err(DropError::UnsupportedMimeType(_))));

    let empty = drop_mime_data(&mut executor, &classifier, "text/plain", b"\n\n", DropAction::Replace);
    assert!(matches!(empty, Ok(0)));

    assert!(executor.commands.is_empty());
}

#[test]
fn test_failure_stops_remaining_commands() {
    let mut executor = RecordingExecutor {
        fail_on: Some(1),
        ..RecordingExecutor::default()
    };

    let result = drop_files(
        &mut executor,
        &|_: &str| false,
        &["a", "b", "c"],
        DropAction::AppendPlay,
    );

    match result {
        Err(DropError::Executor(e)) => assert_eq!(e.to_string(), "command 1 rejected"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(executor.commands.len(), 1);
}

#[test]
fn test_printed_commands() {
    let mut executor = PrintExecutor::new(Vec::new());

    drop_files(
        &mut executor,
        &ExtensionClassifier::default(),
        &["/films/Big Buck Bunny.srt", "/films/sintel.vtt"],
        DropAction::Replace,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(executor.into_inner()).unwrap(),
        "osd-auto sub-add \"/films/Big Buck Bunny.srt\"\nosd-auto sub-add /films/sintel.vtt\n"
    );
}
