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

//! Ordered command issuing.
//!
//! A drop plan only has the intended effect if the player applies it in
//! exactly the planned order, so commands are sent strictly one after the
//! other, each call returning before the next command is sent.

use log::{debug, error};

use crate::{
    drop::{DropError, resolve::PlannedCommand},
    player::{Command, CommandExecutor},
};

/// Sends each planned command to the executor, in order.
///
/// # Errors
///
/// Stops at the first command the executor fails and returns its error. The
/// remaining commands are not sent.
pub fn issue<E>(executor: &mut E, plan: &[PlannedCommand<'_>]) -> Result<(), DropError>
where
    E: CommandExecutor + ?Sized,
{
    for (index, planned) in plan.iter().enumerate() {
        let command = Command::from(planned);
        debug!("Issuing command {}/{}: {}", index + 1, plan.len(), command);

        if let Err(e) = executor.run_command(&command.args()) {
            error!("Command failed, {} command(s) not sent: {}", plan.len() - index - 1, command);
            return Err(DropError::Executor(e));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::anyhow;

    use crate::drop::resolve::PlayMode;

    #[test]
    fn test_issues_in_order() {
        let mut issued: Vec<String> = Vec::new();
        let mut executor = |args: &[&str]| -> anyhow::Result<()> {
            issued.push(args.join(" "));
            Ok(())
        };

        let plan = [
            PlannedCommand::LoadFile("c", PlayMode::InsertNextQueue),
            PlannedCommand::LoadFile("b", PlayMode::InsertNextQueue),
            PlannedCommand::LoadFile("a", PlayMode::InsertNextPlay),
        ];
        issue(&mut executor, &plan).unwrap();

        assert_eq!(
            issued,
            vec![
                "osd-auto loadfile c insert-next",
                "osd-auto loadfile b insert-next",
                "osd-auto loadfile a insert-next-play",
            ]
        );
    }

    #[test]
    fn test_empty_plan_issues_nothing() {
        let mut calls = 0;
        let mut executor = |_: &[&str]| -> anyhow::Result<()> {
            calls += 1;
            Ok(())
        };

        issue(&mut executor, &[]).unwrap();

        assert_eq!(calls, 0);
    }

    #[test]
    fn test_stops_after_failure() {
        let mut issued: Vec<String> = Vec::new();
        let mut executor = |args: &[&str]| -> anyhow::Result<()> {
            issued.push(args[2].to_string());
            if args[2] == "b.srt" {
                return Err(anyhow!("no file loaded"));
            }
            Ok(())
        };

        let plan = [
            PlannedCommand::AttachSubtitle("a.srt"),
            PlannedCommand::AttachSubtitle("b.srt"),
            PlannedCommand::AttachSubtitle("c.srt"),
        ];
        let result = issue(&mut executor, &plan);

        assert!(matches!(result, Err(DropError::Executor(ref e)) if e.to_string() == "no file loaded"));
        assert_eq!(issued, vec!["a.srt", "b.srt"]);
    }
}
