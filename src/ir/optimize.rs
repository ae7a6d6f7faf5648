//! # Job Optimizer
//!
//! Optional passes that shrink a print job without changing what gets
//! printed.
//!
//! ## Optimization Passes
//!
//! 1. **Collapse style toggles**: `cancel-bold, select-bold` back to back
//!    is a no-op and is removed
//! 2. **Merge adjacent writes**: consecutive writes on the same line are
//!    joined; line breaks stay separate commands
//!
//! Neither pass can leave an enter without its exit.

use super::ops::{Command, PrintJob};

impl PrintJob {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let commands = self.commands;
        let commands = collapse_style_toggles(commands);
        let commands = merge_adjacent_writes(commands);
        PrintJob { commands }
    }
}

/// Remove exit/enter pairs of the same style (e.g. `cancel-bold, select-bold`).
fn collapse_style_toggles(commands: Vec<Command>) -> Vec<Command> {
    let mut result: Vec<Command> = Vec::with_capacity(commands.len());

    for command in commands {
        let toggles_back = match (result.last().and_then(Command::style), command.style()) {
            (Some((prev, false)), Some((next, true))) => prev == next,
            _ => false,
        };
        if toggles_back {
            result.pop();
        } else {
            result.push(command);
        }
    }

    result
}

/// Merge consecutive writes, keeping `"\n"` line breaks as their own writes.
fn merge_adjacent_writes(commands: Vec<Command>) -> Vec<Command> {
    let mut result: Vec<Command> = Vec::with_capacity(commands.len());

    for command in commands {
        if let Command::Write(text) = &command {
            if let Some(Command::Write(prev)) = result.last_mut() {
                if !prev.ends_with('\n') && !text.starts_with('\n') {
                    prev.push_str(text);
                    continue;
                }
            }
        }
        result.push(command);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(s: &str) -> Command {
        Command::Write(s.into())
    }

    #[test]
    fn test_merge_adjacent_writes() {
        let job: PrintJob = vec![write("Hel"), write("lo"), write("\n"), write("x")]
            .into_iter()
            .collect();
        let optimized = job.optimize();
        assert_eq!(
            optimized.commands,
            vec![write("Hello"), write("\n"), write("x")]
        );
    }

    #[test]
    fn test_collapse_toggles() {
        let job: PrintJob = vec![
            Command::SelectBold,
            write("a"),
            Command::CancelBold,
            Command::SelectBold,
            write("b"),
            Command::CancelBold,
        ]
        .into_iter()
        .collect();
        let optimized = job.optimize();
        assert_eq!(
            optimized.commands,
            vec![Command::SelectBold, write("ab"), Command::CancelBold]
        );
    }

    #[test]
    fn test_different_styles_not_collapsed() {
        let commands = vec![
            Command::SelectBold,
            Command::CancelBold,
            Command::SelectInverse,
            Command::CancelInverse,
        ];
        let job: PrintJob = commands.clone().into_iter().collect();
        assert_eq!(job.optimize().commands, commands);
    }

    #[test]
    fn test_pairs_stay_balanced() {
        let job: PrintJob = vec![
            Command::SelectBold,
            Command::SelectBold,
            write("x"),
            Command::CancelBold,
            Command::SelectBold,
            Command::CancelBold,
            Command::CancelBold,
        ]
        .into_iter()
        .collect();
        let optimized = job.optimize();
        let enters = optimized
            .iter()
            .filter(|c| **c == Command::SelectBold)
            .count();
        let exits = optimized
            .iter()
            .filter(|c| **c == Command::CancelBold)
            .count();
        assert_eq!(enters, exits);
    }
}
