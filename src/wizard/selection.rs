// file: src/wizard/selection.rs
// version: 1.0.0
// guid: 2b7d4e9a-6c13-4f85-a0d2-8e5b1f7c3a64

//! Interactive subnet selection by 1-based index

use crate::wizard::prompt::Prompter;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt shown while choosing subnets
pub const SELECTION_PROMPT: &str =
    "Enter the numbers of the subnets to route (comma-separated, or press Enter to finish)";

/// Outcome of parsing one line of index input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Candidates picked, in the order their indices were entered
    pub chosen: Vec<String>,
    /// Raw tokens that were not a valid index
    pub rejected: Vec<String>,
}

/// Parse a comma-separated list of 1-based indices against `candidates`.
///
/// Tokens that are not integers count as index 0 and are rejected along
/// with any out-of-range index. Rejected tokens are kept untrimmed.
pub fn parse_selection(line: &str, candidates: &[String]) -> Selection {
    let mut selection = Selection::default();

    for token in line.split(',') {
        let index = token.trim().parse::<i64>().unwrap_or(0);
        match usize::try_from(index) {
            Ok(n) if (1..=candidates.len()).contains(&n) => {
                selection.chosen.push(candidates[n - 1].clone());
            }
            _ => selection.rejected.push(token.to_string()),
        }
    }

    selection
}

/// Print the candidates 1-indexed
pub fn print_candidates<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    candidates: &[String],
) -> Result<()> {
    prompter.say("\nDetected private subnets:")?;
    for (i, subnet) in candidates.iter().enumerate() {
        prompter.say(format!("{}. {}", i + 1, subnet))?;
    }
    Ok(())
}

/// Ask for subnets until a line yields at least one valid choice.
///
/// An empty answer stops immediately with whatever was chosen so far.
/// Selection ends after the first line that yields a valid index; later
/// lines are never read.
pub fn choose_subnets<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    candidates: &[String],
) -> Result<Vec<String>> {
    let mut chosen = Vec::new();

    loop {
        let input = prompter.get_input(SELECTION_PROMPT)?;
        if input.is_empty() {
            break;
        }

        let selection = parse_selection(&input, candidates);
        for token in &selection.rejected {
            prompter.say(format!("Invalid choice: {}. Skipping.", token))?;
        }
        chosen.extend(selection.chosen);

        if !chosen.is_empty() {
            break;
        }
        prompter.say("No valid subnets selected. Please try again.")?;
    }

    debug!("Chosen subnets: {:?}", chosen);
    Ok(chosen)
}
