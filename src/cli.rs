//! Interactive prompt and report formatting for the command line.

use crate::game::state::{MAX_HAND_SIZE, MIN_HAND_SIZE};
use crate::simulation::stats::TrialSummary;
use clap::ValueEnum;
use std::io::{self, BufRead, Write};

/// Which statistic to print per hand size
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Mean Tron turn
    Mean,
    /// Fraction of games with Tron exactly on turn 3
    Turn3,
    /// Fraction of games with Tron by turn 4
    Turn4,
}

/// Ask "on the draw?" until the answer is y or n
pub fn prompt_on_the_draw<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<bool> {
    loop {
        write!(output, "on the draw? y/n: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer to the on the draw prompt",
            ));
        }

        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => writeln!(output, "input must be y or n")?,
        }
    }
}

/// clap value parser for a starting hand size
pub fn parse_hand_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "hand size must be between {} and {}",
            MIN_HAND_SIZE, MAX_HAND_SIZE
        ))
    }
}

/// One report line for a hand size
pub fn format_summary(summary: &TrialSummary, kind: ReportKind) -> String {
    match kind {
        ReportKind::Mean => match (summary.mean_turn, summary.std_dev) {
            (Some(mean), Some(sd)) => format!(
                "{} card hand: {:.3} turns (sd {:.3})",
                summary.hand_size, mean, sd
            ),
            _ => format!("{} card hand: no completed games", summary.hand_size),
        },
        ReportKind::Turn3 => format!(
            "{} card hand: {:.3}",
            summary.hand_size,
            summary.fraction_on(3)
        ),
        ReportKind::Turn4 => format!(
            "{} card hand: {:.3}",
            summary.hand_size,
            summary.fraction_by(4)
        ),
    }
}
