// src/presentation.rs
use countable_domain::CountResult;
use serde::Serialize;

use crate::args::OutputFormat;

/// One surface's counts, ready for output.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub surface: String,
    #[serde(flatten)]
    pub counts: CountResult,
}

pub fn print_reports(reports: &[Report], format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(reports),
        OutputFormat::Json => print_json(reports),
        OutputFormat::Jsonl => {
            for report in reports {
                print_json_line(report);
            }
        }
    }
}

/// Single-report output for watch mode, one line per change event.
pub fn print_update(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_row(report),
        OutputFormat::Json | OutputFormat::Jsonl => print_json_line(report),
    }
}

fn print_table(reports: &[Report]) {
    println!("countable v{}", crate::VERSION);
    println!();
    println!("  PARAGRAPHS      WORDS      CHARS   CHARS+WS   SURFACE");
    println!("--------------------------------------------------------");

    for report in reports {
        print_row(report);
    }

    let totals = reports.iter().fold(CountResult::zero(), |acc, r| CountResult {
        paragraphs: acc.paragraphs.saturating_add(r.counts.paragraphs),
        words: acc.words.saturating_add(r.counts.words),
        characters: acc.characters.saturating_add(r.counts.characters),
        characters_and_spaces: acc
            .characters_and_spaces
            .saturating_add(r.counts.characters_and_spaces),
    });

    println!("---");
    println!(
        "{:>12}{:>11}{:>11}{:>11}   TOTAL ({} surfaces)",
        totals.paragraphs,
        totals.words,
        totals.characters,
        totals.characters_and_spaces,
        reports.len()
    );
}

fn print_row(report: &Report) {
    println!(
        "{:>12}{:>11}{:>11}{:>11}   {}",
        report.counts.paragraphs,
        report.counts.words,
        report.counts.characters,
        report.counts.characters_and_spaces,
        report.surface
    );
}

fn print_json(reports: &[Report]) {
    if let Ok(json) = serde_json::to_string_pretty(reports) {
        println!("{json}");
    }
}

fn print_json_line(report: &Report) {
    if let Ok(json) = serde_json::to_string(report) {
        println!("{json}");
    }
}
