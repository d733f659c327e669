//! The fixed roster demonstration.
//!
//! Each [`Section`] shows one way of parameterizing the same search:
//! male roster entries eligible for Selective Service (ages 18 to 25),
//! plus the two hard-coded age searches and the final age sort. Sections
//! always run in declaration order, each as a heading, its result lines
//! and a blank line.

use std::io::{self, Write};

use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

use crate::error::PipelineError;
use crate::person::{Person, Sex};
use crate::pipeline::{Pipeline, RunSummary};
use crate::predicate::{EligibleForSelectiveService, is_eligible_for_selective_service};
use crate::roster::{
    print_persons, print_persons_older_than, print_persons_with_predicate,
    print_persons_within_age_range, process_persons, process_persons_with_function,
};
use crate::sort::sorted_by_age;

/// Threshold of the `older-than` section.
pub const OLDER_THAN_AGE: u32 = 20;
/// Bounds of the `age-range` section, `low <= age < high`.
pub const AGE_RANGE: (u32, u32) = (14, 30);

/// Errors from a demonstration run.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// One step of the demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Section {
    /// Fixed age threshold.
    OlderThan,
    /// Fixed half-open age range.
    AgeRange,
    /// Named check type.
    NamedCheck,
    /// Inline closure used as a check.
    InlineCheck,
    /// Plain predicate function.
    Predicate,
    /// Predicate plus action.
    Consumer,
    /// Predicate, mapping to email and action.
    Function,
    /// Generic pipeline builder.
    Generic,
    /// Standard iterator adapters.
    Iterator,
    /// Roster sorted by age.
    Sort,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::OlderThan,
        Section::AgeRange,
        Section::NamedCheck,
        Section::InlineCheck,
        Section::Predicate,
        Section::Consumer,
        Section::Function,
        Section::Generic,
        Section::Iterator,
        Section::Sort,
    ];

    pub fn heading(&self) -> String {
        match self {
            Section::OlderThan => format!("Persons older than {OLDER_THAN_AGE}:"),
            Section::AgeRange => {
                format!("Persons between {} and {}:", AGE_RANGE.0, AGE_RANGE.1)
            }
            Section::NamedCheck => "Persons eligible for Selective Service (named check):".into(),
            Section::InlineCheck => {
                "Persons eligible for Selective Service (inline check):".into()
            }
            Section::Predicate => "Persons eligible for Selective Service (predicate):".into(),
            Section::Consumer => {
                "Persons eligible for Selective Service (predicate and action):".into()
            }
            Section::Function => "Emails of persons eligible for Selective Service:".into(),
            Section::Generic => {
                "Emails of persons eligible for Selective Service (generic pipeline):".into()
            }
            Section::Iterator => "Emails of adult males (iterator adapters):".into(),
            Section::Sort => "Persons sorted by age:".into(),
        }
    }
}

/// Write the selected sections to `out`. An empty selection runs all of
/// them.
pub fn run<W: Write>(
    roster: &[Person],
    sections: &[Section],
    out: &mut W,
) -> Result<(), DemoError> {
    let mut selected: Vec<Section> = if sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        sections.to_vec()
    };
    selected.sort();
    selected.dedup();

    for section in selected {
        debug!(?section, "running section");
        writeln!(out, "{}", section.heading())?;
        let summary = run_section(roster, section, out)?;
        writeln!(out)?;
        debug!(
            ?section,
            visited = summary.visited,
            passed = summary.passed,
            "section complete"
        );
    }
    out.flush()?;
    Ok(())
}

fn run_section<W: Write>(
    roster: &[Person],
    section: Section,
    out: &mut W,
) -> Result<RunSummary, DemoError> {
    let summary = match section {
        Section::OlderThan => print_persons_older_than(roster, OLDER_THAN_AGE, out)?,
        Section::AgeRange => {
            print_persons_within_age_range(roster, AGE_RANGE.0, AGE_RANGE.1, out)?
        }
        Section::NamedCheck => print_persons(roster, &EligibleForSelectiveService, out)?,
        Section::InlineCheck => {
            let check = |p: &Person| p.gender() == Sex::Male && p.age() >= 18 && p.age() <= 25;
            print_persons(roster, &check, out)?
        }
        Section::Predicate => {
            print_persons_with_predicate(roster, is_eligible_for_selective_service, out)?
        }
        Section::Consumer => process_persons(roster, is_eligible_for_selective_service, |p| {
            writeln!(out, "{p}")
        })?,
        Section::Function => process_persons_with_function(
            roster,
            is_eligible_for_selective_service,
            |p| p.email_address().to_string(),
            |email| writeln!(out, "{email}"),
        )?,
        Section::Generic => Pipeline::new()
            .filter(|p: &&Person| is_eligible_for_selective_service(p))
            .map(Person::email_address)
            .try_for_each(|email| writeln!(out, "{email}"))
            .run(roster)?,
        Section::Iterator => {
            let mut visited = 0;
            let mut passed = 0;
            roster
                .iter()
                .inspect(|_| visited += 1)
                .filter(|p| p.gender() == Sex::Male && p.age() >= 18)
                .map(Person::email_address)
                .try_for_each(|email| {
                    passed += 1;
                    writeln!(out, "{email}")
                })?;
            RunSummary { visited, passed }
        }
        Section::Sort => {
            let sorted = sorted_by_age(roster);
            for p in &sorted {
                writeln!(out, "{p}")?;
            }
            RunSummary {
                visited: sorted.len(),
                passed: sorted.len(),
            }
        }
    };
    Ok(summary)
}
