//! Roster searches built on the generic pipeline.
//!
//! Each function fixes one or more of the pipeline's three roles: the
//! printers use an identity transform and an action that writes one
//! display line per person, while `process_persons*` leave the action
//! (and optionally the mapping) to the caller.

use std::io::Write;

use crate::error::{BoxError, PipelineError};
use crate::person::Person;
use crate::pipeline::{RunSummary, try_process_elements};
use crate::predicate::{CheckPerson, OlderThan, WithinAgeRange};

/// Print everyone aged `age` or older.
pub fn print_persons_older_than<W: Write>(
    roster: &[Person],
    age: u32,
    out: &mut W,
) -> Result<RunSummary, PipelineError> {
    print_persons(roster, &OlderThan(age), out)
}

/// Print everyone with `low <= age < high`.
pub fn print_persons_within_age_range<W: Write>(
    roster: &[Person],
    low: u32,
    high: u32,
    out: &mut W,
) -> Result<RunSummary, PipelineError> {
    print_persons(roster, &WithinAgeRange { low, high }, out)
}

/// Print everyone accepted by `tester`.
pub fn print_persons<C, W>(
    roster: &[Person],
    tester: &C,
    out: &mut W,
) -> Result<RunSummary, PipelineError>
where
    C: CheckPerson + ?Sized,
    W: Write,
{
    try_process_elements(
        roster,
        |p| Ok(tester.test(p)),
        Ok,
        |p| writeln!(out, "{p}"),
    )
}

/// Print everyone accepted by a plain predicate closure.
pub fn print_persons_with_predicate<P, W>(
    roster: &[Person],
    mut tester: P,
    out: &mut W,
) -> Result<RunSummary, PipelineError>
where
    P: FnMut(&Person) -> bool,
    W: Write,
{
    try_process_elements(
        roster,
        |p| Ok(tester(*p)),
        Ok,
        |p| writeln!(out, "{p}"),
    )
}

/// Hand everyone accepted by `tester` to `block`.
pub fn process_persons<'r, P, A, E>(
    roster: &'r [Person],
    mut tester: P,
    block: A,
) -> Result<RunSummary, PipelineError>
where
    P: FnMut(&Person) -> bool,
    A: FnMut(&'r Person) -> Result<(), E>,
    E: Into<BoxError>,
{
    try_process_elements(roster, |p| Ok(tester(*p)), Ok, block)
}

/// Map everyone accepted by `tester` to a string and hand it to `block`.
pub fn process_persons_with_function<P, M, A, E>(
    roster: &[Person],
    mut tester: P,
    mut mapper: M,
    block: A,
) -> Result<RunSummary, PipelineError>
where
    P: FnMut(&Person) -> bool,
    M: FnMut(&Person) -> String,
    A: FnMut(String) -> Result<(), E>,
    E: Into<BoxError>,
{
    try_process_elements(roster, |p| Ok(tester(*p)), |p| Ok(mapper(p)), block)
}
