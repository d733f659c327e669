//! Age ordering for the roster, independent of the pipeline.

use crate::person::{Person, compare_age};

/// Copy `roster` and sort the copy by age, keeping the original order of
/// people with equal ages.
pub fn sorted_by_age(roster: &[Person]) -> Vec<Person> {
    let mut sorted = roster.to_vec();
    sorted.sort_by(compare_age);
    sorted
}
