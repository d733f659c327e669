//! Ways of expressing a roster search condition.
//!
//! [`CheckPerson`] is the capability a printer needs: a single `test`
//! method. Named checks are plain structs implementing it. Any
//! `Fn(&Person) -> bool` closure or function implements it too, so a
//! condition can also be written inline at the call site.

use crate::person::{Person, Sex};

/// A search condition over one person.
pub trait CheckPerson {
    fn test(&self, person: &Person) -> bool;
}

impl<F> CheckPerson for F
where
    F: Fn(&Person) -> bool,
{
    fn test(&self, person: &Person) -> bool {
        self(person)
    }
}

/// Males aged 18 through 25 inclusive.
pub fn is_eligible_for_selective_service(person: &Person) -> bool {
    person.gender() == Sex::Male && (18..=25).contains(&person.age())
}

/// Named form of [`is_eligible_for_selective_service`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibleForSelectiveService;

impl CheckPerson for EligibleForSelectiveService {
    fn test(&self, person: &Person) -> bool {
        is_eligible_for_selective_service(person)
    }
}

/// `age >= threshold`.
#[derive(Debug, Clone, Copy)]
pub struct OlderThan(pub u32);

impl CheckPerson for OlderThan {
    fn test(&self, person: &Person) -> bool {
        person.age() >= self.0
    }
}

/// `low <= age < high`.
#[derive(Debug, Clone, Copy)]
pub struct WithinAgeRange {
    pub low: u32,
    pub high: u32,
}

impl CheckPerson for WithinAgeRange {
    fn test(&self, person: &Person) -> bool {
        (self.low..self.high).contains(&person.age())
    }
}
