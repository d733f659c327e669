//! The roster: person records and the demonstration data set.

use std::cmp::Ordering;
use std::fmt;

/// Two-valued gender field of a [`Person`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("MALE"),
            Sex::Female => f.write_str("FEMALE"),
        }
    }
}

/// An immutable roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    gender: Sex,
    age: u32,
    email_address: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        gender: Sex,
        age: u32,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gender,
            age,
            email_address: email_address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Sex {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

/// One display line per person, e.g. `Fred, 16 years, MALE, fred@example.com`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} years, {}, {}",
            self.name, self.age, self.gender, self.email_address
        )
    }
}

/// Order two people by age, youngest first.
pub fn compare_age(a: &Person, b: &Person) -> Ordering {
    a.age.cmp(&b.age)
}

/// The fixed demonstration roster.
pub fn create_roster() -> Vec<Person> {
    vec![
        Person::new("Fred", Sex::Male, 16, "fred@example.com"),
        Person::new("Bob", Sex::Male, 19, "bob@example.com"),
        Person::new("Jane", Sex::Female, 20, "jane@example.com"),
        Person::new("George", Sex::Male, 24, "george@example.com"),
        Person::new("Alice", Sex::Female, 30, "alice@example.com"),
    ]
}
