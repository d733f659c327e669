//! # roster-pipeline
//!
//! Filtering, mapping and consuming an in-memory roster of people with a
//! single generic pipeline.
//!
//! ## Overview
//!
//! The core is [`process_elements`]: one pass over a source sequence that
//! - tests each element with a **predicate**,
//! - maps each accepted element with a **transform**,
//! - hands each mapped value to an **action**,
//!
//! always in source order. The roster printers in [`roster`] are
//! specializations of it with fixed predicates or identity transforms.
//!
//! ## Example
//!
//! ```
//! use roster_pipeline::{create_roster, is_eligible_for_selective_service, process_elements};
//!
//! let roster = create_roster();
//! let mut emails = Vec::new();
//!
//! process_elements(
//!     &roster,
//!     |p| is_eligible_for_selective_service(p),
//!     |p| p.email_address(),
//!     |email| emails.push(email),
//! );
//!
//! assert_eq!(emails, vec!["bob@example.com", "george@example.com"]);
//! ```

pub mod demo;
pub mod error;
pub mod logging;
pub mod person;
pub mod pipeline;
pub mod predicate;
pub mod roster;
pub mod sort;

pub use demo::{DemoError, Section};
pub use error::{BoxError, PipelineError, Stage};
pub use person::{Person, Sex, compare_age, create_roster};
pub use pipeline::{Pipeline, RunSummary, process_elements, try_process_elements};
pub use predicate::{
    CheckPerson, EligibleForSelectiveService, OlderThan, WithinAgeRange,
    is_eligible_for_selective_service,
};
pub use roster::{
    print_persons, print_persons_older_than, print_persons_with_predicate,
    print_persons_within_age_range, process_persons, process_persons_with_function,
};
pub use sort::sorted_by_age;
