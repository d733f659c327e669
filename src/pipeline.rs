//! One-pass filter → map → act pipeline.
//!
//! Every element of the source is tested once by the predicate. Elements
//! that pass are handed to the transform, and each transformed value is
//! handed to the action, all in source order. The first failure from any
//! of the three callables stops the traversal and is returned as-is.
//!
//! Two entry points share these semantics:
//! - [`process_elements`] / [`try_process_elements`] take the callables as
//!   generic arguments.
//! - [`Pipeline`] stores boxed callables so a pipeline can be assembled
//!   piecemeal, validated, and run more than once.

use crate::error::{BoxError, PipelineError, Stage};

/// Boxed predicate slot of a [`Pipeline`].
pub type Predicate<'a, X> = Box<dyn FnMut(&X) -> Result<bool, BoxError> + 'a>;
/// Boxed transform slot of a [`Pipeline`].
pub type Transform<'a, X, Y> = Box<dyn FnMut(X) -> Result<Y, BoxError> + 'a>;
/// Boxed action slot of a [`Pipeline`].
pub type Action<'a, Y> = Box<dyn FnMut(Y) -> Result<(), BoxError> + 'a>;

/// Counts from a single pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Elements read from the source (one predicate evaluation each).
    pub visited: usize,
    /// Elements that passed the predicate and were acted on.
    pub passed: usize,
}

/// Run the pipeline with infallible callables.
///
/// ```
/// use roster_pipeline::process_elements;
///
/// let mut squares = Vec::new();
/// let summary = process_elements(1..=6, |n| n % 2 == 0, |n| n * n, |sq| squares.push(sq));
///
/// assert_eq!(squares, vec![4, 16, 36]);
/// assert_eq!(summary.visited, 6);
/// assert_eq!(summary.passed, 3);
/// ```
pub fn process_elements<I, Y, P, M, A>(
    source: I,
    mut predicate: P,
    mut transform: M,
    mut action: A,
) -> RunSummary
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    M: FnMut(I::Item) -> Y,
    A: FnMut(Y),
{
    let mut summary = RunSummary::default();
    for x in source {
        summary.visited += 1;
        if predicate(&x) {
            action(transform(x));
            summary.passed += 1;
        }
    }
    summary
}

/// Run the pipeline with fallible callables.
///
/// The first `Err` aborts the traversal. It is wrapped in
/// [`PipelineError::Propagated`] together with the failing role and the
/// zero-based source index of the element being processed.
pub fn try_process_elements<I, Y, E, P, M, A>(
    source: I,
    mut predicate: P,
    mut transform: M,
    mut action: A,
) -> Result<RunSummary, PipelineError>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
    M: FnMut(I::Item) -> Result<Y, E>,
    A: FnMut(Y) -> Result<(), E>,
    E: Into<BoxError>,
{
    let mut summary = RunSummary::default();
    for (index, x) in source.into_iter().enumerate() {
        summary.visited += 1;
        let keep =
            predicate(&x).map_err(|e| PipelineError::propagated(Stage::Predicate, index, e))?;
        if !keep {
            continue;
        }
        let y = transform(x).map_err(|e| PipelineError::propagated(Stage::Transform, index, e))?;
        action(y).map_err(|e| PipelineError::propagated(Stage::Action, index, e))?;
        summary.passed += 1;
    }
    Ok(summary)
}

/// A reusable pipeline assembled from a predicate, a transform and an action.
///
/// All three slots must be filled before [`Pipeline::run`]; a missing slot
/// is reported as [`PipelineError::InvalidArgument`] without reading the
/// source.
///
/// ```
/// use roster_pipeline::Pipeline;
///
/// let mut lengths = Vec::new();
/// let summary = Pipeline::new()
///     .filter(|word: &&str| word.starts_with('b'))
///     .map(|word: &str| word.len())
///     .for_each(|len| lengths.push(len))
///     .run(["apple", "banana", "blueberry", "cherry"])
///     .unwrap();
///
/// assert_eq!(summary.passed, 2);
/// assert_eq!(lengths, vec![6, 9]);
/// ```
pub struct Pipeline<'a, X, Y> {
    predicate: Option<Predicate<'a, X>>,
    transform: Option<Transform<'a, X, Y>>,
    action: Option<Action<'a, Y>>,
}

impl<'a, X, Y> Pipeline<'a, X, Y> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate.
    pub fn filter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&X) -> bool + 'a,
    {
        self.predicate = Some(Box::new(move |x: &X| Ok::<_, BoxError>(predicate(x))));
        self
    }

    /// Set a predicate that may fail.
    pub fn try_filter<P, E>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&X) -> Result<bool, E> + 'a,
        E: Into<BoxError>,
    {
        self.predicate = Some(Box::new(move |x: &X| predicate(x).map_err(Into::into)));
        self
    }

    /// Set the transform.
    pub fn map<M>(mut self, mut transform: M) -> Self
    where
        M: FnMut(X) -> Y + 'a,
    {
        self.transform = Some(Box::new(move |x: X| Ok::<_, BoxError>(transform(x))));
        self
    }

    /// Set a transform that may fail.
    pub fn try_map<M, E>(mut self, mut transform: M) -> Self
    where
        M: FnMut(X) -> Result<Y, E> + 'a,
        E: Into<BoxError>,
    {
        self.transform = Some(Box::new(move |x: X| transform(x).map_err(Into::into)));
        self
    }

    /// Set the action.
    pub fn for_each<A>(mut self, mut action: A) -> Self
    where
        A: FnMut(Y) + 'a,
    {
        self.action = Some(Box::new(move |y: Y| {
            action(y);
            Ok::<_, BoxError>(())
        }));
        self
    }

    /// Set an action that may fail.
    pub fn try_for_each<A, E>(mut self, mut action: A) -> Self
    where
        A: FnMut(Y) -> Result<(), E> + 'a,
        E: Into<BoxError>,
    {
        self.action = Some(Box::new(move |y: Y| action(y).map_err(Into::into)));
        self
    }

    /// Traverse `source` once.
    pub fn run<I>(&mut self, source: I) -> Result<RunSummary, PipelineError>
    where
        I: IntoIterator<Item = X>,
    {
        let Pipeline {
            predicate,
            transform,
            action,
        } = self;
        let predicate = predicate
            .as_mut()
            .ok_or(PipelineError::InvalidArgument(Stage::Predicate))?;
        let transform = transform
            .as_mut()
            .ok_or(PipelineError::InvalidArgument(Stage::Transform))?;
        let action = action
            .as_mut()
            .ok_or(PipelineError::InvalidArgument(Stage::Action))?;

        try_process_elements(source, predicate, transform, action)
    }
}

impl<X, Y> Default for Pipeline<'_, X, Y> {
    fn default() -> Self {
        Self {
            predicate: None,
            transform: None,
            action: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::convert::identity;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Boom(i32);

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom at {}", self.0)
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_preserves_source_order() {
        let mut seen = Vec::new();
        process_elements(
            vec![5, 3, 8, 1, 9, 2],
            |n| *n > 2,
            identity,
            |n| seen.push(n),
        );
        assert_eq!(seen, vec![5, 3, 8, 9]);
    }

    #[test]
    fn test_predicate_evaluated_once_per_element() {
        let evaluations = Cell::new(0);
        let transforms = Cell::new(0);
        let mut acted = Vec::new();

        let summary = process_elements(
            0..10,
            |n| {
                evaluations.set(evaluations.get() + 1);
                n % 3 == 0
            },
            |n| {
                transforms.set(transforms.get() + 1);
                n * 10
            },
            |n| acted.push(n),
        );

        assert_eq!(evaluations.get(), 10);
        assert_eq!(transforms.get(), 4);
        assert_eq!(acted, vec![0, 30, 60, 90]);
        assert_eq!(
            summary,
            RunSummary {
                visited: 10,
                passed: 4
            }
        );
    }

    #[test]
    fn test_empty_source_is_noop() {
        let mut called = false;
        let summary = process_elements(Vec::<i32>::new(), |_| true, identity, |_| called = true);
        assert!(!called);
        assert_eq!(summary, RunSummary::default());

        let result =
            try_process_elements(Vec::<i32>::new(), |_| Ok::<_, Boom>(true), Ok, |_| Ok(()));
        assert_eq!(result.unwrap(), RunSummary::default());
    }

    #[test]
    fn test_transform_changes_type() {
        let mut labels = Vec::new();
        process_elements(
            [1u8, 2, 3],
            |n| *n != 2,
            |n| format!("item-{n}"),
            |s: String| labels.push(s),
        );
        assert_eq!(labels, vec!["item-1", "item-3"]);
    }

    #[test]
    fn test_predicate_failure_stops_traversal() {
        let mut acted = Vec::new();
        let err = try_process_elements(
            [1, 2, 3, 4],
            |n| if *n == 3 { Err(Boom(*n)) } else { Ok(true) },
            Ok,
            |n| {
                acted.push(n);
                Ok(())
            },
        )
        .unwrap_err();

        assert_eq!(acted, vec![1, 2]);
        assert!(matches!(
            err,
            PipelineError::Propagated {
                stage: Stage::Predicate,
                index: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_transform_failure_stops_traversal() {
        let mut acted = Vec::new();
        let err = try_process_elements(
            [10, 20, 30, 40],
            |_| Ok(true),
            |n| if n == 30 { Err(Boom(n)) } else { Ok(n / 10) },
            |n| {
                acted.push(n);
                Ok(())
            },
        )
        .unwrap_err();

        assert_eq!(acted, vec![1, 2]);
        assert_eq!(err.stage(), Stage::Transform);
        let source = err.into_source().unwrap();
        assert_eq!(*source.downcast::<Boom>().unwrap(), Boom(30));
    }

    #[test]
    fn test_action_failure_on_kth_passing_element() {
        let mut acted = Vec::new();
        let mut passing = 0;
        // Odd numbers pass; the third passing element (5) fails.
        let err = try_process_elements(
            1..=9,
            |n| Ok(n % 2 == 1),
            Ok,
            |n| {
                passing += 1;
                if passing == 3 {
                    return Err(Boom(n));
                }
                acted.push(n);
                Ok(())
            },
        )
        .unwrap_err();

        assert_eq!(acted, vec![1, 3]);
        assert_eq!(err.to_string(), "action failed on element 4: boom at 5");
    }

    #[test]
    fn test_pipeline_runs_generic_case() {
        let collected = RefCell::new(Vec::new());
        let summary = Pipeline::new()
            .filter(|s: &&str| !s.is_empty())
            .map(|s: &str| s.to_uppercase())
            .for_each(|s| collected.borrow_mut().push(s))
            .run(["a", "", "b", "", "c"])
            .unwrap();

        assert_eq!(summary.visited, 5);
        assert_eq!(summary.passed, 3);
        assert_eq!(*collected.borrow(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_pipeline_missing_predicate_fails_fast() {
        let pulled = Cell::new(0);
        let source = (0..5).inspect(|_| pulled.set(pulled.get() + 1));
        let mut pipeline: Pipeline<'_, i32, i32> = Pipeline::new().map(identity).for_each(|_| {});

        let err = pipeline.run(source).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidArgument(Stage::Predicate)));
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn test_pipeline_missing_transform_and_action() {
        let mut no_transform: Pipeline<'_, i32, i32> =
            Pipeline::new().filter(|_| true).for_each(|_| {});
        assert!(matches!(
            no_transform.run(0..3),
            Err(PipelineError::InvalidArgument(Stage::Transform))
        ));

        let mut no_action: Pipeline<'_, i32, i32> = Pipeline::new().filter(|_| true).map(identity);
        assert!(matches!(
            no_action.run(0..3),
            Err(PipelineError::InvalidArgument(Stage::Action))
        ));
    }

    #[test]
    fn test_pipeline_rerun_is_idempotent() {
        let source = vec![4, 7, 1, 8, 3];
        let collected = RefCell::new(Vec::new());
        let mut pipeline = Pipeline::new()
            .filter(|n: &i32| *n > 2)
            .map(|n: i32| n * 2)
            .for_each(|n| collected.borrow_mut().push(n));

        pipeline.run(source.iter().copied()).unwrap();
        let first = collected.take();
        pipeline.run(source.iter().copied()).unwrap();
        let second = collected.take();

        assert_eq!(first, vec![8, 14, 16, 6]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pipeline_fallible_slots() {
        let mut parsed = Vec::new();
        let err = Pipeline::new()
            .try_filter(|s: &&str| Ok::<_, Boom>(!s.starts_with('#')))
            .try_map(|s: &str| s.parse::<i32>())
            .for_each(|n| parsed.push(n))
            .run(["1", "# skip", "2", "x", "3"])
            .unwrap_err();

        assert_eq!(err.stage(), Stage::Transform);
        assert!(matches!(err, PipelineError::Propagated { index: 3, .. }));
        assert_eq!(parsed, vec![1, 2]);
    }
}
