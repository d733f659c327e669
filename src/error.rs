//! Error types for pipeline runs.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed error carried out of a failing predicate, transform or action.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The role a caller-supplied callable plays in a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Predicate,
    Transform,
    Action,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Predicate => "predicate",
            Stage::Transform => "transform",
            Stage::Action => "action",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required callable was never supplied. Raised before any element
    /// is visited.
    #[error("invalid argument: no {0} supplied")]
    InvalidArgument(Stage),

    /// A supplied callable failed; traversal stopped at `index`.
    #[error("{stage} failed on element {index}: {source}")]
    Propagated {
        stage: Stage,
        index: usize,
        #[source]
        source: BoxError,
    },
}

impl PipelineError {
    pub fn propagated(stage: Stage, index: usize, source: impl Into<BoxError>) -> Self {
        PipelineError::Propagated {
            stage,
            index,
            source: source.into(),
        }
    }

    /// The role that caused this error.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::InvalidArgument(stage) => *stage,
            PipelineError::Propagated { stage, .. } => *stage,
        }
    }

    /// Unwrap the error raised by the failing callable, if any.
    pub fn into_source(self) -> Option<BoxError> {
        match self {
            PipelineError::InvalidArgument(_) => None,
            PipelineError::Propagated { source, .. } => Some(source),
        }
    }
}
