//! Transform pipeline infrastructure
//!
//! Vault documents are loaded through a small, composable chain of typed stages:
//!
//! ```text
//! String ──SplitFrontmatter──▶ SourceParts ──ParseFrontmatter──▶ RawDocument ──ClassifyEntry──▶ VaultEntry
//! ```
//!
//! # The `Runnable` Trait
//!
//! Every stage implements `Runnable<I, O>`:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O, TransformError>;
//! }
//! ```
//!
//! # The `Transform<I, O>` Type
//!
//! A boxed, thread-safe wrapper that chains stages with `.then()`. The compiler checks that
//! each stage's input matches the previous output:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(SplitFrontmatter::new())   // String → SourceParts
//!     .then(ParseFrontmatter::new());  // SourceParts → RawDocument
//! ```
//!
//! Standard chains are pre-built as `once_cell::sync::Lazy` statics in [`standard`].
//!
//! # Errors
//!
//! Only structural failures are errors here (frontmatter that is not valid yaml). Anything
//! wrong inside a field is resolved by the normalizer and never surfaces as a
//! `TransformError`.

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("{0}")]
    Error(String),
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Anything that can transform an input to an output.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform, extending the output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built (static) transform after this one.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
