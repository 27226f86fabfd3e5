//! Core library for the CloudFormation stack tag updater
//!
//! Provides the paginated root-stack lister, the stack-name classifier
//! with its rewrite table, the fixed tag vocabulary and the sequential
//! retag pipeline, all behind a provider trait so the AWS client is
//! injected once at startup.
//!
//! Updates are tag-only: the deployed template and every parameter value
//! are reused (`UsePreviousTemplate` / `UsePreviousValue`), so a run
//! never changes stack resources.

pub mod classify;
pub mod error;
pub mod lister;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_support;

pub use classify::{Classification, Classifier};
pub use error::{Error, Result};
pub use lister::RootStacks;
pub use model::{StackPage, StackSummary, Tag};
pub use pipeline::{Retagger, RunSummary, STACK_NAME_PREFIX};
pub use provider::{CloudFormationProvider, StackProvider};
pub use tags::build_tags;
