//! Sequential retag pipeline
//!
//! Lists root stacks, keeps the ones matching the team's naming filter,
//! classifies each name and re-applies the five-tag set through a
//! template-preserving update. Stacks are processed strictly in listing
//! order, one update call at a time.

use crate::classify::Classifier;
use crate::error::Result;
use crate::lister::RootStacks;
use crate::provider::StackProvider;
use crate::tags::build_tags;

/// Stack-name prefix this run retags
pub const STACK_NAME_PREFIX: &str = "inventory";

/// Counts of per-stack outcomes for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Stacks whose tags were updated
    pub updated: usize,
    /// Stacks the provider reported as already up to date
    pub unchanged: usize,
    /// Stacks whose update failed
    pub failed: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Filter, classify and retag matching root stacks
pub struct Retagger {
    classifier: Classifier,
    name_prefix: String,
}

impl Retagger {
    /// Retagger with the default name filter and rewrite table
    pub fn new() -> Result<Self> {
        Self::with_name_prefix(STACK_NAME_PREFIX)
    }

    /// Retagger filtering on a different case-insensitive name prefix
    pub fn with_name_prefix(prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new()?,
            name_prefix: prefix.into(),
        })
    }

    fn matches_filter(&self, stack_name: &str) -> bool {
        stack_name
            .get(..self.name_prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(&self.name_prefix))
    }

    /// Process every matching root stack once, in listing order.
    ///
    /// A listing failure aborts the run. A failed update is logged and
    /// counted; later stacks are still processed.
    pub async fn run<P: StackProvider + ?Sized>(&self, provider: &P) -> Result<RunSummary> {
        let mut lister = RootStacks::new(provider);
        let mut summary = RunSummary::default();

        while let Some(stack) = lister.next().await? {
            if !self.matches_filter(&stack.name) {
                continue;
            }

            let classification = self.classifier.classify(&stack.name);

            log::info!("Processing {}", stack.name);
            log::debug!("  Determined function {}", classification.function);
            log::debug!(
                "  Determined environment {}",
                classification.environment_label()
            );
            log::debug!("  Determined parameters {:?}", stack.parameter_keys);

            let tags = build_tags(&classification);
            match provider
                .update_stack_tags(&stack.name, &stack.parameter_keys, &tags)
                .await
            {
                Ok(()) => summary.updated += 1,
                Err(err) if err.is_no_updates() => {
                    log::debug!("  Nothing to update for {}", stack.name);
                    summary.unchanged += 1;
                }
                Err(err) => {
                    log::error!("{err}");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}
