//! Paginated root-stack listing
//!
//! `RootStacks` is a pull-based source: it fetches one page at a time
//! from the provider and hands out root stacks in listing order. Nested
//! stacks and stacks without a name are dropped at this layer. An
//! explicit loop follows continuation tokens, so deep accounts never
//! grow the call stack.

use std::collections::VecDeque;

use crate::error::Result;
use crate::model::StackSummary;
use crate::provider::StackProvider;

/// Lazy sequence of root stacks across all pages
pub struct RootStacks<'a, P: StackProvider + ?Sized> {
    provider: &'a P,
    buffer: VecDeque<StackSummary>,
    next_token: Option<String>,
    exhausted: bool,
}

impl<'a, P: StackProvider + ?Sized> RootStacks<'a, P> {
    /// Start a fresh traversal from the first page
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            buffer: VecDeque::new(),
            next_token: None,
            exhausted: false,
        }
    }

    /// Pull the next root stack, fetching further pages as needed.
    ///
    /// Returns `Ok(None)` once every page has been drained. A listing
    /// failure propagates to the caller and ends the traversal.
    pub async fn next(&mut self) -> Result<Option<StackSummary>> {
        loop {
            if let Some(stack) = self.buffer.pop_front() {
                return Ok(Some(stack));
            }
            if self.exhausted {
                return Ok(None);
            }

            log::debug!("Fetching stacks page (token: {:?})", self.next_token);
            let page = self
                .provider
                .describe_stacks_page(self.next_token.as_deref())
                .await?;

            self.next_token = page.next_token;
            self.exhausted = self.next_token.is_none();

            for stack in page.stacks {
                if stack.is_nested() {
                    log::debug!("Skipping nested stack {}", stack.name);
                    continue;
                }
                if stack.name.is_empty() {
                    continue;
                }
                self.buffer.push_back(stack);
            }
        }
    }
}
