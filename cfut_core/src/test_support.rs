//! Scriptable provider double for unit tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::model::{StackPage, StackSummary, Tag};
use crate::provider::StackProvider;

/// Outcome scripted for a single stack's update call
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    Ok,
    NoUpdates,
    Fail(String),
}

/// One recorded `update_stack_tags` invocation
#[derive(Debug, Clone)]
pub struct UpdateCall {
    pub stack: String,
    pub parameter_keys: Vec<String>,
    pub tags: Vec<Tag>,
}

/// Provider double that serves pre-scripted pages and records updates
pub struct ScriptedProvider {
    pages: Mutex<VecDeque<StackPage>>,
    list_error: Option<String>,
    requested_tokens: Mutex<Vec<Option<String>>>,
    update_outcomes: HashMap<String, UpdateOutcome>,
    update_calls: Mutex<Vec<UpdateCall>>,
}

impl ScriptedProvider {
    pub fn new(pages: Vec<StackPage>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            list_error: None,
            requested_tokens: Mutex::new(Vec::new()),
            update_outcomes: HashMap::new(),
            update_calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose listing call always fails
    pub fn failing(message: impl Into<String>) -> Self {
        let mut provider = Self::new(vec![]);
        provider.list_error = Some(message.into());
        provider
    }

    /// Script the outcome of the update call for one stack
    pub fn with_update_outcome(mut self, stack: impl Into<String>, outcome: UpdateOutcome) -> Self {
        self.update_outcomes.insert(stack.into(), outcome);
        self
    }

    /// Continuation tokens seen by the listing call, in order
    pub fn requested_tokens(&self) -> Vec<Option<String>> {
        self.requested_tokens.lock().unwrap().clone()
    }

    /// Update invocations recorded so far, in order
    pub fn update_calls(&self) -> Vec<UpdateCall> {
        self.update_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StackProvider for ScriptedProvider {
    async fn describe_stacks_page(&self, next_token: Option<&str>) -> Result<StackPage> {
        self.requested_tokens
            .lock()
            .unwrap()
            .push(next_token.map(str::to_string));

        if let Some(message) = &self.list_error {
            return Err(Error::provider(message.clone()));
        }

        Ok(self.pages.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn update_stack_tags(
        &self,
        stack_name: &str,
        parameter_keys: &[String],
        tags: &[Tag],
    ) -> Result<()> {
        self.update_calls.lock().unwrap().push(UpdateCall {
            stack: stack_name.to_string(),
            parameter_keys: parameter_keys.to_vec(),
            tags: tags.to_vec(),
        });

        match self.update_outcomes.get(stack_name) {
            None | Some(UpdateOutcome::Ok) => Ok(()),
            Some(UpdateOutcome::NoUpdates) => Err(Error::no_updates(stack_name)),
            Some(UpdateOutcome::Fail(message)) => Err(Error::update(stack_name, message.clone())),
        }
    }
}

/// Root stack summary without parameters
pub fn root(name: &str) -> StackSummary {
    StackSummary {
        name: name.to_string(),
        root_id: None,
        parameter_keys: vec![],
    }
}

/// Root stack summary with the given parameter keys
pub fn root_with_params(name: &str, keys: &[&str]) -> StackSummary {
    StackSummary {
        name: name.to_string(),
        root_id: None,
        parameter_keys: keys.iter().map(|k| k.to_string()).collect(),
    }
}

/// Page of summaries with an optional continuation token
pub fn scripted_page(stacks: Vec<StackSummary>, next_token: Option<&str>) -> StackPage {
    StackPage {
        stacks,
        next_token: next_token.map(str::to_string),
    }
}
