//! CloudFormation-backed provider implementation
//!
//! Wraps the AWS SDK client and maps its error surface into the core
//! taxonomy. Updates are template-preserving: `UsePreviousTemplate` plus
//! `UsePreviousValue` on every parameter, so only the tag set changes.

use async_trait::async_trait;
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::types::{Capability, Parameter, Tag as CfnTag};

use crate::error::{Error, Result};
use crate::model::{StackPage, StackSummary, Tag};
use crate::provider::StackProvider;

/// Service message emitted when an update would change nothing.
///
/// CloudFormation reports this as a generic validation error, so the
/// match is on the message text rather than an error code.
const NO_UPDATES_MESSAGE: &str = "no updates are to be performed";

/// [`StackProvider`] backed by the AWS CloudFormation API
#[derive(Debug, Clone)]
pub struct CloudFormationProvider {
    client: Client,
}

impl CloudFormationProvider {
    /// Wrap an already-configured SDK client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StackProvider for CloudFormationProvider {
    async fn describe_stacks_page(&self, next_token: Option<&str>) -> Result<StackPage> {
        let output = self
            .client
            .describe_stacks()
            .set_next_token(next_token.map(str::to_string))
            .send()
            .await
            .map_err(|err| Error::provider(service_message(&err)))?;

        let stacks = output
            .stacks()
            .iter()
            .map(|stack| StackSummary {
                name: stack.stack_name().unwrap_or_default().to_string(),
                root_id: stack.root_id().map(str::to_string),
                parameter_keys: stack
                    .parameters()
                    .iter()
                    .filter_map(|p| p.parameter_key())
                    .map(str::to_string)
                    .collect(),
            })
            .collect();

        Ok(StackPage {
            stacks,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn update_stack_tags(
        &self,
        stack_name: &str,
        parameter_keys: &[String],
        tags: &[Tag],
    ) -> Result<()> {
        let cfn_tags =
            cfn_tags(tags).map_err(|err| Error::update(stack_name, err.to_string()))?;

        let result = self
            .client
            .update_stack()
            .stack_name(stack_name)
            .use_previous_template(true)
            .set_parameters(Some(previous_value_params(parameter_keys)))
            .capabilities(Capability::CapabilityNamedIam)
            .set_tags(Some(cfn_tags))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let message = service_message(&err);
                if message.to_ascii_lowercase().contains(NO_UPDATES_MESSAGE) {
                    Err(Error::no_updates(stack_name))
                } else {
                    Err(Error::update(stack_name, message))
                }
            }
        }
    }
}

/// Build the parameter list for a tag-only update.
///
/// Every parameter carries its key and the use-previous-value flag and
/// never an explicit value.
fn previous_value_params(parameter_keys: &[String]) -> Vec<Parameter> {
    parameter_keys
        .iter()
        .map(|key| {
            Parameter::builder()
                .parameter_key(key)
                .use_previous_value(true)
                .build()
        })
        .collect()
}

fn cfn_tags(tags: &[Tag]) -> std::result::Result<Vec<CfnTag>, BuildError> {
    tags.iter()
        .map(|tag| {
            Ok(CfnTag::builder()
                .key(tag.key.as_str())
                .value(tag.value.as_str())
                .build())
        })
        .collect()
}

/// Extract the service error message, falling back to the full error
/// chain for dispatch/connector failures that carry no service metadata.
fn service_message<E>(err: &E) -> String
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err.message() {
        Some(message) => message.to_string(),
        None => format!("{}", DisplayErrorContext(err)),
    }
}
