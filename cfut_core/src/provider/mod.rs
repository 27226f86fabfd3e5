//! Provider abstraction over the cloud API
//!
//! The lister and the retag pipeline only see this trait; the concrete
//! CloudFormation client is constructed once at startup and injected.

pub mod cloudformation;

pub use cloudformation::CloudFormationProvider;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{StackPage, Tag};

/// Stack listing and tag-update operations offered by the cloud provider
#[async_trait]
pub trait StackProvider: Send + Sync {
    /// Fetch one page of stacks.
    ///
    /// Passing `None` fetches the first page; the returned page carries
    /// the continuation token for the next call, or `None` on the last
    /// page.
    async fn describe_stacks_page(&self, next_token: Option<&str>) -> Result<StackPage>;

    /// Re-apply tags to a stack without touching its template.
    ///
    /// The update must reuse the deployed template and every parameter's
    /// previous value; only the tag set is replaced. Returns
    /// [`Error::NoUpdates`](crate::error::Error::NoUpdates) when the
    /// provider reports that nothing would change.
    async fn update_stack_tags(
        &self,
        stack_name: &str,
        parameter_keys: &[String],
        tags: &[Tag],
    ) -> Result<()>;
}
