//! Data model for stacks, pages and tags
//!
//! These are read-only snapshots of provider state. A `StackSummary` is
//! never mutated locally; the only side effect in this tool is the
//! provider-side tag update.

/// Snapshot of a single CloudFormation stack as seen by the lister
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSummary {
    /// Stack name
    pub name: String,
    /// Identifier of the top-level root stack, present only for nested stacks
    pub root_id: Option<String>,
    /// Keys of the stack's current parameters, in declaration order
    pub parameter_keys: Vec<String>,
}

impl StackSummary {
    /// Check whether this stack was created as part of another stack's template
    pub fn is_nested(&self) -> bool {
        self.root_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// One page of stack summaries from a paginated listing call
#[derive(Debug, Clone, Default)]
pub struct StackPage {
    /// Stacks on this page, in listing order
    pub stacks: Vec<StackSummary>,
    /// Continuation token; `None` means this is the last page
    pub next_token: Option<String>,
}

/// A stack tag as a plain key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_detection() {
        let root = StackSummary {
            name: "inventory-base".to_string(),
            root_id: None,
            parameter_keys: vec![],
        };
        assert!(!root.is_nested());

        let nested = StackSummary {
            name: "inventory-base-NestedAlarm".to_string(),
            root_id: Some("arn:aws:cloudformation:eu-west-1:123:stack/inventory-base".to_string()),
            parameter_keys: vec![],
        };
        assert!(nested.is_nested());
    }

    #[test]
    fn test_empty_root_id_counts_as_root() {
        let stack = StackSummary {
            name: "inventory-base".to_string(),
            root_id: Some(String::new()),
            parameter_keys: vec![],
        };
        assert!(!stack.is_nested());
    }
}
