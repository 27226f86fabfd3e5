//! Stack name classification
//!
//! By convention a stack name carries its function and environment as
//! `<prefix>--<function>--<environment>`. Names outside that convention
//! are base stacks: function `base`, environment rendered as `n/a`.
//!
//! After extraction the raw function token runs through an ordered
//! rewrite table that collapses per-service prefixes into canonical team
//! names, so stacks can be grouped by product. Rules apply in sequence,
//! each rule's output feeding the next.

use regex::Regex;

use crate::error::{Error, Result};

/// Function token used when a stack name does not follow the convention
pub const BASE_FUNCTION: &str = "base";

/// Environment label used when no environment could be extracted
pub const UNKNOWN_ENVIRONMENT: &str = "n/a";

/// Ordered prefix rewrite table for function tokens.
///
/// Note that `matchbox-` and `matching-` both collapse to `matchbox`.
pub const REWRITE_RULES: &[(&str, &str)] = &[
    ("matcher-", "matcher"),
    ("sink-", "sink"),
    ("crowd-", "crowd"),
    ("matchbox-", "matchbox"),
    ("matching-", "matchbox"),
];

/// Function/environment pair derived from a stack name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Canonical function token after rewrite rules
    pub function: String,
    /// Captured environment token, `None` for base stacks
    pub environment: Option<String>,
}

impl Classification {
    /// Environment as rendered in the tag set
    pub fn environment_label(&self) -> &str {
        self.environment.as_deref().unwrap_or(UNKNOWN_ENVIRONMENT)
    }
}

/// Classifier holding the compiled name pattern and rewrite table
#[derive(Debug)]
pub struct Classifier {
    name_pattern: Regex,
    rewrites: Vec<(String, String)>,
}

impl Classifier {
    /// Create a classifier with the default rewrite table
    pub fn new() -> Result<Self> {
        Self::with_rewrites(REWRITE_RULES)
    }

    /// Create a classifier with an explicit ordered rewrite table
    pub fn with_rewrites(rules: &[(&str, &str)]) -> Result<Self> {
        let name_pattern = Regex::new(r"^(\w+)--([\w-]+)--(\w+)")
            .map_err(|e| Error::invalid_pattern(e.to_string()))?;

        Ok(Self {
            name_pattern,
            rewrites: rules
                .iter()
                .map(|(prefix, canonical)| (prefix.to_string(), canonical.to_string()))
                .collect(),
        })
    }

    /// Derive function and environment from a stack name
    pub fn classify(&self, stack_name: &str) -> Classification {
        let (raw_function, environment) = match self.name_pattern.captures(stack_name) {
            Some(caps) => (caps[2].to_string(), Some(caps[3].to_string())),
            None => (BASE_FUNCTION.to_string(), None),
        };

        let mut function = raw_function;
        for (prefix, canonical) in &self.rewrites {
            if function.starts_with(prefix.as_str()) {
                function = canonical.clone();
            }
        }

        Classification {
            function,
            environment,
        }
    }
}
