//! Fixed tag vocabulary
//!
//! Every matched stack receives the same five tags. Pillar, Domain and
//! Team are constant for the run; Environment and Function come from the
//! name classifier.

use crate::classify::Classification;
use crate::model::Tag;

pub const PILLAR: &str = "hs";
pub const DOMAIN: &str = "identity";
pub const TEAM: &str = "matching";

/// Build the five-entry tag set for a classified stack
pub fn build_tags(classification: &Classification) -> Vec<Tag> {
    vec![
        Tag::new("Pillar", PILLAR),
        Tag::new("Domain", DOMAIN),
        Tag::new("Team", TEAM),
        Tag::new("Environment", classification.environment_label()),
        Tag::new("Function", classification.function.as_str()),
    ]
}
