//! Morphing targets and exposing rules.

use crate::shared::utils::wildcard_matches;
use serde::Serialize;

/// Alternate component type a component can be converted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphingTargetDescription {
    pub class_name: String,
    pub creation_id: Option<String>,
}

/// Include/exclude filter for children exposed through getter methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExposingRule {
    pub include: bool,
    /// Package pattern of the exposing method's declaring class, `*` wildcards
    pub package: Option<String>,
    /// Method name pattern, `*` wildcards
    pub method: Option<String>,
}

impl ExposingRule {
    /// `Some(include)` if the rule applies to the method, `None` otherwise.
    pub fn filter(&self, package: &str, method: &str) -> Option<bool> {
        if let Some(pattern) = &self.package {
            if !wildcard_matches(pattern, package) {
                return None;
            }
        }
        if let Some(pattern) = &self.method {
            if !wildcard_matches(pattern, method) {
                return None;
            }
        }
        Some(self.include)
    }
}
