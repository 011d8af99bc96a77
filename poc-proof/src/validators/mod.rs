//! Per-entry validators
//!
//! 1. **content_validator** - JSON parse + record schema checks (default)
//! 2. **extension_validator** - `.json` name check, content ignored

pub mod content_validator;
pub mod extension_validator;

pub use content_validator::ContentValidator;
pub use extension_validator::ExtensionValidator;

use crate::types::FileValidator;
use poc_common::ValidationPolicy;

/// Validator implementing the configured policy
pub fn for_policy(policy: ValidationPolicy) -> Box<dyn FileValidator> {
    match policy {
        ValidationPolicy::Content => Box::new(ContentValidator::new()),
        ValidationPolicy::Extension => Box::new(ExtensionValidator::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_policy_selects_validator() {
        assert_eq!(for_policy(ValidationPolicy::Content).name(), "ContentValidator");
        assert_eq!(for_policy(ValidationPolicy::Extension).name(), "ExtensionValidator");
    }
}
