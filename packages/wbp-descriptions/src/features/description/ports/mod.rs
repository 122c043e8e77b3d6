//! Description ports
//!
//! Capabilities the resolver is handed at construction time instead of
//! discovering them globally:
//!
//! ```text
//! DescriptionResolver
//!     ├── DescriptionProcessor  (post-processing, in registration order)
//!     └── ParameterNameProvider (best-effort parameter names)
//! ```

use crate::errors::Result;
use crate::features::description::domain::ComponentDescription;

/// Hook run over every freshly resolved description
pub trait DescriptionProcessor: Send + Sync {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn process(&self, description: &mut ComponentDescription) -> Result<()>;
}

/// Source-level parameter names of a constructor or method.
///
/// Failures are swallowed by the caller; names are an enrichment only.
pub trait ParameterNameProvider: Send + Sync {
    /// Names of `signature` declared on `class_name`, `None` if unknown.
    fn parameter_names(&self, class_name: &str, signature: &str) -> Result<Option<Vec<String>>>;
}

impl<F> DescriptionProcessor for F
where
    F: Fn(&mut ComponentDescription) -> Result<()> + Send + Sync,
{
    fn process(&self, description: &mut ComponentDescription) -> Result<()> {
        self(description)
    }
}
