pub mod names;
pub mod wildcard;

pub use names::{
    canonical_name, class_resource_path, decapitalize, is_anonymous, member_signature,
    normalize_signature, package_of, short_name,
};
pub use wildcard::{wildcard_matches, wildcard_regex};
