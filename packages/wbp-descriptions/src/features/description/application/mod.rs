pub mod default_creation;
pub mod merge;
pub mod resolver;

pub use default_creation::{configure_default_creation, default_constructor_invocation, default_value};
pub use merge::{apply_layer, finish_layer, new_description, MergeContext};
pub use resolver::{
    DescriptionResolver, DescriptionResolverBuilder, FactoryMethodRef, ParameterRef,
    ResolverOptions, DONT_CACHE_PARAMETER,
};
