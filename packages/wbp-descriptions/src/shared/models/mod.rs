//! Shared models

mod class_info;

pub use class_info::{
    ClassInfo, ConstructorInfo, FieldInfo, MethodInfo, Visibility, OBJECT_CLASS,
};
