//! JavaScript code generation modules.

pub mod accessors;
pub mod enums;
pub mod extensions;
pub mod fields;
pub mod messages;
pub mod namespace;
pub mod types;

pub use accessors::{AccessorKind, accessor_suffix, generate_accessors};
pub use enums::compile_enum;
pub use extensions::{ExtensionGroup, compile_extension};
pub use fields::{encode_field, encode_field_named};
pub use messages::compile_message;
pub use namespace::{NamespaceResolver, PackageRegistry, resolve_namespace};
pub use types::{display_type, render_default};
