// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod node;
pub mod object;
pub mod ref_counted;
pub mod resource;

pub use node::Node;
pub use object::Object;
pub use ref_counted::RefCounted;
pub use resource::Resource;
