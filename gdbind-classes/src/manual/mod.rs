// Hand-written extensions to the generated façades. The generator never
// touches this directory.

pub mod node_ext;
pub mod object_ext;
