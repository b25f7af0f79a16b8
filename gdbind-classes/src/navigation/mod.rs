// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod navigation_mesh;

pub use navigation_mesh::NavigationMesh;
