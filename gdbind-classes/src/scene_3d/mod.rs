// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod geometry_instance_3d;
pub mod mesh_instance_3d;
pub mod node_3d;
pub mod soft_body_3d;
pub mod visual_instance_3d;

pub use geometry_instance_3d::GeometryInstance3D;
pub use mesh_instance_3d::MeshInstance3D;
pub use node_3d::Node3D;
pub use soft_body_3d::SoftBody3D;
pub use visual_instance_3d::VisualInstance3D;
