// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod csg_primitive_3d;
pub mod csg_shape_3d;
pub mod csg_torus_3d;

pub use csg_primitive_3d::CSGPrimitive3D;
pub use csg_shape_3d::CSGShape3D;
pub use csg_torus_3d::CSGTorus3D;
