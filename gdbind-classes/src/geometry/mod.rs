// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod geometry_2d;

pub use geometry_2d::{Geometry2D, GEOMETRY_2D};
