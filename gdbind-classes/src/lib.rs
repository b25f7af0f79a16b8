// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

//! Generated engine class façades, one Cargo feature per module.

#[rustfmt::skip]
pub mod bind_table;
#[rustfmt::skip]
pub mod global_enums;
pub mod manual;
#[rustfmt::skip]
pub mod virtuals;

#[rustfmt::skip]
pub mod core;
pub use self::core::*;
#[cfg(feature = "audio")]
#[rustfmt::skip]
pub mod audio;
#[cfg(feature = "audio")]
pub use self::audio::*;
#[cfg(feature = "csg")]
#[rustfmt::skip]
pub mod csg;
#[cfg(feature = "csg")]
pub use self::csg::*;
#[cfg(feature = "geometry")]
#[rustfmt::skip]
pub mod geometry;
#[cfg(feature = "geometry")]
pub use self::geometry::*;
#[cfg(feature = "gui")]
#[rustfmt::skip]
pub mod gui;
#[cfg(feature = "gui")]
pub use self::gui::*;
#[cfg(feature = "navigation")]
#[rustfmt::skip]
pub mod navigation;
#[cfg(feature = "navigation")]
pub use self::navigation::*;
#[cfg(feature = "scene_2d")]
#[rustfmt::skip]
pub mod scene_2d;
#[cfg(feature = "scene_2d")]
pub use self::scene_2d::*;
#[cfg(feature = "scene_3d")]
#[rustfmt::skip]
pub mod scene_3d;
#[cfg(feature = "scene_3d")]
pub use self::scene_3d::*;

pub use bind_table::load_method_binds;
pub use global_enums::*;
