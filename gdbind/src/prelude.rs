// Prelude: one-import access to the types most host code touches.
//
// Usage: `use gdbind::prelude::*;`

// Runtime surface
pub use gdbind_runtime::{
    try_cast, upcast, upcast_ref, BindError, BindResult, EngineClass, EngineEnum, Inherits,
    Subclass,
};

// Value carriers
pub use gdbind_runtime::{
    Array, Callable, Dictionary, GString, NodePath, PackedByteArray, PackedFloat32Array,
    PackedInt32Array, PackedStringArray, PackedVector2Array, PackedVector3Array, StringName,
    TypedArray, Variant,
};

// Engine math
pub use gdbind_runtime::{Color, Vector2, Vector2i, Vector3};

// Proc macros
pub use gdbind_macros::{gdclass, gdclass_impl};

// Always-on engine classes
pub use gdbind_classes::{Error, Node, Object, RefCounted, Resource};

// Engine classes (feature-gated)
#[cfg(feature = "audio")]
pub use gdbind_classes::audio::*;
#[cfg(feature = "csg")]
pub use gdbind_classes::csg::*;
#[cfg(feature = "geometry")]
pub use gdbind_classes::geometry::*;
#[cfg(feature = "gui")]
pub use gdbind_classes::gui::*;
#[cfg(feature = "navigation")]
pub use gdbind_classes::navigation::*;
#[cfg(feature = "scene_2d")]
pub use gdbind_classes::scene_2d::*;
#[cfg(feature = "scene_3d")]
pub use gdbind_classes::scene_3d::*;
