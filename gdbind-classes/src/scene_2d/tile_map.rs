// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::CanvasItem;
use crate::Node;
use crate::Node2D;
use crate::Object;

/// Engine class `TileMap` (inherits `Node2D`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TileMap(ObjectRef);

impl EngineClass for TileMap {
    const CLASS_NAME: &'static str = "TileMap";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &["_use_tile_data_runtime_update"];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        TileMap(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_use_tile_data_runtime_update> for TileMap {
    type Signature = fn(i32, Vector2i) -> bool;
}

impl Overridable<crate::virtuals::_draw> for TileMap {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_ready> for TileMap {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_process> for TileMap {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_physics_process> for TileMap {
    type Signature = fn(f64);
}

impl Overridable<crate::virtuals::_enter_tree> for TileMap {
    type Signature = fn();
}

impl Overridable<crate::virtuals::_exit_tree> for TileMap {
    type Signature = fn();
}

impl HasBase for TileMap {
    type Base = Node2D;
}

unsafe impl Inherits<Node2D> for TileMap {}
unsafe impl Inherits<CanvasItem> for TileMap {}
unsafe impl Inherits<Node> for TileMap {}
unsafe impl Inherits<Object> for TileMap {}

impl Deref for TileMap {
    type Target = Node2D;

    fn deref(&self) -> &Node2D {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<TileMap>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "TileMap", parent: Some("Node2D"), ref_counted: false, construct: wrap_handle }
}

impl TileMap {
    pub const NIL: Self = TileMap(ObjectRef::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_node_2d(&self) -> &Node2D {
        upcast_ref(self)
    }

    pub fn as_canvas_item(&self) -> &CanvasItem {
        upcast_ref(self)
    }

    pub fn as_node(&self) -> &Node {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `rendering_quadrant_size`.
    pub fn rendering_quadrant_size(&self) -> i64 {
        self.advanced().get_rendering_quadrant_size()
    }

    pub fn set_rendering_quadrant_size(&self, value: i64) {
        self.advanced().set_rendering_quadrant_size(value)
    }

    pub fn set_cell(&self, layer: i32, coords: Vector2i, source_id: i32, atlas_coords: Vector2i, alternative_tile: i32) {
        self.advanced().set_cell(layer, coords, source_id, atlas_coords, alternative_tile)
    }

    pub fn erase_cell(&self, layer: i32, coords: Vector2i) {
        self.advanced().erase_cell(layer, coords)
    }

    pub fn get_cell_source_id(&self, layer: i32, coords: Vector2i, use_proxies: bool) -> i64 {
        self.advanced().get_cell_source_id(layer, coords, use_proxies)
    }

    pub fn get_cell_atlas_coords(&self, layer: i32, coords: Vector2i, use_proxies: bool) -> Vector2i {
        self.advanced().get_cell_atlas_coords(layer, coords, use_proxies)
    }

    pub fn get_used_cells(&self, layer: i32) -> Vec<Vector2i> {
        self.advanced().get_used_cells(layer).to_vec()
    }

    pub fn clear_layer(&self, layer: i32) {
        self.advanced().clear_layer(layer)
    }

    pub fn clear(&self) {
        self.advanced().clear()
    }

    pub fn get_layers_count(&self) -> i64 {
        self.advanced().get_layers_count()
    }

    pub fn add_layer(&self, to_position: i32) {
        self.advanced().add_layer(to_position)
    }

    /// Connect `f` to the `changed` signal.
    pub fn on_changed(&self, mut f: impl FnMut() + 'static) -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), "changed", move |_| {
            f();
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
}

/// Raw surface of [`TileMap`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(TileMap);

impl Advanced {
    pub fn instance(&self) -> &TileMap {
        &self.0
    }

    pub fn set_rendering_quadrant_size(&self, rendering_quadrant_size: i64) {
        let mut frame = CallFrame::new();
        frame.arg(&rendering_quadrant_size);
        unsafe { frame.call(binds().tile_map.set_rendering_quadrant_size, self.0.handle()) }
    }

    pub fn get_rendering_quadrant_size(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().tile_map.get_rendering_quadrant_size, self.0.handle()) }
    }

    pub fn set_cell(&self, layer: i32, coords: Vector2i, source_id: i32, atlas_coords: Vector2i, alternative_tile: i32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(layer)).arg(&coords).arg(&i64::from(source_id)).arg(&atlas_coords).arg(&i64::from(alternative_tile));
        unsafe { frame.call(binds().tile_map.set_cell, self.0.handle()) }
    }

    pub fn erase_cell(&self, layer: i32, coords: Vector2i) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(layer)).arg(&coords);
        unsafe { frame.call(binds().tile_map.erase_cell, self.0.handle()) }
    }

    pub fn get_cell_source_id(&self, layer: i32, coords: Vector2i, use_proxies: bool) -> i64 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(layer)).arg(&coords).arg(&use_proxies);
        unsafe { frame.call_ret(binds().tile_map.get_cell_source_id, self.0.handle()) }
    }

    pub fn get_cell_atlas_coords(&self, layer: i32, coords: Vector2i, use_proxies: bool) -> Vector2i {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(layer)).arg(&coords).arg(&use_proxies);
        unsafe { frame.call_ret(binds().tile_map.get_cell_atlas_coords, self.0.handle()) }
    }

    pub fn get_used_cells(&self, layer: i32) -> TypedArray<Vector2i> {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(layer));
        unsafe { frame.call_ret(binds().tile_map.get_used_cells, self.0.handle()) }
    }

    pub fn clear_layer(&self, layer: i32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(layer));
        unsafe { frame.call(binds().tile_map.clear_layer, self.0.handle()) }
    }

    pub fn clear(&self) {
        unsafe { CallFrame::new().call(binds().tile_map.clear, self.0.handle()) }
    }

    pub fn get_layers_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().tile_map.get_layers_count, self.0.handle()) }
    }

    pub fn add_layer(&self, to_position: i32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(to_position));
        unsafe { frame.call(binds().tile_map.add_layer, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::scene_2d::node_2d::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_node_2d().advanced()
    }
}
