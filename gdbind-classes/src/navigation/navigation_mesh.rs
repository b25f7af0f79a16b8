// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Object;
use crate::RefCounted;
use crate::Resource;

/// Engine class `NavigationMesh` (inherits `Resource`).
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NavigationMesh(RefHandle);

impl EngineClass for NavigationMesh {
    const CLASS_NAME: &'static str = "NavigationMesh";
    const REF_COUNTED: bool = true;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        NavigationMesh(unsafe { RefHandle::adopt(ptr) })
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_setup_local_to_scene> for NavigationMesh {
    type Signature = fn();
}

impl HasBase for NavigationMesh {
    type Base = Resource;
}

unsafe impl Inherits<Resource> for NavigationMesh {}
unsafe impl Inherits<RefCounted> for NavigationMesh {}
unsafe impl Inherits<Object> for NavigationMesh {}

impl Deref for NavigationMesh {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<NavigationMesh>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "NavigationMesh", parent: Some("Resource"), ref_counted: true, construct: wrap_handle }
}

impl NavigationMesh {
    pub const NIL: Self = NavigationMesh(RefHandle::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_resource(&self) -> &Resource {
        upcast_ref(self)
    }

    pub fn as_ref_counted(&self) -> &RefCounted {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `vertices`.
    pub fn vertices(&self) -> Vec<Vector3> {
        self.advanced().get_vertices().to_vec()
    }

    pub fn set_vertices(&self, value: &[Vector3]) {
        self.advanced().set_vertices(&PackedVector3Array::from_slice(value))
    }

    /// Property `agent_radius`.
    pub fn agent_radius(&self) -> f64 {
        self.advanced().get_agent_radius()
    }

    pub fn set_agent_radius(&self, value: f64) {
        self.advanced().set_agent_radius(value)
    }

    /// Property `cell_size`.
    pub fn cell_size(&self) -> f64 {
        self.advanced().get_cell_size()
    }

    pub fn set_cell_size(&self, value: f64) {
        self.advanced().set_cell_size(value)
    }

    /// Property `agent_height`.
    pub fn agent_height(&self) -> f64 {
        self.advanced().get_agent_height()
    }

    pub fn set_agent_height(&self, value: f64) {
        self.advanced().set_agent_height(value)
    }

    /// Property `parsed_geometry_type`.
    pub fn parsed_geometry_type(&self) -> crate::navigation::navigation_mesh::ParsedGeometryType {
        self.advanced().get_parsed_geometry_type()
    }

    pub fn set_parsed_geometry_type(&self, value: crate::navigation::navigation_mesh::ParsedGeometryType) {
        self.advanced().set_parsed_geometry_type(value)
    }

    pub fn add_polygon(&self, polygon: &[i32]) {
        self.advanced().add_polygon(&PackedInt32Array::from_slice(polygon))
    }

    pub fn get_polygon_count(&self) -> i64 {
        self.advanced().get_polygon_count()
    }

    pub fn get_polygon(&self, idx: i32) -> Vec<i32> {
        self.advanced().get_polygon(idx).to_vec()
    }

    pub fn clear_polygons(&self) {
        self.advanced().clear_polygons()
    }

    pub fn clear(&self) {
        self.advanced().clear()
    }
}

/// Raw surface of [`NavigationMesh`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(NavigationMesh);

impl Advanced {
    pub fn instance(&self) -> &NavigationMesh {
        &self.0
    }

    pub fn set_vertices(&self, vertices: &PackedVector3Array) {
        let mut frame = CallFrame::new();
        frame.arg(vertices);
        unsafe { frame.call(binds().navigation_mesh.set_vertices, self.0.handle()) }
    }

    pub fn get_vertices(&self) -> PackedVector3Array {
        unsafe { CallFrame::new().call_ret(binds().navigation_mesh.get_vertices, self.0.handle()) }
    }

    pub fn set_agent_radius(&self, agent_radius: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&agent_radius);
        unsafe { frame.call(binds().navigation_mesh.set_agent_radius, self.0.handle()) }
    }

    pub fn get_agent_radius(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().navigation_mesh.get_agent_radius, self.0.handle()) }
    }

    pub fn set_cell_size(&self, cell_size: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&cell_size);
        unsafe { frame.call(binds().navigation_mesh.set_cell_size, self.0.handle()) }
    }

    pub fn get_cell_size(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().navigation_mesh.get_cell_size, self.0.handle()) }
    }

    pub fn set_agent_height(&self, agent_height: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&agent_height);
        unsafe { frame.call(binds().navigation_mesh.set_agent_height, self.0.handle()) }
    }

    pub fn get_agent_height(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().navigation_mesh.get_agent_height, self.0.handle()) }
    }

    pub fn set_parsed_geometry_type(&self, parsed_geometry_type: crate::navigation::navigation_mesh::ParsedGeometryType) {
        let mut frame = CallFrame::new();
        frame.arg(&parsed_geometry_type);
        unsafe { frame.call(binds().navigation_mesh.set_parsed_geometry_type, self.0.handle()) }
    }

    pub fn get_parsed_geometry_type(&self) -> crate::navigation::navigation_mesh::ParsedGeometryType {
        unsafe { CallFrame::new().call_ret(binds().navigation_mesh.get_parsed_geometry_type, self.0.handle()) }
    }

    pub fn add_polygon(&self, polygon: &PackedInt32Array) {
        let mut frame = CallFrame::new();
        frame.arg(polygon);
        unsafe { frame.call(binds().navigation_mesh.add_polygon, self.0.handle()) }
    }

    pub fn get_polygon_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().navigation_mesh.get_polygon_count, self.0.handle()) }
    }

    pub fn get_polygon(&self, idx: i32) -> PackedInt32Array {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(idx));
        unsafe { frame.call_ret(binds().navigation_mesh.get_polygon, self.0.handle()) }
    }

    pub fn clear_polygons(&self) {
        unsafe { CallFrame::new().call(binds().navigation_mesh.clear_polygons, self.0.handle()) }
    }

    pub fn clear(&self) {
        unsafe { CallFrame::new().call(binds().navigation_mesh.clear, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::core::resource::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_resource().advanced()
    }
}

/// Engine enum `NavigationMesh.ParsedGeometryType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParsedGeometryType(i64);

impl ParsedGeometryType {
    pub const MESH_INSTANCES: ParsedGeometryType = ParsedGeometryType(0);
    pub const STATIC_COLLIDERS: ParsedGeometryType = ParsedGeometryType(1);
    pub const BOTH: ParsedGeometryType = ParsedGeometryType(2);
}

impl EngineEnum for ParsedGeometryType {
    const NAME: &'static str = "NavigationMesh.ParsedGeometryType";

    fn ord(self) -> i64 {
        self.0
    }

    fn from_ord(ord: i64) -> Self {
        ParsedGeometryType(ord)
    }
}
