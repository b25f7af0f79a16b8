// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::Object;

/// Engine class `Geometry2D` (inherits `Object`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Geometry2D(ObjectRef);

impl EngineClass for Geometry2D {
    const CLASS_NAME: &'static str = "Geometry2D";
    const REF_COUNTED: bool = false;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        Geometry2D(ObjectRef::from_ptr(ptr))
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl HasBase for Geometry2D {
    type Base = Object;
}

unsafe impl Inherits<Object> for Geometry2D {}

impl Deref for Geometry2D {
    type Target = Object;

    fn deref(&self) -> &Object {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<Geometry2D>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "Geometry2D", parent: Some("Object"), ref_counted: false, construct: wrap_handle }
}

/// The engine's `Geometry2D` singleton, fetched on first use.
pub static GEOMETRY_2D: Singleton<Geometry2D> = Singleton::new("Geometry2D");

impl Geometry2D {
    pub const NIL: Self = Geometry2D(ObjectRef::NIL);

    pub fn singleton() -> Self {
        GEOMETRY_2D.get()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    pub fn is_polygon_clockwise(&self, polygon: &[Vector2]) -> bool {
        self.advanced().is_polygon_clockwise(&PackedVector2Array::from_slice(polygon))
    }

    pub fn is_point_in_circle(&self, point: Vector2, circle_position: Vector2, circle_radius: f32) -> bool {
        self.advanced().is_point_in_circle(point, circle_position, circle_radius)
    }

    pub fn is_point_in_polygon(&self, point: Vector2, polygon: &[Vector2]) -> bool {
        self.advanced().is_point_in_polygon(point, &PackedVector2Array::from_slice(polygon))
    }

    pub fn triangulate_polygon(&self, polygon: &[Vector2]) -> Vec<i32> {
        self.advanced().triangulate_polygon(&PackedVector2Array::from_slice(polygon)).to_vec()
    }

    pub fn get_closest_point_to_segment(&self, point: Vector2, s_1: Vector2, s_2: Vector2) -> Vector2 {
        self.advanced().get_closest_point_to_segment(point, s_1, s_2)
    }
}

/// Raw surface of [`Geometry2D`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(Geometry2D);

impl Advanced {
    pub fn instance(&self) -> &Geometry2D {
        &self.0
    }

    pub fn is_polygon_clockwise(&self, polygon: &PackedVector2Array) -> bool {
        let mut frame = CallFrame::new();
        frame.arg(polygon);
        unsafe { frame.call_ret(binds().geometry_2d.is_polygon_clockwise, self.0.handle()) }
    }

    pub fn is_point_in_circle(&self, point: Vector2, circle_position: Vector2, circle_radius: f32) -> bool {
        let mut frame = CallFrame::new();
        frame.arg(&point).arg(&circle_position).arg(&f64::from(circle_radius));
        unsafe { frame.call_ret(binds().geometry_2d.is_point_in_circle, self.0.handle()) }
    }

    pub fn is_point_in_polygon(&self, point: Vector2, polygon: &PackedVector2Array) -> bool {
        let mut frame = CallFrame::new();
        frame.arg(&point).arg(polygon);
        unsafe { frame.call_ret(binds().geometry_2d.is_point_in_polygon, self.0.handle()) }
    }

    pub fn triangulate_polygon(&self, polygon: &PackedVector2Array) -> PackedInt32Array {
        let mut frame = CallFrame::new();
        frame.arg(polygon);
        unsafe { frame.call_ret(binds().geometry_2d.triangulate_polygon, self.0.handle()) }
    }

    pub fn get_closest_point_to_segment(&self, point: Vector2, s_1: Vector2, s_2: Vector2) -> Vector2 {
        let mut frame = CallFrame::new();
        frame.arg(&point).arg(&s_1).arg(&s_2);
        unsafe { frame.call_ret(binds().geometry_2d.get_closest_point_to_segment, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::core::object::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_object().advanced()
    }
}
