// gdbind-runtime: safe Rust API over gdbind-ffi.
// All unsafe FFI calls are confined to this crate. Generated façades and user
// code interact only with the types exported here.

pub mod api;
pub mod error;
mod sync;
pub mod logging;
pub mod ffi_guard;
pub mod math;
pub mod bridge;
pub mod call_frame;
pub mod pointer_registry;
pub mod builtin;
pub mod callable_registry;
pub mod bind;
pub mod object;
pub mod class_registry;
pub mod host_class;
pub mod signal;

// Re-export the primary public API surface.
pub use api::{api, init_api, is_api_initialized};
pub use error::{check_engine, BindError, BindResult};
pub use logging::{install_logger, EngineLogger};
pub use ffi_guard::{fatal, ffi_boundary};
pub use math::{Color, Vector2, Vector2i, Vector3};
pub use bridge::{size_of_return_slot, Bridge, EngineEnum, VariantBridge};
pub use call_frame::CallFrame;
pub use pointer_registry::Proxy;
pub use builtin::{
    Array, CallArgs, Callable, Dictionary, GString, NodePath, PackedArray, PackedByteArray,
    PackedColorArray, PackedElement, PackedFloat32Array, PackedFloat64Array, PackedInt32Array,
    PackedInt64Array, PackedStringArray, PackedVector2Array, PackedVector3Array, StringName,
    TypedArray, Variant,
};
pub use bind::{BindResolver, MethodBind};
pub use object::{
    adopt, check_override, construct, destroy, find_virtual, reference_count, upcast, upcast_ref,
    Borrowed, EngineClass, HasBase, Inherits, ObjectRef, Overridable, Ownership, RefHandle,
};
pub use class_registry::{try_cast, ClassRegistration, Singleton};
pub use host_class::{
    ArgBlock, ClassRecord, HostClass, HostClassRegistration, RetSlot, Subclass, VirtualRegistration,
    VirtualTable,
};

// Re-export FFI types needed by generated code in gdbind-classes.
pub use gdbind_ffi::{MethodBindPtr, ObjectPtr, VariantType};

// For generated and proc-macro emitted `inventory::submit!` invocations.
#[doc(hidden)]
pub use inventory as __inventory;
