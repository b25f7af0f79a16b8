// Object handles: the single-word roots every generated façade wraps.
//
// Non-refcounted classes wrap an `ObjectRef` (Copy, non-owning, like a raw
// engine pointer). Refcounted classes wrap a `RefHandle`, which owns exactly
// one engine reference and one pointer-registry carrier. Both are one
// `ObjectPtr` wide, so a façade reference can be reinterpreted as any
// ancestor façade reference.

use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::Deref;

use gdbind_ffi::ObjectPtr;

use crate::api::{classdb_api, ffi_len, object_api};
use crate::pointer_registry;

/// Implemented by every generated façade (and nothing else).
pub trait EngineClass: Sized + 'static {
    /// Engine class name, e.g. `"CSGTorus3D"`.
    const CLASS_NAME: &'static str;

    /// Whether `RefCounted` is in the class chain.
    const REF_COUNTED: bool;

    /// Overridables declared directly on this class (not inherited).
    const VIRTUALS: &'static [&'static str];

    /// Wrap a raw handle.
    ///
    /// # Safety
    /// `ptr` must be null or a live object of this class or a subclass. For
    /// refcounted classes the caller hands one engine reference to the new
    /// façade; see [`adopt`] for the checked entry point.
    unsafe fn from_handle(ptr: ObjectPtr) -> Self;

    /// The engine handle. Null for the nil sentinel.
    fn handle(&self) -> ObjectPtr;

    fn is_nil(&self) -> bool {
        self.handle().is_null()
    }

    /// Name of the class in this chain that declares the overridable `name`.
    /// Recurses from this class to the root.
    fn virtual_owner(name: &str) -> Option<&'static str>;
}

/// Typed signature of the overridable `M` as `Self` inherits it. Codegen
/// emits one impl per class and overridable in its chain; `M` is a marker
/// named after the overridable.
pub trait Overridable<M>: EngineClass {
    /// `fn(params) -> ret` in the types an override takes and returns.
    type Signature;
}

/// Compiles only when `S` is the declared signature of `M` on `B`. The
/// `#[gdclass_impl]` expansion calls this once per override.
#[doc(hidden)]
pub const fn check_override<B: Overridable<M>, M>(_: PhantomData<B::Signature>) {}

/// Declares the immediate engine parent. Codegen emits one impl per class
/// except the root.
pub trait HasBase: EngineClass {
    type Base: EngineClass;
}

/// `Self` is `B` or derives from it.
///
/// # Safety
/// Only implement when `B` is in `Self`'s class chain and both are
/// single-word façades.
pub unsafe trait Inherits<B: EngineClass>: EngineClass {}

unsafe impl<T: EngineClass> Inherits<T> for T {}

/// Zero-cost upcast of a borrowed façade.
#[inline]
pub fn upcast_ref<T: Inherits<B>, B: EngineClass>(value: &T) -> &B {
    // SAFETY: every façade is `#[repr(transparent)]` over one `ObjectPtr`,
    // and `Inherits` guarantees the class relation.
    unsafe { &*(value as *const T).cast::<B>() }
}

/// Zero-cost upcast that moves the carrier. Refcounted façades can only be
/// moved into refcounted ancestors; use [`upcast_ref`] to view them as
/// `Object`.
#[inline]
pub fn upcast<T: Inherits<B>, B: EngineClass>(value: T) -> B {
    const {
        assert!(T::REF_COUNTED == B::REF_COUNTED, "owned upcast must keep the refcount policy")
    };
    let value = ManuallyDrop::new(value);
    // SAFETY: same layout as above; the original is never dropped, so the
    // reference it owned moves to the result.
    unsafe { std::ptr::read((&*value as *const T).cast::<B>()) }
}

/// Name of the class in `T`'s chain declaring `name`, consulting `T`'s own
/// list before its base. Generated `virtual_owner` impls delegate here.
pub fn find_virtual<T: HasBase>(name: &str) -> Option<&'static str> {
    if T::VIRTUALS.contains(&name) {
        Some(T::CLASS_NAME)
    } else {
        T::Base::virtual_owner(name)
    }
}

// ---------------------------------------------------------------------------
// ObjectRef
// ---------------------------------------------------------------------------

/// Non-owning handle. The engine (or explicit `free`) decides the lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ObjectRef {
    ptr: ObjectPtr,
    _not_send: PhantomData<*const ()>,
}

impl ObjectRef {
    pub const NIL: ObjectRef = ObjectRef { ptr: ObjectPtr::NULL, _not_send: PhantomData };

    #[inline]
    pub fn from_ptr(ptr: ObjectPtr) -> Self {
        ObjectRef { ptr, _not_send: PhantomData }
    }

    #[inline]
    pub fn ptr(&self) -> ObjectPtr {
        self.ptr
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.ptr.is_null()
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({:#x})", self.ptr.addr())
    }
}

// ---------------------------------------------------------------------------
// RefHandle
// ---------------------------------------------------------------------------

/// Owning handle to a refcounted object.
///
/// Holds one engine reference and one pointer-registry carrier. `clone`
/// takes one more of each, `drop` releases one of each and destroys the
/// object when the engine count reaches zero. The nil handle owns nothing.
#[repr(transparent)]
pub struct RefHandle {
    ptr: ObjectPtr,
    _not_send: PhantomData<*const ()>,
}

impl RefHandle {
    pub const NIL: RefHandle = RefHandle { ptr: ObjectPtr::NULL, _not_send: PhantomData };

    /// Take over one engine reference the caller already holds.
    ///
    /// # Safety
    /// `ptr` must be null or a live refcounted object whose count includes
    /// the reference being handed over.
    pub unsafe fn adopt(ptr: ObjectPtr) -> Self {
        if !ptr.is_null() {
            pointer_registry::retain(ptr);
        }
        RefHandle { ptr, _not_send: PhantomData }
    }

    #[inline]
    pub fn ptr(&self) -> ObjectPtr {
        self.ptr
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.ptr.is_null()
    }

    /// Registry identity of the handle. `None` for nil or freed objects.
    pub fn proxy(&self) -> Option<pointer_registry::Proxy> {
        pointer_registry::find(self.ptr)
    }
}

impl Clone for RefHandle {
    fn clone(&self) -> Self {
        // A handle the registry no longer tracks was freed behind our back.
        if self.ptr.is_null() || self.proxy().is_none() {
            return Self::NIL;
        }
        unsafe {
            (object_api().reference)(self.ptr);
            Self::adopt(self.ptr)
        }
    }
}

impl Drop for RefHandle {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        // A stale carrier must not touch the handle.
        if !pointer_registry::end_handle(self.ptr) {
            return;
        }
        unsafe {
            if (object_api().unreference)(self.ptr) {
                (object_api().destroy)(self.ptr);
            }
        }
    }
}

impl PartialEq for RefHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl Eq for RefHandle {}

impl Default for RefHandle {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Debug for RefHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefHandle({:#x})", self.ptr.addr())
    }
}

// ---------------------------------------------------------------------------
// Ownership and construction
// ---------------------------------------------------------------------------

/// How a handle returned by the engine is owned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ownership {
    /// Plain return: the host takes its own reference.
    Acquire,
    /// The engine already counted the reference for the host.
    Transferred,
    /// The engine keeps ownership. Refcounted handles are acquired;
    /// other handles are checked against their instance id.
    Borrowed,
}

/// Wrap a handle the engine returned. `None` for null (or, for borrowed
/// non-refcounted handles, for an object the engine no longer knows).
///
/// # Safety
/// `ptr` must be null or an object of class `T` or a subclass.
pub unsafe fn adopt<T: EngineClass>(ptr: ObjectPtr, ownership: Ownership) -> Option<T> {
    if ptr.is_null() {
        return None;
    }
    if T::REF_COUNTED {
        if ownership != Ownership::Transferred {
            unsafe { (object_api().reference)(ptr) };
        }
    } else if ownership == Ownership::Borrowed && !is_live_instance(ptr) {
        log::warn!(
            "borrowed {} handle {:#x} does not resolve to a live instance",
            T::CLASS_NAME,
            ptr.addr()
        );
        return None;
    }
    Some(unsafe { T::from_handle(ptr) })
}

/// Whether `ptr` is the object its own instance id resolves to.
pub fn is_live_instance(ptr: ObjectPtr) -> bool {
    unsafe {
        let id = (object_api().get_instance_id)(ptr);
        id != 0 && (object_api().from_instance_id)(id) == ptr
    }
}

/// Construct an instance of `T` by class name. Returns the nil façade when
/// the engine refuses (unknown or abstract class).
pub fn construct<T: EngineClass>() -> T {
    let name = T::CLASS_NAME;
    let ptr = unsafe { (classdb_api().construct_object)(name.as_ptr(), ffi_len(name)) };
    if ptr.is_null() {
        log::warn!("engine could not construct {name}");
        return unsafe { T::from_handle(ObjectPtr::NULL) };
    }
    if T::REF_COUNTED {
        unsafe { (object_api().reference)(ptr) };
    }
    unsafe { T::from_handle(ptr) }
}

/// Destroy a non-refcounted object now. Nil, stale and refcounted objects
/// are left alone and `false` is returned; refcounted objects go away when
/// their last carrier drops.
pub fn destroy(ptr: ObjectPtr) -> bool {
    if ptr.is_null() || !is_live_instance(ptr) {
        log::warn!("free: nil or stale object handle");
        return false;
    }
    let class = crate::class_registry::runtime_class_name(ptr).unwrap_or_default();
    if crate::class_registry::is_ref_counted(&class) != Some(false) {
        log::warn!("free: {class} is refcounted or unknown; drop its handles instead");
        return false;
    }
    unsafe { (object_api().destroy)(ptr) };
    true
}

/// Engine reference count of `obj` (0 for non-refcounted objects).
pub fn reference_count<T: EngineClass>(obj: &T) -> u32 {
    let h = obj.handle();
    if h.is_null() {
        return 0;
    }
    unsafe { (object_api().reference_count)(h) }
}

// ---------------------------------------------------------------------------
// Borrowed
// ---------------------------------------------------------------------------

/// Temporary façade over an object the engine lends for the duration of
/// an inbound call. Holds a registry carrier but no engine reference; the
/// carrier is ended when the borrow is dropped. `to_owned` takes a real
/// reference.
pub struct Borrowed<T: EngineClass> {
    inner: ManuallyDrop<T>,
}

impl<T: EngineClass> Borrowed<T> {
    /// # Safety
    /// `ptr` must be a live object of class `T` or a subclass for the
    /// lifetime of the borrow.
    pub unsafe fn new(ptr: ObjectPtr) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(Borrowed { inner: ManuallyDrop::new(unsafe { T::from_handle(ptr) }) })
    }

    /// An owning façade for the same object.
    pub fn to_owned(&self) -> T {
        let h = self.inner.handle();
        // Null is handled by `new`; `adopt` cannot fail here.
        unsafe { adopt::<T>(h, Ownership::Acquire) }
            .unwrap_or_else(|| unsafe { T::from_handle(ObjectPtr::NULL) })
    }
}

impl<T: EngineClass> Deref for Borrowed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: EngineClass> Drop for Borrowed<T> {
    fn drop(&mut self) {
        if T::REF_COUNTED {
            pointer_registry::end_handle(self.inner.handle());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_handles() {
        assert!(ObjectRef::NIL.is_nil());
        assert!(ObjectRef::default().is_nil());
        assert!(RefHandle::NIL.is_nil());
        assert_eq!(RefHandle::default(), RefHandle::NIL);
    }

    #[test]
    fn handles_are_one_word() {
        assert_eq!(size_of::<ObjectRef>(), size_of::<ObjectPtr>());
        assert_eq!(size_of::<RefHandle>(), size_of::<ObjectPtr>());
    }

    #[test]
    fn dropping_nil_touches_nothing() {
        // Would panic on the uninitialized interface if it reached the engine.
        drop(RefHandle::NIL);
        drop(RefHandle::NIL.clone());
    }
}
