// CallFrame: fixed-layout scratch buffer for one outbound pointer call.
//
// Slots are large enough for any primitive, any opaque handle and any carrier
// (a Variant is the widest at three words). The frame lives on the caller's
// stack and releases its owned temporaries on Drop, so every exit path frees it.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr;

use gdbind_ffi::{ConstTypePtr, ObjectPtr, TypePtr};

use crate::api::object_api;
use crate::bind::MethodBind;
use crate::bridge::Bridge;
use crate::ffi_guard::fatal;

/// Maximum number of arguments a single frame can carry.
pub const MAX_ARGS: usize = 16;

/// One argument or return slot: four 8-byte words, 8-byte aligned.
type Slot = MaybeUninit<[u64; 4]>;

/// Releases an owned value stored in a slot.
type SlotDropper = unsafe fn(*mut Slot);

unsafe fn drop_slot<T: Bridge>(slot: *mut Slot) {
    unsafe {
        let repr = ptr::read(slot.cast::<T::Repr>());
        drop(T::from_engine(repr));
    }
}

const fn fits_slot<T: Bridge>() -> bool {
    size_of::<T::Repr>() <= size_of::<Slot>() && align_of::<T::Repr>() <= align_of::<Slot>()
}

/// Builder and storage for one pointer call.
///
/// Typical usage (what generated forwarders emit):
/// ```ignore
/// let mut frame = CallFrame::new();
/// frame.arg(&voice_idx).arg(&delay_ms);
/// unsafe { frame.call(binds().audio_effect_chorus.set_voice_delay_ms, handle) };
/// ```
pub struct CallFrame {
    args: [Slot; MAX_ARGS],
    droppers: [Option<SlotDropper>; MAX_ARGS],
    len: usize,
    ret: Slot,
    ret_size: Option<usize>,
    ret_dropper: Option<SlotDropper>,
    // Frames are transient and bound to the calling thread.
    _not_send: PhantomData<*const ()>,
}

impl CallFrame {
    /// Allocate a fresh frame with no arguments and no return slot.
    pub fn new() -> Self {
        Self {
            args: [MaybeUninit::uninit(); MAX_ARGS],
            droppers: [None; MAX_ARGS],
            len: 0,
            ret: MaybeUninit::uninit(),
            ret_size: None,
            ret_dropper: None,
            _not_send: PhantomData,
        }
    }

    /// Append a borrowed argument. The caller keeps ownership of `value`,
    /// which must outlive the call.
    pub fn arg<T: Bridge>(&mut self, value: &T) -> &mut Self {
        const { assert!(fits_slot::<T>(), "argument does not fit a call slot") };
        self.push(value.to_engine(), None)
    }

    /// Append an argument the frame owns; it is released when the frame is.
    pub fn arg_owned<T: Bridge>(&mut self, value: T) -> &mut Self {
        const { assert!(fits_slot::<T>(), "argument does not fit a call slot") };
        let dropper: Option<SlotDropper> =
            if std::mem::needs_drop::<T>() { Some(drop_slot::<T> as SlotDropper) } else { None };
        self.push(value.into_engine(), dropper)
    }

    fn push<R: Copy>(&mut self, repr: R, dropper: Option<SlotDropper>) -> &mut Self {
        if self.len == MAX_ARGS {
            fatal("call frame argument capacity exceeded");
        }
        unsafe { ptr::write(self.args[self.len].as_mut_ptr().cast::<R>(), repr) };
        self.droppers[self.len] = dropper;
        self.len += 1;
        self
    }

    /// Declare that no return value is expected.
    pub fn ret_nil(&mut self) -> &mut Self {
        self.ret_size = None;
        self
    }

    /// Reserve the return slot for a `T`.
    pub fn ret<T: Bridge>(&mut self) -> &mut Self {
        const { assert!(fits_slot::<T>(), "return value does not fit a call slot") };
        self.ret_size = Some(crate::bridge::size_of_return_slot::<T>());
        self
    }

    /// Number of appended arguments.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of argument `i`, as the engine receives it.
    pub fn array(&self, i: usize) -> ConstTypePtr {
        if i >= self.len {
            fatal("call frame argument index out of range");
        }
        self.args[i].as_ptr().cast::<c_void>()
    }

    /// Issue the pointer call. Argument slots are handed over in append order.
    ///
    /// # Safety
    /// The appended arguments and the reserved return slot must match the
    /// engine method's declared signature, and `obj` must be a live object of
    /// the class the bind was resolved for (or null for static methods).
    pub unsafe fn invoke(&mut self, bind: MethodBind, obj: ObjectPtr) {
        if bind.is_nil() {
            fatal("pointer call through an unresolved method bind");
        }
        let mut ptrs: [ConstTypePtr; MAX_ARGS] = [ptr::null(); MAX_ARGS];
        for (i, p) in ptrs.iter_mut().enumerate().take(self.len) {
            *p = self.array(i);
        }
        let ret: TypePtr = match self.ret_size {
            Some(_) => self.ret.as_mut_ptr().cast::<c_void>(),
            None => ptr::null_mut(),
        };
        unsafe { (object_api().method_bind_ptrcall)(bind.raw(), obj, ptrs.as_ptr(), ret) };
    }

    /// Take the value the engine wrote into the return slot.
    ///
    /// # Safety
    /// Must follow `ret::<T>()` and a completed `invoke`.
    pub unsafe fn take_ret<T: Bridge>(&mut self) -> T {
        if self.ret_size != Some(crate::bridge::size_of_return_slot::<T>()) {
            fatal("call frame return slot read with a mismatched type");
        }
        self.ret_size = None;
        self.ret_dropper = None;
        unsafe { T::from_engine(ptr::read(self.ret.as_ptr().cast::<T::Repr>())) }
    }

    /// Call a method returning nothing, then free the frame.
    ///
    /// # Safety
    /// See [`CallFrame::invoke`].
    pub unsafe fn call(mut self, bind: MethodBind, obj: ObjectPtr) {
        self.ret_nil();
        unsafe { self.invoke(bind, obj) };
    }

    /// Call a method returning `T`, unmarshal the result, then free the frame.
    ///
    /// # Safety
    /// See [`CallFrame::invoke`].
    pub unsafe fn call_ret<T: Bridge>(mut self, bind: MethodBind, obj: ObjectPtr) -> T {
        self.ret::<T>();
        unsafe {
            self.invoke(bind, obj);
            self.ret_dropper = std::mem::needs_drop::<T>().then_some(drop_slot::<T> as SlotDropper);
            self.take_ret::<T>()
        }
    }

    /// Release the frame. Equivalent to dropping it.
    pub fn free(self) {}
}

impl Default for CallFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CallFrame {
    fn drop(&mut self) {
        for i in 0..self.len {
            if let Some(dropper) = self.droppers[i].take() {
                unsafe { dropper(&mut self.args[i]) };
            }
        }
        if let Some(dropper) = self.ret_dropper.take() {
            unsafe { dropper(&mut self.ret) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn arguments_keep_append_order() {
        let mut frame = CallFrame::new();
        frame.arg(&7i64).arg(&true).arg(&Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.len(), 3);
        unsafe {
            assert_eq!(*frame.array(0).cast::<i64>(), 7);
            assert_eq!(*frame.array(1).cast::<u8>(), 1);
            assert_eq!(*frame.array(2).cast::<[f32; 3]>(), [1.0, 2.0, 3.0]);
        }
    }

    #[test]
    fn return_slot_is_sized_by_type() {
        let mut frame = CallFrame::new();
        frame.ret::<f64>();
        assert_eq!(frame.ret_size, Some(8));
        frame.ret_nil();
        assert_eq!(frame.ret_size, None);
    }

    #[test]
    fn owned_pod_arguments_need_no_dropper() {
        let mut frame = CallFrame::new();
        frame.arg_owned(3i64);
        assert!(frame.droppers[0].is_none());
        frame.free();
    }
}
