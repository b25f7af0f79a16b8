// Host classes: Rust types extending an engine class, with overridables
// dispatched by name through inbound trampolines.
//
// Registration runs in three phases, mirroring the order the macros submit
// their records: collect every class, attach every impl block's virtuals,
// then hand each finished class to the engine.

use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::{HashMap, HashSet};
use std::ffi::c_void;
use std::marker::PhantomData;
use std::ops::Deref;
use std::panic::AssertUnwindSafe;
use std::sync::{Mutex, OnceLock};

use gdbind_ffi::{ClassInstancePtr, ExtensionClassInfo, ObjectPtr};

use crate::api::{classdb_api, ffi_len, object_api};
use crate::bridge::Bridge;
use crate::class_registry;
use crate::error::{BindError, BindResult};
use crate::ffi_guard::{fatal, ffi_boundary};
use crate::object::{adopt, upcast_ref, Borrowed, EngineClass, Inherits, Ownership};
use crate::pointer_registry;
use crate::sync::lock_or_recover;

/// A Rust type that extends engine class `Base`. Implemented by `#[gdclass]`.
pub trait HostClass: Default + 'static {
    type Base: EngineClass;

    /// Name the class is registered under in the engine.
    const CLASS_NAME: &'static str;
}

/// Submitted by `#[gdclass]`.
pub struct HostClassRegistration {
    pub class_name: &'static str,
    pub record: fn() -> ClassRecord,
}
inventory::collect!(HostClassRegistration);

/// Submitted by `#[gdclass_impl]`, one per impl block.
pub struct VirtualRegistration {
    pub class_name: &'static str,
    pub register: fn(&mut VirtualTable) -> BindResult<()>,
}
inventory::collect!(VirtualRegistration);

// ---------------------------------------------------------------------------
// Virtual table
// ---------------------------------------------------------------------------

type VirtualFn = Box<dyn Fn(&mut dyn Any, ArgBlock<'_>, RetSlot<'_>) + Send + Sync>;

/// Overridables implemented by one host class, by engine name.
pub struct VirtualTable {
    class: &'static str,
    owner_of: fn(&str) -> Option<&'static str>,
    entries: HashMap<&'static str, VirtualFn>,
}

impl VirtualTable {
    fn new<T: HostClass>() -> Self {
        VirtualTable {
            class: T::CLASS_NAME,
            owner_of: <T::Base as EngineClass>::virtual_owner,
            entries: HashMap::new(),
        }
    }

    /// Register the implementation of overridable `name`. Fails when no
    /// class in the base chain declares it.
    pub fn add<T: HostClass>(
        &mut self,
        name: &'static str,
        f: impl Fn(&mut T, ArgBlock<'_>, RetSlot<'_>) + Send + Sync + 'static,
    ) -> BindResult<()> {
        let Some(owner) = (self.owner_of)(name) else {
            return Err(BindError::UnknownVirtual {
                class: self.class.to_owned(),
                name: name.to_owned(),
            });
        };
        log::debug!("{}: overriding {owner}.{name}", self.class);
        let class = self.class;
        self.entries.insert(
            name,
            Box::new(move |data: &mut dyn Any, args, ret| match data.downcast_mut::<T>() {
                Some(this) => f(this, args, ret),
                None => fatal(&format!("instance data of {class} has the wrong type")),
            }),
        );
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Class records and instances
// ---------------------------------------------------------------------------

/// Everything the engine needs to instantiate one host class.
pub struct ClassRecord {
    name: &'static str,
    base: &'static str,
    ref_counted: bool,
    create: fn() -> Box<dyn Any>,
    virtuals: VirtualTable,
}

impl ClassRecord {
    pub fn of<T: HostClass>() -> ClassRecord {
        ClassRecord {
            name: T::CLASS_NAME,
            base: <T::Base as EngineClass>::CLASS_NAME,
            ref_counted: <T::Base as EngineClass>::REF_COUNTED,
            create: || Box::new(T::default()) as Box<dyn Any>,
            virtuals: VirtualTable::new::<T>(),
        }
    }
}

struct InstanceStorage {
    record: &'static ClassRecord,
    base: ObjectPtr,
    data: RefCell<Box<dyn Any>>,
}

/// Live instances, indexed both ways. Storage addresses are
/// `*const InstanceStorage`.
#[derive(Default)]
struct Instances {
    by_object: HashMap<usize, usize>,
    storages: HashSet<usize>,
}

impl Instances {
    fn insert(&mut self, obj: ObjectPtr, storage: usize) {
        self.by_object.insert(obj.addr(), storage);
        self.storages.insert(storage);
    }

    fn remove(&mut self, obj: ObjectPtr) {
        if let Some(storage) = self.by_object.remove(&obj.addr()) {
            self.storages.remove(&storage);
        }
    }
}

fn instances() -> &'static Mutex<Instances> {
    static INSTANCES: OnceLock<Mutex<Instances>> = OnceLock::new();
    INSTANCES.get_or_init(|| Mutex::new(Instances::default()))
}

fn registered() -> &'static Mutex<Vec<&'static ClassRecord>> {
    static REGISTERED: OnceLock<Mutex<Vec<&'static ClassRecord>>> = OnceLock::new();
    REGISTERED.get_or_init(|| Mutex::new(Vec::new()))
}

fn storage_of(obj: ObjectPtr) -> Option<&'static InstanceStorage> {
    let addr = *lock_or_recover(instances()).by_object.get(&obj.addr())?;
    // SAFETY: entries are removed in `free_instance` before the storage is dropped.
    Some(unsafe { &*(addr as *const InstanceStorage) })
}

pub fn live_instances() -> usize {
    lock_or_recover(instances()).by_object.len()
}

/// Register every host class submitted through inventory with the engine.
/// Returns the number of classes registered.
pub fn register_all_from_inventory() -> BindResult<usize> {
    // Phase 1: records.
    let mut records: Vec<ClassRecord> = inventory::iter::<HostClassRegistration>
        .into_iter()
        .map(|reg| (reg.record)())
        .collect();

    // Phase 2: overridables from every impl block.
    for reg in inventory::iter::<VirtualRegistration> {
        let Some(record) = records.iter_mut().find(|r| r.name == reg.class_name) else {
            return Err(BindError::ClassNotFound(reg.class_name.to_owned()));
        };
        (reg.register)(&mut record.virtuals)?;
    }

    // Phase 3: hand the finished classes to the engine.
    let mut count = 0;
    for record in records {
        if lock_or_recover(registered()).iter().any(|r| r.name == record.name) {
            continue;
        }
        finalize(record)?;
        count += 1;
    }
    log::info!("registered {count} host classes");
    Ok(count)
}

fn finalize(record: ClassRecord) -> BindResult<()> {
    let record: &'static ClassRecord = Box::leak(Box::new(record));
    let info = ExtensionClassInfo {
        class_userdata: (record as *const ClassRecord).cast_mut().cast::<c_void>(),
        create_instance,
        free_instance,
        get_virtual,
        call_virtual_with_data,
    };
    let accepted = unsafe {
        (classdb_api().register_extension_class)(
            record.name.as_ptr(),
            ffi_len(record.name),
            record.base.as_ptr(),
            ffi_len(record.base),
            &info,
        )
    };
    if !accepted {
        return Err(BindError::RegistrationRejected(record.name.to_owned()));
    }
    class_registry::register_dynamic(record.name, record.base, record.ref_counted);
    lock_or_recover(registered()).push(record);
    let overridables = record.virtuals.len();
    log::debug!("{} registered (base {}, {overridables} overridables)", record.name, record.base);
    Ok(())
}

/// Withdraw every registered host class from the engine.
pub fn unregister_all() {
    let records: Vec<&'static ClassRecord> = std::mem::take(&mut *lock_or_recover(registered()));
    for record in records.into_iter().rev() {
        let (name, len) = (record.name.as_ptr(), ffi_len(record.name));
        unsafe { (classdb_api().unregister_extension_class)(name, len) };
        class_registry::unregister_dynamic(record.name);
    }
}

// ---------------------------------------------------------------------------
// Trampolines
// ---------------------------------------------------------------------------

unsafe extern "C" fn create_instance(class_userdata: *mut c_void) -> ObjectPtr {
    ffi_boundary(
        ObjectPtr::NULL,
        AssertUnwindSafe(|| {
            let record = unsafe { &*class_userdata.cast::<ClassRecord>() };
            let (base, len) = (record.base.as_ptr(), ffi_len(record.base));
            let obj = unsafe { (classdb_api().construct_object)(base, len) };
            if obj.is_null() {
                log::error!("{}: engine could not construct base {}", record.name, record.base);
                return ObjectPtr::NULL;
            }
            let data = RefCell::new((record.create)());
            let storage = Box::new(InstanceStorage { record, base: obj, data });
            let raw = Box::into_raw(storage);
            lock_or_recover(instances()).insert(obj, raw as usize);
            unsafe {
                (object_api().set_instance)(
                    obj,
                    record.name.as_ptr(),
                    ffi_len(record.name),
                    ClassInstancePtr(raw.cast::<c_void>()),
                )
            };
            obj
        }),
    )
}

unsafe extern "C" fn free_instance(_class_userdata: *mut c_void, instance: ClassInstancePtr) {
    ffi_boundary(
        (),
        AssertUnwindSafe(|| {
            if instance.is_null() {
                return;
            }
            let storage = unsafe { Box::from_raw(instance.0.cast::<InstanceStorage>()) };
            lock_or_recover(instances()).remove(storage.base);
            // Dropping the Rust data may release carriers; the engine lock is not held.
            drop(storage);
        }),
    )
}

unsafe extern "C" fn get_virtual(
    class_userdata: *mut c_void,
    name: *const u8,
    name_len: u32,
) -> *mut c_void {
    ffi_boundary(
        std::ptr::null_mut(),
        AssertUnwindSafe(|| {
            let record = unsafe { &*class_userdata.cast::<ClassRecord>() };
            let name = unsafe { std::slice::from_raw_parts(name, name_len as usize) };
            let Ok(name) = std::str::from_utf8(name) else {
                return std::ptr::null_mut();
            };
            match record.virtuals.entries.get(name) {
                Some(f) => (f as *const VirtualFn).cast_mut().cast::<c_void>(),
                None => std::ptr::null_mut(),
            }
        }),
    )
}

unsafe extern "C" fn call_virtual_with_data(
    instance: ClassInstancePtr,
    name: *const u8,
    name_len: u32,
    virtual_userdata: *mut c_void,
    args: *const *const c_void,
    ret: *mut c_void,
) {
    // A registry miss means the engine handed us an instance we never created.
    let known =
        !instance.is_null() && lock_or_recover(instances()).storages.contains(&instance.addr());
    if !known || virtual_userdata.is_null() {
        let name = unsafe { std::slice::from_raw_parts(name, name_len as usize) };
        fatal(&format!(
            "virtual {} called on unknown instance {:#x}",
            String::from_utf8_lossy(name),
            instance.addr()
        ));
    }
    ffi_boundary(
        (),
        AssertUnwindSafe(|| {
            let storage = unsafe { &*instance.0.cast::<InstanceStorage>() };
            let f = unsafe { &*virtual_userdata.cast::<VirtualFn>() };
            let mut data = storage.data.borrow_mut();
            f(&mut **data, ArgBlock { args, _lt: PhantomData }, RetSlot { ret, _lt: PhantomData });
            log::trace!("{}: virtual returned", storage.record.name);
        }),
    );
}

// ---------------------------------------------------------------------------
// Argument and return slots
// ---------------------------------------------------------------------------

/// Arguments of an inbound virtual call, in pointer-call encoding.
#[derive(Clone, Copy)]
pub struct ArgBlock<'a> {
    args: *const *const c_void,
    _lt: PhantomData<&'a ()>,
}

impl ArgBlock<'_> {
    /// Read argument `i`, copying engine-owned carriers.
    ///
    /// # Safety
    /// The overridable must declare at least `i + 1` arguments and argument
    /// `i` must be encoded as `T`.
    pub unsafe fn get<T: Bridge>(&self, i: usize) -> T {
        unsafe {
            let slot = *self.args.add(i);
            T::from_engine_borrowed(&*slot.cast::<T::Repr>())
        }
    }

    /// Read object argument `i` as a temporary façade. The registry carrier
    /// it holds is released when the borrow is dropped.
    ///
    /// # Safety
    /// As for [`ArgBlock::get`], with an object of class `T` or a subclass.
    pub unsafe fn get_object<T: EngineClass>(&self, i: usize) -> Option<Borrowed<T>> {
        unsafe {
            let ptr = self.get::<ObjectPtr>(i);
            Borrowed::new(ptr)
        }
    }
}

/// Return slot of an inbound virtual call. Null for void overridables.
pub struct RetSlot<'a> {
    ret: *mut c_void,
    _lt: PhantomData<&'a mut ()>,
}

impl RetSlot<'_> {
    /// Move `value` into the slot. Dropped when the overridable is void.
    ///
    /// # Safety
    /// The overridable must return a value encoded as `T`.
    pub unsafe fn set<T: Bridge>(self, value: T) {
        if self.ret.is_null() {
            return;
        }
        unsafe { std::ptr::write(self.ret.cast::<T::Repr>(), value.into_engine()) };
    }

    /// Move an object into the slot. The engine receives the reference the
    /// façade owned.
    ///
    /// # Safety
    /// The overridable must return an object handle.
    pub unsafe fn set_object<T: EngineClass>(self, value: Option<T>) {
        let Some(v) = value else {
            unsafe { self.set(ObjectPtr::NULL) };
            return;
        };
        let ptr = v.handle();
        if T::REF_COUNTED && !ptr.is_null() && !pointer_registry::end_handle(ptr) {
            // The engine freed the object under this carrier; nothing to hand back.
            log::error!("{}: stale handle {:#x} not returned", T::CLASS_NAME, ptr.addr());
            std::mem::forget(v);
            return;
        }
        std::mem::forget(v);
        unsafe { self.set(ptr) };
    }

    pub fn is_void(&self) -> bool {
        self.ret.is_null()
    }
}

// ---------------------------------------------------------------------------
// Subclass handle
// ---------------------------------------------------------------------------

/// Typed handle to an instance of host class `T`: the base façade plus
/// access to the Rust data.
pub struct Subclass<T: HostClass> {
    base: T::Base,
    _marker: PhantomData<*const T>,
}

impl<T: HostClass> Subclass<T> {
    /// Ask the engine for a new instance of the host class.
    pub fn new() -> BindResult<Self> {
        let name = T::CLASS_NAME;
        let ptr = unsafe { (classdb_api().construct_object)(name.as_ptr(), ffi_len(name)) };
        let base = unsafe { adopt::<T::Base>(ptr, Ownership::Acquire) }
            .ok_or_else(|| BindError::ConstructionFailed(name.to_owned()))?;
        Ok(Subclass { base, _marker: PhantomData })
    }

    /// Wrap an existing base façade when its object is an instance of `T`.
    pub fn from_base(base: T::Base) -> Option<Self> {
        let storage = storage_of(base.handle())?;
        storage.data.borrow().is::<T>().then_some(Subclass { base, _marker: PhantomData })
    }

    pub fn base(&self) -> &T::Base {
        &self.base
    }

    pub fn upcast<B: EngineClass>(&self) -> &B
    where
        T::Base: Inherits<B>,
    {
        upcast_ref(&self.base)
    }

    pub fn into_base(self) -> T::Base {
        self.base
    }

    fn storage(&self) -> &InstanceStorage {
        match storage_of(self.base.handle()) {
            Some(storage) => storage,
            None => fatal(&format!("{} instance is not registered", T::CLASS_NAME)),
        }
    }

    /// Borrow the Rust data. Panics while a `bind_mut` borrow is alive.
    pub fn bind(&self) -> Ref<'_, T> {
        Ref::map(self.storage().data.borrow(), |data| match data.downcast_ref::<T>() {
            Some(this) => this,
            None => fatal(&format!("instance data is not {}", T::CLASS_NAME)),
        })
    }

    /// Mutably borrow the Rust data. Panics while any other borrow is alive,
    /// including one held by a running overridable.
    pub fn bind_mut(&mut self) -> RefMut<'_, T> {
        RefMut::map(self.storage().data.borrow_mut(), |data| match data.downcast_mut::<T>() {
            Some(this) => this,
            None => fatal(&format!("instance data is not {}", T::CLASS_NAME)),
        })
    }
}

impl<T: HostClass> Clone for Subclass<T>
where
    T::Base: Clone,
{
    fn clone(&self) -> Self {
        Subclass { base: self.base.clone(), _marker: PhantomData }
    }
}

impl<T: HostClass> Deref for Subclass<T> {
    type Target = T::Base;

    fn deref(&self) -> &T::Base {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectRef;

    struct Widget(ObjectRef);

    impl EngineClass for Widget {
        const CLASS_NAME: &'static str = "Widget";
        const REF_COUNTED: bool = false;
        const VIRTUALS: &'static [&'static str] = &["_draw", "_input"];

        unsafe fn from_handle(ptr: ObjectPtr) -> Self {
            Widget(ObjectRef::from_ptr(ptr))
        }

        fn handle(&self) -> ObjectPtr {
            self.0.ptr()
        }

        fn virtual_owner(name: &str) -> Option<&'static str> {
            Self::VIRTUALS.contains(&name).then_some(Self::CLASS_NAME)
        }
    }

    #[derive(Default)]
    struct Dial {
        draws: u32,
    }

    impl HostClass for Dial {
        type Base = Widget;
        const CLASS_NAME: &'static str = "Dial";
    }

    #[test]
    fn declared_overridables_are_accepted() {
        let mut table = VirtualTable::new::<Dial>();
        assert!(table.add::<Dial>("_draw", |this, _, _| this.draws += 1).is_ok());
        assert!(table.contains("_draw"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unknown_overridables_are_rejected() {
        let mut table = VirtualTable::new::<Dial>();
        let err = table.add::<Dial>("_drawww", |_, _, _| {}).unwrap_err();
        assert_eq!(err, BindError::UnknownVirtual { class: "Dial".into(), name: "_drawww".into() });
        assert!(table.is_empty());
    }

    #[test]
    fn record_takes_the_base_policy() {
        let record = ClassRecord::of::<Dial>();
        assert_eq!(record.name, "Dial");
        assert_eq!(record.base, "Widget");
        assert!(!record.ref_counted);
        assert!((record.create)().is::<Dial>());
    }

    /// Refcounted stand-in that owns its carrier without touching the engine.
    struct Meter(ObjectPtr);

    impl EngineClass for Meter {
        const CLASS_NAME: &'static str = "Meter";
        const REF_COUNTED: bool = true;
        const VIRTUALS: &'static [&'static str] = &[];

        unsafe fn from_handle(ptr: ObjectPtr) -> Self {
            Meter(ptr)
        }

        fn handle(&self) -> ObjectPtr {
            self.0
        }

        fn virtual_owner(_name: &str) -> Option<&'static str> {
            None
        }
    }

    fn ret_slot(word: &mut usize) -> RetSlot<'_> {
        RetSlot { ret: (word as *mut usize).cast::<c_void>(), _lt: PhantomData }
    }

    #[test]
    fn returned_objects_hand_over_their_carrier() {
        let h = ObjectPtr(0xb000 as *mut c_void);
        pointer_registry::retain(h);
        let mut word = 0usize;
        unsafe { ret_slot(&mut word).set_object(Some(Meter(h))) };
        assert_eq!(word, 0xb000);
        assert_eq!(pointer_registry::live_carriers(h), 0);
    }

    #[test]
    fn stale_objects_are_not_returned() {
        let h = ObjectPtr(0xa000 as *mut c_void);
        pointer_registry::retain(h);
        pointer_registry::invalidate(h);
        let mut word = 0x1usize;
        unsafe { ret_slot(&mut word).set_object(Some(Meter(h))) };
        assert_eq!(word, 0x1);
        assert_eq!(pointer_registry::stale_carriers(h), 0);
    }
}
