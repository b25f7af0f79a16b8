// Class registry: class name -> (parent, refcount flag, construction thunk).
//
// Generated façades submit a `ClassRegistration` through inventory; host
// classes are added dynamically when they are registered with the engine.
// Registration is idempotent and order-independent.

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{OnceLock, RwLock};

use gdbind_ffi::ObjectPtr;

use crate::api::{classdb_api, ffi_len, object_api};
use crate::object::{adopt, EngineClass, Ownership};
use crate::sync::{read_or_recover, write_or_recover};

/// Submitted once per generated class.
pub struct ClassRegistration {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub ref_counted: bool,
    /// Wrap a handle of this class in its façade, taking a reference when
    /// the class is refcounted. The box holds the façade type itself.
    pub construct: fn(ObjectPtr) -> Box<dyn Any>,
}
inventory::collect!(ClassRegistration);

struct ClassEntry {
    parent: Option<String>,
    ref_counted: bool,
    construct: Option<fn(ObjectPtr) -> Box<dyn Any>>,
}

static REGISTRY: OnceLock<RwLock<HashMap<String, ClassEntry>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, ClassEntry>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Record one generated class. A second registration of the same name is a no-op.
pub fn register(reg: &ClassRegistration) {
    let mut map = write_or_recover(registry());
    map.entry(reg.name.to_owned()).or_insert_with(|| ClassEntry {
        parent: reg.parent.map(str::to_owned),
        ref_counted: reg.ref_counted,
        construct: Some(reg.construct),
    });
}

/// Record every class submitted through inventory. Returns the registry size.
pub fn register_all_from_inventory() -> usize {
    for reg in inventory::iter::<ClassRegistration> {
        register(reg);
    }
    let count = read_or_recover(registry()).len();
    log::debug!("class registry holds {count} classes");
    count
}

/// Record a host-defined class. It has no thunk of its own; wrapping falls
/// back to the nearest ancestor with one.
pub fn register_dynamic(name: &str, parent: &str, ref_counted: bool) {
    write_or_recover(registry()).insert(
        name.to_owned(),
        ClassEntry { parent: Some(parent.to_owned()), ref_counted, construct: None },
    );
}

pub fn unregister_dynamic(name: &str) {
    let mut map = write_or_recover(registry());
    if map.get(name).is_some_and(|e| e.construct.is_none()) {
        map.remove(name);
    }
}

pub fn is_registered(name: &str) -> bool {
    read_or_recover(registry()).contains_key(name)
}

pub fn parent_of(name: &str) -> Option<String> {
    read_or_recover(registry()).get(name).and_then(|e| e.parent.clone())
}

pub fn is_ref_counted(name: &str) -> Option<bool> {
    read_or_recover(registry()).get(name).map(|e| e.ref_counted)
}

/// Whether `name` is `ancestor` or derives from it.
pub fn is_subclass(name: &str, ancestor: &str) -> bool {
    let map = read_or_recover(registry());
    let mut current = Some(name);
    while let Some(class) = current {
        if class == ancestor {
            return true;
        }
        current = map.get(class).and_then(|e| e.parent.as_deref());
    }
    false
}

/// Runtime class name the engine reports for `ptr`.
pub fn runtime_class_name(ptr: ObjectPtr) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // Stack buffer first, heap retry when the name is longer.
    let mut buf = [0u8; 128];
    let len =
        unsafe { (object_api().get_class_name)(ptr, buf.as_mut_ptr(), buf.len() as u32) } as usize;
    if len == 0 {
        return None;
    }
    if len <= buf.len() {
        return std::str::from_utf8(&buf[..len]).ok().map(str::to_owned);
    }
    let mut heap = vec![0u8; len];
    let written =
        unsafe { (object_api().get_class_name)(ptr, heap.as_mut_ptr(), len as u32) } as usize;
    heap.truncate(written.min(len));
    String::from_utf8(heap).ok()
}

/// Wrap a borrowed handle as `T` after checking the runtime class.
pub(crate) fn cast_handle<T: EngineClass>(ptr: ObjectPtr) -> Option<T> {
    let class = runtime_class_name(ptr)?;
    if !is_subclass(&class, T::CLASS_NAME) {
        log::debug!("{class} is not a {}", T::CLASS_NAME);
        return None;
    }
    unsafe { adopt::<T>(ptr, Ownership::Borrowed) }
}

/// Checked downcast: `Some` when `obj`'s runtime class is `T` or derives
/// from it. Refcounted results take their own reference.
pub fn try_cast<T: EngineClass>(obj: &impl EngineClass) -> Option<T> {
    cast_handle::<T>(obj.handle())
}

/// Wrap `ptr` in the façade of its most derived generated class. Host
/// classes resolve to their engine base.
pub fn wrap_dynamic(ptr: ObjectPtr) -> Option<Box<dyn Any>> {
    let mut class = runtime_class_name(ptr)?;
    let construct = {
        let map = read_or_recover(registry());
        loop {
            let entry = map.get(&class)?;
            if let Some(construct) = entry.construct {
                break construct;
            }
            class = entry.parent.clone()?;
        }
    };
    Some(construct(ptr))
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

/// Lazily fetched engine singleton. The handle is cached on first success
/// and lives until process exit.
pub struct Singleton<T: EngineClass> {
    name: &'static str,
    handle: OnceLock<ObjectPtr>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: EngineClass> Singleton<T> {
    pub const fn new(name: &'static str) -> Self {
        Singleton { name, handle: OnceLock::new(), _marker: PhantomData }
    }

    /// The singleton façade, or nil when the engine has none by that name.
    pub fn get(&self) -> T {
        const { assert!(!T::REF_COUNTED, "singletons are not refcounted") };
        if let Some(&ptr) = self.handle.get() {
            return unsafe { T::from_handle(ptr) };
        }
        let ptr = unsafe { (classdb_api().get_singleton)(self.name.as_ptr(), ffi_len(self.name)) };
        if ptr.is_null() {
            log::warn!("engine has no singleton named {}", self.name);
        } else {
            let _ = self.handle.set(ptr);
        }
        unsafe { T::from_handle(ptr) }
    }

    pub fn is_cached(&self) -> bool {
        self.handle.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thunk(_: ObjectPtr) -> Box<dyn Any> {
        Box::new(())
    }

    #[test]
    fn registration_is_idempotent() {
        let reg = ClassRegistration {
            name: "RegistryTestBase",
            parent: None,
            ref_counted: false,
            construct: thunk,
        };
        register(&reg);
        register(&reg);
        assert!(is_registered("RegistryTestBase"));
        assert_eq!(parent_of("RegistryTestBase"), None);
    }

    #[test]
    fn subclass_walks_parents() {
        register(&ClassRegistration {
            name: "ChainA",
            parent: None,
            ref_counted: true,
            construct: thunk,
        });
        register(&ClassRegistration {
            name: "ChainB",
            parent: Some("ChainA"),
            ref_counted: true,
            construct: thunk,
        });
        register_dynamic("ChainHost", "ChainB", true);
        assert!(is_subclass("ChainHost", "ChainA"));
        assert!(is_subclass("ChainB", "ChainB"));
        assert!(!is_subclass("ChainA", "ChainB"));
        assert_eq!(is_ref_counted("ChainHost"), Some(true));

        unregister_dynamic("ChainHost");
        assert!(!is_registered("ChainHost"));
        // Generated entries survive unregister_dynamic.
        unregister_dynamic("ChainB");
        assert!(is_registered("ChainB"));
    }

    #[test]
    fn null_has_no_class() {
        assert_eq!(runtime_class_name(ObjectPtr::NULL), None);
    }
}
