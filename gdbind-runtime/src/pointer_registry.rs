// Pointer registry: maps engine handles to host proxy identities.
//
// Every reference-counted carrier the host holds is counted here. A proxy is
// an (index, cycle) pair; the cycle changes whenever the slot is recycled or
// the engine reports the object freed, which makes stale proxies detectable.
//
// Owning handles release by address, so freeing an object leaves a tombstone
// counting its outstanding carriers. Releases at that address spend the
// tombstone first and never reach an object the engine later puts there.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use gdbind_ffi::ObjectPtr;

use crate::sync::lock_or_recover;

/// Host-side identity of one engine object.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Proxy {
    index: u32,
    cycle: u32,
}

struct Slot {
    handle: ObjectPtr,
    cycle: u32,
    carriers: u32,
}

#[derive(Default)]
struct Registry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    by_handle: HashMap<ObjectPtr, u32>,
    stale: HashMap<ObjectPtr, u32>,
}

impl Registry {
    fn live(&self, proxy: Proxy) -> Option<&Slot> {
        self.slots
            .get(proxy.index as usize)
            .filter(|s| s.cycle == proxy.cycle && !s.handle.is_null())
    }

    fn intern(&mut self, handle: ObjectPtr) -> Proxy {
        if let Some(&index) = self.by_handle.get(&handle) {
            let cycle = self.slots[index as usize].cycle;
            return Proxy { index, cycle };
        }
        let index = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.handle = handle;
                slot.carriers = 0;
                index
            }
            None => {
                let index = u32::try_from(self.slots.len())
                    .unwrap_or_else(|_| crate::ffi_guard::fatal("pointer registry exhausted"));
                self.slots.push(Slot { handle, cycle: 0, carriers: 0 });
                index
            }
        };
        self.by_handle.insert(handle, index);
        Proxy { index, cycle: self.slots[index as usize].cycle }
    }

    /// Retire a slot whose object the engine freed while carriers were out.
    fn bury(&mut self, index: u32) {
        let slot = &self.slots[index as usize];
        if slot.carriers > 0 {
            *self.stale.entry(slot.handle).or_insert(0) += slot.carriers;
        }
        self.retire(index);
    }

    fn retire(&mut self, index: u32) {
        let slot = &mut self.slots[index as usize];
        self.by_handle.remove(&slot.handle);
        slot.handle = ObjectPtr::NULL;
        slot.carriers = 0;
        slot.cycle = slot.cycle.wrapping_add(1);
        self.free.push(index);
    }
}

static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();

fn registry() -> &'static Mutex<Registry> {
    REGISTRY.get_or_init(|| Mutex::new(Registry::default()))
}

/// Wrap a raw handle in its proxy, reusing the existing one while the handle
/// is tracked. No reference-count change.
pub fn new(handle: ObjectPtr) -> Proxy {
    lock_or_recover(registry()).intern(handle)
}

/// The proxy currently tracking `handle`, if any.
pub fn find(handle: ObjectPtr) -> Option<Proxy> {
    let reg = lock_or_recover(registry());
    let index = *reg.by_handle.get(&handle)?;
    Some(Proxy { index, cycle: reg.slots[index as usize].cycle })
}

/// Unwrap a proxy for an outbound call. `None` when the proxy is stale.
pub fn get(proxy: Proxy) -> Option<ObjectPtr> {
    lock_or_recover(registry()).live(proxy).map(|s| s.handle)
}

/// The opaque word a proxy contributes to a call slot. Null when stale.
pub fn pack(proxy: Proxy) -> ObjectPtr {
    get(proxy).unwrap_or(ObjectPtr::NULL)
}

/// Record one more live host carrier for the handle.
pub(crate) fn retain(handle: ObjectPtr) -> Proxy {
    let mut reg = lock_or_recover(registry());
    let proxy = reg.intern(handle);
    reg.slots[proxy.index as usize].carriers += 1;
    proxy
}

/// Release one carrier. Returns the handle and whether the release was
/// valid; `ok == false` means the proxy is stale (the engine already freed
/// the object) and the caller must not touch the handle.
pub fn end(proxy: Proxy) -> (ObjectPtr, bool) {
    let mut reg = lock_or_recover(registry());
    let Some(slot) = reg.live(proxy) else {
        return (ObjectPtr::NULL, false);
    };
    let handle = slot.handle;
    if slot.carriers == 0 {
        return (handle, false);
    }
    let slot = &mut reg.slots[proxy.index as usize];
    slot.carriers -= 1;
    if slot.carriers == 0 {
        reg.retire(proxy.index);
    }
    (handle, true)
}

/// Release one carrier of `handle`. Carriers outlived by their object are
/// released first and report `false`. See [`end`].
pub(crate) fn end_handle(handle: ObjectPtr) -> bool {
    {
        let mut reg = lock_or_recover(registry());
        if let Some(count) = reg.stale.get_mut(&handle) {
            *count -= 1;
            if *count == 0 {
                reg.stale.remove(&handle);
            }
            return false;
        }
    }
    match find(handle) {
        Some(proxy) => end(proxy).1,
        None => false,
    }
}

/// Carriers at `handle` whose object the engine already freed.
pub fn stale_carriers(handle: ObjectPtr) -> u32 {
    lock_or_recover(registry()).stale.get(&handle).copied().unwrap_or(0)
}

/// Number of live host carriers referencing `handle`.
pub fn live_carriers(handle: ObjectPtr) -> u32 {
    let reg = lock_or_recover(registry());
    reg.by_handle
        .get(&handle)
        .map(|&index| reg.slots[index as usize].carriers)
        .unwrap_or(0)
}

/// The engine freed `handle`: break identity so outstanding proxies go stale.
pub fn invalidate(handle: ObjectPtr) {
    let mut reg = lock_or_recover(registry());
    if let Some(&index) = reg.by_handle.get(&handle) {
        reg.bury(index);
    }
}

/// Drop every entry. Called on shutdown.
pub fn clear() {
    if let Some(reg) = REGISTRY.get() {
        let mut reg = lock_or_recover(reg);
        let indices: Vec<u32> = reg.by_handle.values().copied().collect();
        for index in indices {
            reg.bury(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fake handles: never dereferenced, only compared. Each test uses its own
    // range so parallel tests never share an entry.
    fn handle(n: usize) -> ObjectPtr {
        ObjectPtr(n as *mut std::ffi::c_void)
    }

    #[test]
    fn same_handle_same_proxy() {
        let h = handle(0x1000);
        let a = new(h);
        let b = new(h);
        assert_eq!(a, b);
        assert_eq!(get(a), Some(h));
        invalidate(h);
    }

    #[test]
    fn carriers_are_counted() {
        let h = handle(0x2000);
        retain(h);
        retain(h);
        assert_eq!(live_carriers(h), 2);
        assert!(end_handle(h));
        assert_eq!(live_carriers(h), 1);
        assert!(end_handle(h));
        assert_eq!(live_carriers(h), 0);
        assert!(find(h).is_none());
    }

    #[test]
    fn end_on_stale_proxy_is_not_ok() {
        let h = handle(0x3000);
        let proxy = retain(h);
        invalidate(h);
        assert_eq!(get(proxy), None);
        assert_eq!(pack(proxy), ObjectPtr::NULL);
        let (raw, ok) = end(proxy);
        assert!(!ok);
        assert!(raw.is_null());
    }

    #[test]
    fn reused_address_keeps_the_new_carriers() {
        let h = handle(0x5000);
        retain(h);
        invalidate(h);
        assert_eq!(stale_carriers(h), 1);
        // The engine hands the same address to a new object.
        let fresh = retain(h);
        assert!(!end_handle(h));
        assert_eq!(live_carriers(h), 1);
        assert_eq!(get(fresh), Some(h));
        assert!(end_handle(h));
        assert_eq!(live_carriers(h), 0);
        assert_eq!(stale_carriers(h), 0);
    }

    #[test]
    fn freed_object_without_reuse_releases_nothing() {
        let h = handle(0x6000);
        retain(h);
        retain(h);
        invalidate(h);
        assert_eq!(stale_carriers(h), 2);
        assert!(!end_handle(h));
        assert!(!end_handle(h));
        assert_eq!(stale_carriers(h), 0);
        assert!(!end_handle(h));
    }

    #[test]
    fn recycled_slot_gets_new_cycle() {
        let h1 = handle(0x4000);
        let old = retain(h1);
        end(old);
        let h2 = handle(0x4008);
        let fresh = retain(h2);
        assert_ne!(old, fresh);
        assert_eq!(get(old), None);
        end(fresh);
    }
}
