// Callable registry: maps callback ids to host closures backing engine Callables.
// When the engine invokes such a Callable, the trampoline in `builtin::callable`
// calls `invoke(id, args)`, which looks up and runs the registered closure.
//
// Callables are created and invoked on the engine main thread, so the
// registry is thread-local and closures need not be `Send`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::builtin::{CallArgs, Variant};

type CallableFn = Option<Box<dyn FnMut(&CallArgs<'_>) -> Variant>>;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static REGISTRY: RefCell<HashMap<u64, CallableFn>> = RefCell::new(HashMap::new());
}

/// Register a closure and return its unique callback id.
pub fn register(f: impl FnMut(&CallArgs<'_>) -> Variant + 'static) -> u64 {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    REGISTRY.with(|reg| reg.borrow_mut().insert(id, Some(Box::new(f))));
    id
}

/// Unregister a callback by its id.
pub fn unregister(id: u64) {
    // The closure is dropped outside the borrow: its captures may own
    // carriers whose Drop re-enters the engine.
    let removed = REGISTRY.with(|reg| reg.borrow_mut().remove(&id));
    drop(removed);
}

pub fn is_registered(id: u64) -> bool {
    REGISTRY.with(|reg| reg.borrow().contains_key(&id))
}

/// Clear all callbacks of the current thread. Called during shutdown.
pub fn clear_all() {
    let drained: Vec<CallableFn> =
        REGISTRY.with(|reg| reg.borrow_mut().drain().map(|(_, f)| f).collect());
    drop(drained);
}

/// Invoke a registered callback. `None` when the id is unknown or the
/// callback is already running further up the stack.
///
/// Uses a take-execute-replace pattern so the callback may register,
/// unregister or invoke other callables without a re-entrant borrow.
pub fn invoke(id: u64, args: &CallArgs<'_>) -> Option<Variant> {
    // 1. Take the callback out (replace with None).
    let mut cb = REGISTRY.with(|reg| reg.borrow_mut().get_mut(&id).and_then(|slot| slot.take()))?;

    // 2. Execute with the registry unborrowed.
    let result = cb(args);

    // 3. Put back only if the slot still exists and is None. If `unregister`
    //    ran during execution the entry is gone and the callback is dropped.
    let leftover = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        match reg.get_mut(&id) {
            Some(slot) if slot.is_none() => {
                *slot = Some(cb);
                None
            }
            _ => Some(cb),
        }
    });
    drop(leftover);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn register_then_unregister() {
        let id = register(|_| unreachable!());
        assert!(is_registered(id));
        unregister(id);
        assert!(!is_registered(id));
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(invoke(u64::MAX, &CallArgs::empty()).is_none());
    }

    #[test]
    fn ids_are_unique() {
        let a = register(|_| unreachable!());
        let b = register(|_| unreachable!());
        assert_ne!(a, b);
        unregister(a);
        unregister(b);
    }

    #[test]
    fn unregister_drops_captures() {
        let alive = Rc::new(Cell::new(true));
        struct Flag(Rc<Cell<bool>>);
        impl Drop for Flag {
            fn drop(&mut self) {
                self.0.set(false);
            }
        }
        let flag = Flag(alive.clone());
        let id = register(move |_| {
            let _ = &flag;
            unreachable!()
        });
        assert!(alive.get());
        unregister(id);
        assert!(!alive.get());
    }
}
