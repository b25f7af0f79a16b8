use gdbind_runtime::{destroy, EngineClass};

use crate::Object;

impl Object {
    /// Destroy the object now.
    ///
    /// Only for classes outside the `RefCounted` chain; those die when their
    /// last handle drops, so this logs a warning and returns false for them.
    /// Also false for nil or already freed objects. Every other handle to the
    /// object reads as stale afterwards.
    pub fn free(self) -> bool {
        destroy(self.handle())
    }
}
