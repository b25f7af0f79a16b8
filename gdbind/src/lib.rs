// gdbind: user-facing crate. Host crates depend on this and invoke
// `gdbind::entry!()` to export the engine entry points from their cdylib.
//
//! ## Feature Flags
//!
//! | Feature      | Modules                                         |
//! |--------------|-------------------------------------------------|
//! | (always)     | Object, RefCounted, Resource, Node              |
//! | `scene_3d`   | Node3D and the visual instance chain            |
//! | `csg`        | CSG shapes and primitives (enables `scene_3d`)  |
//! | `scene_2d`   | CanvasItem, Node2D, TileMap                     |
//! | `gui`        | Control, TextEdit, CodeEdit (enables `scene_2d`) |
//! | `audio`      | Audio effects                                   |
//! | `navigation` | Navigation meshes                               |
//! | `geometry`   | The Geometry2D singleton                        |
//!
//! ## Overrides
//!
//! A `#[gdvirtual]` method must take and return the types the engine
//! declares for that overridable:
//!
//! ```
//! use gdbind::prelude::*;
//!
//! #[gdclass(base = CodeEdit)]
//! #[derive(Default)]
//! struct Editor {
//!     replaced: bool,
//! }
//!
//! #[gdclass_impl]
//! impl Editor {
//!     #[gdvirtual]
//!     fn _confirm_code_completion(&mut self, replace: bool) {
//!         self.replaced = replace;
//!     }
//! }
//! ```
//!
//! Any other signature is a build error:
//!
//! ```compile_fail
//! use gdbind::prelude::*;
//!
//! #[gdclass(base = CodeEdit)]
//! #[derive(Default)]
//! struct Editor;
//!
//! #[gdclass_impl]
//! impl Editor {
//!     #[gdvirtual]
//!     fn _confirm_code_completion(&mut self, replace: i64) {}
//! }
//! ```

use std::panic::AssertUnwindSafe;

use log::LevelFilter;

// Re-exports for proc macro path resolution and user access.
pub use gdbind_classes as classes;
pub use gdbind_ffi as ffi;
pub use gdbind_macros::{gdclass, gdclass_impl, gdvirtual};
pub use gdbind_runtime as runtime;

pub mod prelude;

pub use glam;

use runtime::{callable_registry, class_registry, host_class, pointer_registry, ObjectPtr};

// ---------------------------------------------------------------------------
// Callbacks handed back to the engine
// ---------------------------------------------------------------------------

unsafe extern "C" fn on_shutdown() {
    runtime::ffi_boundary((), release_all);
}

unsafe extern "C" fn on_object_freed(obj: ObjectPtr) {
    runtime::ffi_boundary((), || pointer_registry::invalidate(obj));
}

#[doc(hidden)]
pub static __CALLBACKS: ffi::HostCallbacks = ffi::HostCallbacks { on_shutdown, on_object_freed };

// ---------------------------------------------------------------------------
// Init / Shutdown
// ---------------------------------------------------------------------------

/// Options for [`init_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOptions {
    /// Maximum level forwarded to the engine log.
    pub log_level: LevelFilter,
}

impl Default for InitOptions {
    fn default() -> Self {
        InitOptions { log_level: LevelFilter::Info }
    }
}

/// Initialize with default options. Called by the `entry!()` generated
/// `gdbind_init`.
pub fn init(interface: *const ffi::EngineInterface) -> *const ffi::HostCallbacks {
    init_with(interface, InitOptions::default())
}

/// Store the interface table, install the engine logger, fill the class
/// registry, resolve every method bind and register host classes, in that
/// order. Returns the callback table, or null when any step fails; the
/// failure is logged through the engine when the table itself was usable.
pub fn init_with(
    interface: *const ffi::EngineInterface,
    options: InitOptions,
) -> *const ffi::HostCallbacks {
    runtime::ffi_boundary(
        std::ptr::null(),
        AssertUnwindSafe(|| match try_init(interface, options) {
            Ok(()) => &__CALLBACKS as *const ffi::HostCallbacks,
            Err(err) => {
                log::error!("init failed: {err}");
                std::ptr::null()
            }
        }),
    )
}

fn try_init(
    interface: *const ffi::EngineInterface,
    options: InitOptions,
) -> runtime::BindResult<()> {
    runtime::init_api(interface)?;
    runtime::install_logger(options.log_level);
    let classes = class_registry::register_all_from_inventory();
    gdbind_classes::load_method_binds()?;
    let hosted = host_class::register_all_from_inventory()?;
    log::info!("{} ({classes} engine classes, {hosted} host classes)", feature_greeting());
    Ok(())
}

/// Greeting line listing the compiled-in class modules.
fn feature_greeting() -> String {
    macro_rules! collect_features {
        ($s:expr, $($feat:literal),+ $(,)?) => {{
            $(
                #[cfg(feature = $feat)]
                $s.push_str(concat!(" ", $feat));
            )+
        }};
    }
    let mut s = String::from("gdbind initialized (features: core");
    collect_features!(s, "scene_3d", "csg", "scene_2d", "gui", "audio", "navigation", "geometry");
    s.push(')');
    s
}

/// Withdraw host classes and drop every host closure the engine still
/// references. Called by the `entry!()` generated `gdbind_shutdown`.
pub fn shutdown() {
    runtime::ffi_boundary((), release_all);
}

fn release_all() {
    host_class::unregister_all();
    callable_registry::clear_all();
    pointer_registry::clear();
    log::debug!("shutdown complete");
}

/// Exports the engine entry points from the host cdylib.
///
/// ```ignore
/// gdbind::entry!();
/// ```
///
/// Generates `gdbind_init` and `gdbind_shutdown`. An optional expression
/// of type [`InitOptions`] replaces the defaults:
///
/// ```ignore
/// gdbind::entry!(gdbind::InitOptions { log_level: log::LevelFilter::Debug });
/// ```
#[macro_export]
macro_rules! entry {
    () => {
        $crate::entry!($crate::InitOptions::default());
    };
    ($options:expr) => {
        pub mod __gdbind_entry {
            #[allow(unused_imports)]
            use super::*;

            #[unsafe(no_mangle)]
            pub extern "C" fn gdbind_init(
                interface: *const $crate::ffi::EngineInterface,
            ) -> *const ::std::ffi::c_void {
                $crate::init_with(interface, $options).cast()
            }

            #[unsafe(no_mangle)]
            pub extern "C" fn gdbind_shutdown() {
                $crate::shutdown()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_lists_core_first() {
        let greeting = feature_greeting();
        assert!(greeting.starts_with("gdbind initialized (features: core"));
        assert!(greeting.ends_with(')'));
        #[cfg(feature = "gui")]
        assert!(greeting.contains(" gui"));
    }

    #[test]
    fn default_options_log_at_info() {
        assert_eq!(InitOptions::default().log_level, LevelFilter::Info);
    }

    #[test]
    fn null_interface_is_refused() {
        assert!(init(std::ptr::null()).is_null());
    }
}
