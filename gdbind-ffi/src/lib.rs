// gdbind-ffi: #[repr(C)] types, handle types, engine interface table.
// Zero external dependencies. This crate defines the complete host <-> engine contract.

pub mod handles;
pub mod variant_type;
pub mod layout;
pub mod api_table;
pub mod extension;
pub mod callbacks;
pub mod contract_tests;

pub use handles::*;
pub use variant_type::*;
pub use layout::*;
pub use api_table::*;
pub use extension::*;
pub use callbacks::*;
