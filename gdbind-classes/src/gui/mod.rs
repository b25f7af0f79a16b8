// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod code_edit;
pub mod control;
pub mod text_edit;

pub use code_edit::CodeEdit;
pub use control::Control;
pub use text_edit::TextEdit;
