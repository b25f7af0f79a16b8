// Generated by gdbind-codegen from extension_api.json. Do not edit.

//! Marker types naming engine overridables in `Overridable` bounds.

#![allow(non_camel_case_types)]

pub struct _backspace;
pub struct _confirm_code_completion;
pub struct _copy;
pub struct _cut;
pub struct _draw;
pub struct _enter_tree;
pub struct _exit_tree;
pub struct _filter_code_completion_candidates;
pub struct _get_minimum_size;
pub struct _handle_unicode_input;
pub struct _has_point;
pub struct _paste;
pub struct _physics_process;
pub struct _process;
pub struct _ready;
pub struct _request_code_completion;
pub struct _setup_local_to_scene;
pub struct _use_tile_data_runtime_update;
