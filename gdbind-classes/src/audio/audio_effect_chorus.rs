// Generated by gdbind-codegen from extension_api.json. Do not edit.
// Engine version: Godot Engine v4.2.stable.official

#![allow(unused_imports, clippy::too_many_arguments)]

use std::any::Any;
use std::ops::Deref;

use gdbind_runtime::*;

use crate::bind_table::binds;
use crate::AudioEffect;
use crate::Object;
use crate::RefCounted;
use crate::Resource;

/// Engine class `AudioEffectChorus` (inherits `AudioEffect`).
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AudioEffectChorus(RefHandle);

impl EngineClass for AudioEffectChorus {
    const CLASS_NAME: &'static str = "AudioEffectChorus";
    const REF_COUNTED: bool = true;
    const VIRTUALS: &'static [&'static str] = &[];

    unsafe fn from_handle(ptr: ObjectPtr) -> Self {
        AudioEffectChorus(unsafe { RefHandle::adopt(ptr) })
    }

    fn handle(&self) -> ObjectPtr {
        self.0.ptr()
    }

    fn virtual_owner(name: &str) -> Option<&'static str> {
        find_virtual::<Self>(name)
    }
}

impl Overridable<crate::virtuals::_setup_local_to_scene> for AudioEffectChorus {
    type Signature = fn();
}

impl HasBase for AudioEffectChorus {
    type Base = AudioEffect;
}

unsafe impl Inherits<AudioEffect> for AudioEffectChorus {}
unsafe impl Inherits<Resource> for AudioEffectChorus {}
unsafe impl Inherits<RefCounted> for AudioEffectChorus {}
unsafe impl Inherits<Object> for AudioEffectChorus {}

impl Deref for AudioEffectChorus {
    type Target = AudioEffect;

    fn deref(&self) -> &AudioEffect {
        upcast_ref(self)
    }
}

fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {
    Box::new(unsafe { adopt::<AudioEffectChorus>(ptr, Ownership::Acquire) }.unwrap_or_default())
}

gdbind_runtime::__inventory::submit! {
    ClassRegistration { name: "AudioEffectChorus", parent: Some("AudioEffect"), ref_counted: true, construct: wrap_handle }
}

impl AudioEffectChorus {
    pub const NIL: Self = AudioEffectChorus(RefHandle::NIL);

    /// Construct a new engine instance.
    pub fn new() -> Self {
        construct::<Self>()
    }

    /// Every bound method under its engine name, with canonical carriers.
    pub fn advanced(&self) -> &Advanced {
        // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.
        unsafe { &*(self as *const Self).cast::<Advanced>() }
    }

    pub fn as_audio_effect(&self) -> &AudioEffect {
        upcast_ref(self)
    }

    pub fn as_resource(&self) -> &Resource {
        upcast_ref(self)
    }

    pub fn as_ref_counted(&self) -> &RefCounted {
        upcast_ref(self)
    }

    pub fn as_object(&self) -> &Object {
        upcast_ref(self)
    }

    /// Property `voice_count`.
    pub fn voice_count(&self) -> i64 {
        self.advanced().get_voice_count()
    }

    pub fn set_voice_count(&self, value: i64) {
        self.advanced().set_voice_count(value)
    }

    /// Property `dry`.
    pub fn dry(&self) -> f64 {
        self.advanced().get_dry()
    }

    pub fn set_dry(&self, value: f64) {
        self.advanced().set_dry(value)
    }

    /// Property `wet`.
    pub fn wet(&self) -> f64 {
        self.advanced().get_wet()
    }

    pub fn set_wet(&self, value: f64) {
        self.advanced().set_wet(value)
    }

    pub fn set_voice_delay_ms(&self, voice_idx: i32, delay_ms: f32) {
        self.advanced().set_voice_delay_ms(voice_idx, delay_ms)
    }

    pub fn get_voice_delay_ms(&self, voice_idx: i32) -> f64 {
        self.advanced().get_voice_delay_ms(voice_idx)
    }

    pub fn set_voice_rate_hz(&self, voice_idx: i32, rate_hz: f32) {
        self.advanced().set_voice_rate_hz(voice_idx, rate_hz)
    }

    pub fn get_voice_rate_hz(&self, voice_idx: i32) -> f64 {
        self.advanced().get_voice_rate_hz(voice_idx)
    }

    pub fn set_voice_depth_ms(&self, voice_idx: i32, depth_ms: f32) {
        self.advanced().set_voice_depth_ms(voice_idx, depth_ms)
    }

    pub fn get_voice_depth_ms(&self, voice_idx: i32) -> f64 {
        self.advanced().get_voice_depth_ms(voice_idx)
    }

    pub fn set_voice_level_db(&self, voice_idx: i32, level_db: f32) {
        self.advanced().set_voice_level_db(voice_idx, level_db)
    }

    pub fn get_voice_level_db(&self, voice_idx: i32) -> f64 {
        self.advanced().get_voice_level_db(voice_idx)
    }

    pub fn set_voice_cutoff_hz(&self, voice_idx: i32, cutoff_hz: f32) {
        self.advanced().set_voice_cutoff_hz(voice_idx, cutoff_hz)
    }

    pub fn get_voice_cutoff_hz(&self, voice_idx: i32) -> f64 {
        self.advanced().get_voice_cutoff_hz(voice_idx)
    }

    pub fn set_voice_pan(&self, voice_idx: i32, pan: f32) {
        self.advanced().set_voice_pan(voice_idx, pan)
    }

    pub fn get_voice_pan(&self, voice_idx: i32) -> f64 {
        self.advanced().get_voice_pan(voice_idx)
    }
}

/// Raw surface of [`AudioEffectChorus`]: engine method names and canonical carriers.
#[repr(transparent)]
pub struct Advanced(AudioEffectChorus);

impl Advanced {
    pub fn instance(&self) -> &AudioEffectChorus {
        &self.0
    }

    pub fn set_voice_count(&self, voice_count: i64) {
        let mut frame = CallFrame::new();
        frame.arg(&voice_count);
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_count, self.0.handle()) }
    }

    pub fn get_voice_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().audio_effect_chorus.get_voice_count, self.0.handle()) }
    }

    pub fn set_dry(&self, dry: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&dry);
        unsafe { frame.call(binds().audio_effect_chorus.set_dry, self.0.handle()) }
    }

    pub fn get_dry(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().audio_effect_chorus.get_dry, self.0.handle()) }
    }

    pub fn set_wet(&self, wet: f64) {
        let mut frame = CallFrame::new();
        frame.arg(&wet);
        unsafe { frame.call(binds().audio_effect_chorus.set_wet, self.0.handle()) }
    }

    pub fn get_wet(&self) -> f64 {
        unsafe { CallFrame::new().call_ret(binds().audio_effect_chorus.get_wet, self.0.handle()) }
    }

    pub fn set_voice_delay_ms(&self, voice_idx: i32, delay_ms: f32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx)).arg(&f64::from(delay_ms));
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_delay_ms, self.0.handle()) }
    }

    pub fn get_voice_delay_ms(&self, voice_idx: i32) -> f64 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx));
        unsafe { frame.call_ret(binds().audio_effect_chorus.get_voice_delay_ms, self.0.handle()) }
    }

    pub fn set_voice_rate_hz(&self, voice_idx: i32, rate_hz: f32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx)).arg(&f64::from(rate_hz));
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_rate_hz, self.0.handle()) }
    }

    pub fn get_voice_rate_hz(&self, voice_idx: i32) -> f64 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx));
        unsafe { frame.call_ret(binds().audio_effect_chorus.get_voice_rate_hz, self.0.handle()) }
    }

    pub fn set_voice_depth_ms(&self, voice_idx: i32, depth_ms: f32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx)).arg(&f64::from(depth_ms));
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_depth_ms, self.0.handle()) }
    }

    pub fn get_voice_depth_ms(&self, voice_idx: i32) -> f64 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx));
        unsafe { frame.call_ret(binds().audio_effect_chorus.get_voice_depth_ms, self.0.handle()) }
    }

    pub fn set_voice_level_db(&self, voice_idx: i32, level_db: f32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx)).arg(&f64::from(level_db));
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_level_db, self.0.handle()) }
    }

    pub fn get_voice_level_db(&self, voice_idx: i32) -> f64 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx));
        unsafe { frame.call_ret(binds().audio_effect_chorus.get_voice_level_db, self.0.handle()) }
    }

    pub fn set_voice_cutoff_hz(&self, voice_idx: i32, cutoff_hz: f32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx)).arg(&f64::from(cutoff_hz));
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_cutoff_hz, self.0.handle()) }
    }

    pub fn get_voice_cutoff_hz(&self, voice_idx: i32) -> f64 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx));
        unsafe { frame.call_ret(binds().audio_effect_chorus.get_voice_cutoff_hz, self.0.handle()) }
    }

    pub fn set_voice_pan(&self, voice_idx: i32, pan: f32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx)).arg(&f64::from(pan));
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_pan, self.0.handle()) }
    }

    pub fn get_voice_pan(&self, voice_idx: i32) -> f64 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx));
        unsafe { frame.call_ret(binds().audio_effect_chorus.get_voice_pan, self.0.handle()) }
    }
}

impl Deref for Advanced {
    type Target = crate::audio::audio_effect::Advanced;

    fn deref(&self) -> &Self::Target {
        self.0.as_audio_effect().advanced()
    }
}
