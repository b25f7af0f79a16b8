// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod audio_effect;
pub mod audio_effect_chorus;

pub use audio_effect::AudioEffect;
pub use audio_effect_chorus::AudioEffectChorus;
