// Dictionary: engine map keyed by Variant, iterated in insertion order.

use std::fmt;
use std::marker::PhantomData;

use gdbind_ffi::{ArrayOpaque, DictionaryOpaque, VariantOpaque};

use super::array::Array;
use super::carrier_lifecycle;
use super::variant::Variant;
use crate::api::dictionary_api;
use crate::bridge::{Bridge, VariantBridge};

#[repr(transparent)]
pub struct Dictionary {
    opaque: DictionaryOpaque,
    _marker: PhantomData<*const ()>,
}

carrier_lifecycle!(Dictionary, 1, DICTIONARY);

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        let n = unsafe { (dictionary_api().size)(self.opaque_ptr()) };
        usize::try_from(n).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_variant(&self, key: &Variant) -> Option<Variant> {
        let mut out = VariantOpaque::ZEROED;
        let found = unsafe {
            (dictionary_api().get)(self.opaque_ptr(), key.opaque_ptr(), (&raw mut out).cast())
        };
        found.then(|| unsafe { Variant::from_engine(out) })
    }

    pub fn get<K: VariantBridge>(&self, key: &K) -> Option<Variant> {
        self.get_variant(&Variant::from_value(key))
    }

    /// Typed lookup: `None` when the key is absent or holds another type.
    pub fn get_as<K: VariantBridge, V: VariantBridge>(&self, key: &K) -> Option<V> {
        self.get(key)?.try_to::<V>()
    }

    pub fn contains_key<K: VariantBridge>(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn set_variant(&mut self, key: &Variant, value: &Variant) {
        let (key, value) = (key.opaque_ptr(), value.opaque_ptr());
        unsafe { (dictionary_api().set)(self.opaque_mut_ptr(), key, value) };
    }

    pub fn set<K: VariantBridge, V: VariantBridge>(&mut self, key: &K, value: &V) {
        self.set_variant(&Variant::from_value(key), &Variant::from_value(value));
    }

    /// Returns whether the key was present.
    pub fn remove<K: VariantBridge>(&mut self, key: &K) -> bool {
        let key = Variant::from_value(key);
        unsafe { (dictionary_api().erase)(self.opaque_mut_ptr(), key.opaque_ptr()) }
    }

    pub fn keys(&self) -> Array {
        let mut out = ArrayOpaque::ZEROED;
        unsafe {
            (dictionary_api().keys)(self.opaque_ptr(), (&raw mut out).cast());
            Array::from_engine(out)
        }
    }

    /// (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, Variant)> + '_ {
        let keys = self.keys();
        (0..keys.len()).filter_map(move |i| {
            let key = keys.get(i)?;
            let value = self.get_variant(&key)?;
            Some((key, value))
        })
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
