// Compile-time contract tests: layout of everything that crosses the boundary.
// These const assertions fail at compile time if sizes drift.

use std::mem::{align_of, size_of};

use crate::handles::*;
use crate::layout::*;
use crate::variant_type::VariantType;

const WORD: usize = size_of::<usize>();

const _: () = assert!(size_of::<ObjectPtr>() == WORD);
const _: () = assert!(size_of::<MethodBindPtr>() == WORD);
const _: () = assert!(size_of::<ClassInstancePtr>() == WORD);
const _: () = assert!(size_of::<VariantType>() == 4);
const _: () = assert!(size_of::<StringOpaque>() == WORD);
const _: () = assert!(size_of::<ArrayOpaque>() == WORD);
const _: () = assert!(size_of::<DictionaryOpaque>() == WORD);
const _: () = assert!(size_of::<PackedArrayOpaque>() == 2 * WORD);
const _: () = assert!(size_of::<CallableOpaque>() == 2 * WORD);
const _: () = assert!(size_of::<VariantOpaque>() == 3 * WORD);
const _: () = assert!(align_of::<VariantOpaque>() == align_of::<usize>());
const _: () = assert!(size_of::<CallError>() == 12);
