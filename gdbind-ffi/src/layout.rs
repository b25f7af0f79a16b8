/// Opaque engine-owned storage of `N` machine words.
///
/// The engine defines the contents; the host only moves the bits around and
/// hands pointers to them back to the engine.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Opaque<const N: usize>(pub [usize; N]);

impl<const N: usize> Opaque<N> {
    pub const ZEROED: Self = Self([0; N]);
}

impl<const N: usize> Default for Opaque<N> {
    fn default() -> Self {
        Self::ZEROED
    }
}

pub type StringOpaque = Opaque<1>;
pub type StringNameOpaque = Opaque<1>;
pub type NodePathOpaque = Opaque<1>;
pub type ArrayOpaque = Opaque<1>;
pub type DictionaryOpaque = Opaque<1>;
pub type PackedArrayOpaque = Opaque<2>;
pub type CallableOpaque = Opaque<2>;
pub type VariantOpaque = Opaque<3>;

/// Error record filled by the engine (or by host callables) on a dynamic call.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CallError {
    pub error: u32,
    pub argument: i32,
    pub expected: i32,
}

impl CallError {
    pub const OK: u32 = 0;
    pub const INVALID_METHOD: u32 = 1;
    pub const INVALID_ARGUMENT: u32 = 2;
    pub const TOO_MANY_ARGUMENTS: u32 = 3;
    pub const TOO_FEW_ARGUMENTS: u32 = 4;
    pub const INSTANCE_IS_NULL: u32 = 5;

    pub fn is_ok(&self) -> bool {
        self.error == Self::OK
    }
}
