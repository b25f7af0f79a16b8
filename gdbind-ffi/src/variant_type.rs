/// Engine value type tag. Ordinals match the engine's variant type enumeration.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct VariantType(pub u32);

impl VariantType {
    pub const NIL: Self = Self(0);
    pub const BOOL: Self = Self(1);
    pub const INT: Self = Self(2);
    pub const FLOAT: Self = Self(3);
    pub const STRING: Self = Self(4);
    pub const VECTOR2: Self = Self(5);
    pub const VECTOR2I: Self = Self(6);
    pub const VECTOR3: Self = Self(9);
    pub const COLOR: Self = Self(20);
    pub const STRING_NAME: Self = Self(21);
    pub const NODE_PATH: Self = Self(22);
    pub const OBJECT: Self = Self(24);
    pub const CALLABLE: Self = Self(25);
    pub const DICTIONARY: Self = Self(27);
    pub const ARRAY: Self = Self(28);
    pub const PACKED_BYTE_ARRAY: Self = Self(29);
    pub const PACKED_INT32_ARRAY: Self = Self(30);
    pub const PACKED_INT64_ARRAY: Self = Self(31);
    pub const PACKED_FLOAT32_ARRAY: Self = Self(32);
    pub const PACKED_FLOAT64_ARRAY: Self = Self(33);
    pub const PACKED_STRING_ARRAY: Self = Self(34);
    pub const PACKED_VECTOR2_ARRAY: Self = Self(35);
    pub const PACKED_VECTOR3_ARRAY: Self = Self(36);
    pub const PACKED_COLOR_ARRAY: Self = Self(37);

    /// Whether values of this type are stored as the 2-word packed-array layout.
    pub fn is_packed_array(self) -> bool {
        (Self::PACKED_BYTE_ARRAY.0..=Self::PACKED_COLOR_ARRAY.0).contains(&self.0)
    }

    /// Element stride in bytes for packed arrays, `None` for other types.
    pub fn packed_stride(self) -> Option<usize> {
        let stride = match self {
            Self::PACKED_BYTE_ARRAY => 1,
            Self::PACKED_INT32_ARRAY | Self::PACKED_FLOAT32_ARRAY => 4,
            Self::PACKED_INT64_ARRAY | Self::PACKED_FLOAT64_ARRAY => 8,
            Self::PACKED_STRING_ARRAY => size_of::<usize>(),
            Self::PACKED_VECTOR2_ARRAY => 8,
            Self::PACKED_VECTOR3_ARRAY => 12,
            Self::PACKED_COLOR_ARRAY => 16,
            _ => return None,
        };
        Some(stride)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NIL => "Nil",
            Self::BOOL => "bool",
            Self::INT => "int",
            Self::FLOAT => "float",
            Self::STRING => "String",
            Self::VECTOR2 => "Vector2",
            Self::VECTOR2I => "Vector2i",
            Self::VECTOR3 => "Vector3",
            Self::COLOR => "Color",
            Self::STRING_NAME => "StringName",
            Self::NODE_PATH => "NodePath",
            Self::OBJECT => "Object",
            Self::CALLABLE => "Callable",
            Self::DICTIONARY => "Dictionary",
            Self::ARRAY => "Array",
            Self::PACKED_BYTE_ARRAY => "PackedByteArray",
            Self::PACKED_INT32_ARRAY => "PackedInt32Array",
            Self::PACKED_INT64_ARRAY => "PackedInt64Array",
            Self::PACKED_FLOAT32_ARRAY => "PackedFloat32Array",
            Self::PACKED_FLOAT64_ARRAY => "PackedFloat64Array",
            Self::PACKED_STRING_ARRAY => "PackedStringArray",
            Self::PACKED_VECTOR2_ARRAY => "PackedVector2Array",
            Self::PACKED_VECTOR3_ARRAY => "PackedVector3Array",
            Self::PACKED_COLOR_ARRAY => "PackedColorArray",
            _ => "<unknown>",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_range_is_closed() {
        assert!(VariantType::PACKED_BYTE_ARRAY.is_packed_array());
        assert!(VariantType::PACKED_COLOR_ARRAY.is_packed_array());
        assert!(!VariantType::ARRAY.is_packed_array());
        assert!(!VariantType(38).is_packed_array());
    }

    #[test]
    fn strides() {
        assert_eq!(VariantType::PACKED_VECTOR3_ARRAY.packed_stride(), Some(12));
        assert_eq!(VariantType::PACKED_BYTE_ARRAY.packed_stride(), Some(1));
        assert_eq!(VariantType::DICTIONARY.packed_stride(), None);
    }
}
