// Engine type strings (plus `meta`) to the Rust types and marshalling
// expressions emitted at the Advanced and Instance levels.
//
// Advanced signatures use the canonical carriers. Instance signatures swap
// text carriers for `&str`/`String` and packed or typed arrays for slices
// and `Vec`s; everything else is shared.

use crate::context::CodegenContext;
use crate::naming::to_snake_case;

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Bool,
    /// Engine `int`; the Rust type is `i64` unless `meta` narrows it.
    Int(&'static str),
    /// Engine `float`; `f32` when `meta` says single precision.
    Float(&'static str),
    /// Passed by value in its engine layout.
    Pod(&'static str),
    /// String, StringName, NodePath.
    Text(&'static str),
    /// Variant, Array, Dictionary, Callable.
    Carrier(&'static str),
    Packed { alias: &'static str, elem: &'static str },
    TypedArray { elem: String },
    /// Rust path of a generated enum newtype.
    Enum { path: String, owner: Option<String> },
    Object { class: String },
}

/// Whether an object return owns a reference (see `Ownership`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOwnership {
    Transferred,
    Borrowed,
    Acquire,
}

impl ReturnOwnership {
    pub fn parse(ownership: Option<&str>) -> Self {
        match ownership {
            Some("transferred") => ReturnOwnership::Transferred,
            Some("borrowed") => ReturnOwnership::Borrowed,
            _ => ReturnOwnership::Acquire,
        }
    }

    fn variant(self) -> &'static str {
        match self {
            ReturnOwnership::Transferred => "Transferred",
            ReturnOwnership::Borrowed => "Borrowed",
            ReturnOwnership::Acquire => "Acquire",
        }
    }
}

fn int_type(meta: Option<&str>) -> &'static str {
    match meta {
        Some("int8") => "i8",
        Some("int16") => "i16",
        Some("int32") => "i32",
        Some("uint8") => "u8",
        Some("uint16") => "u16",
        Some("uint32") => "u32",
        _ => "i64",
    }
}

fn packed(name: &str) -> Option<(&'static str, &'static str)> {
    Some(match name {
        "PackedByteArray" => ("PackedByteArray", "u8"),
        "PackedInt32Array" => ("PackedInt32Array", "i32"),
        "PackedInt64Array" => ("PackedInt64Array", "i64"),
        "PackedFloat32Array" => ("PackedFloat32Array", "f32"),
        "PackedFloat64Array" => ("PackedFloat64Array", "f64"),
        "PackedStringArray" => ("PackedStringArray", "GString"),
        "PackedVector2Array" => ("PackedVector2Array", "Vector2"),
        "PackedVector3Array" => ("PackedVector3Array", "Vector3"),
        "PackedColorArray" => ("PackedColorArray", "Color"),
        _ => return None,
    })
}

/// Element types a `TypedArray` can hold: anything with a Variant tag.
fn typed_array_elem(name: &str, ctx: &CodegenContext) -> Option<String> {
    match TypeKind::parse(name, None, ctx)? {
        TypeKind::Bool => Some("bool".to_owned()),
        TypeKind::Int(_) => Some("i64".to_owned()),
        TypeKind::Float(_) => Some("f64".to_owned()),
        TypeKind::Pod(t) | TypeKind::Text(t) => Some(t.to_owned()),
        TypeKind::Carrier(t) if t != "Variant" => Some(t.to_owned()),
        TypeKind::Packed { alias, .. } => Some(alias.to_owned()),
        TypeKind::Enum { path, .. } => Some(path),
        _ => None,
    }
}

impl TypeKind {
    /// `None` when the type has no bridge; the method is then skipped.
    pub fn parse(ty: &str, meta: Option<&str>, ctx: &CodegenContext) -> Option<TypeKind> {
        let enum_name = ty.strip_prefix("enum::").or_else(|| ty.strip_prefix("bitfield::"));
        if let Some(qualified) = enum_name {
            let (owner, e) = ctx.find_enum(qualified)?;
            let path = match owner {
                Some(class) => format!("{}::{}", ctx.class_module_path(class), e.name),
                None => format!("crate::global_enums::{}", e.name),
            };
            return Some(TypeKind::Enum { path, owner: owner.map(str::to_owned) });
        }
        if let Some(elem) = ty.strip_prefix("typedarray::") {
            return typed_array_elem(elem, ctx).map(|elem| TypeKind::TypedArray { elem });
        }
        if let Some((alias, elem)) = packed(ty) {
            return Some(TypeKind::Packed { alias, elem });
        }
        Some(match ty {
            "bool" => TypeKind::Bool,
            "int" => TypeKind::Int(int_type(meta)),
            "float" if meta == Some("float") => TypeKind::Float("f32"),
            "float" => TypeKind::Float("f64"),
            "Vector2" => TypeKind::Pod("Vector2"),
            "Vector2i" => TypeKind::Pod("Vector2i"),
            "Vector3" => TypeKind::Pod("Vector3"),
            "Color" => TypeKind::Pod("Color"),
            "String" => TypeKind::Text("GString"),
            "StringName" => TypeKind::Text("StringName"),
            "NodePath" => TypeKind::Text("NodePath"),
            "Variant" => TypeKind::Carrier("Variant"),
            "Array" => TypeKind::Carrier("Array"),
            "Dictionary" => TypeKind::Carrier("Dictionary"),
            "Callable" => TypeKind::Carrier("Callable"),
            class if ctx.classes.contains_key(class) => {
                TypeKind::Object { class: class.to_owned() }
            }
            _ => return None,
        })
    }

    /// Class the type refers to (object class or enum owner), if any.
    pub fn referenced_class(&self) -> Option<&str> {
        match self {
            TypeKind::Object { class } => Some(class),
            TypeKind::Enum { owner: Some(owner), .. } => Some(owner),
            _ => None,
        }
    }

    fn is_narrow(&self) -> bool {
        matches!(self, TypeKind::Int(t) if *t != "i64") || matches!(self, TypeKind::Float("f32"))
    }

    // -- Advanced level ----------------------------------------------------

    pub fn advanced_param(&self) -> String {
        match self {
            TypeKind::Bool => "bool".to_owned(),
            TypeKind::Int(t) | TypeKind::Float(t) | TypeKind::Pod(t) => (*t).to_owned(),
            TypeKind::Text(t) | TypeKind::Carrier(t) => format!("&{t}"),
            TypeKind::Packed { alias, .. } => format!("&{alias}"),
            TypeKind::TypedArray { elem } => format!("&TypedArray<{elem}>"),
            TypeKind::Enum { path, .. } => path.clone(),
            TypeKind::Object { class } => format!("Option<&{class}>"),
        }
    }

    pub fn advanced_ret(&self) -> String {
        match self {
            TypeKind::Text(t) | TypeKind::Carrier(t) => (*t).to_owned(),
            TypeKind::Packed { alias, .. } => (*alias).to_owned(),
            TypeKind::TypedArray { elem } => format!("TypedArray<{elem}>"),
            TypeKind::Object { class } => format!("Option<{class}>"),
            _ => self.advanced_param(),
        }
    }

    /// Expression handed to `CallFrame::arg` for parameter `name`.
    pub fn frame_arg(&self, name: &str) -> String {
        match self {
            TypeKind::Int(_) if self.is_narrow() => format!("&i64::from({name})"),
            TypeKind::Float(_) if self.is_narrow() => format!("&f64::from({name})"),
            TypeKind::Text(_)
            | TypeKind::Carrier(_)
            | TypeKind::Packed { .. }
            | TypeKind::TypedArray { .. } => name.to_owned(),
            TypeKind::Object { .. } => format!("&{name}.map_or(ObjectPtr::NULL, |o| o.handle())"),
            _ => format!("&{name}"),
        }
    }

    /// Type read back from the return slot.
    pub fn ret_wire(&self) -> String {
        match self {
            TypeKind::Int(_) if self.is_narrow() => "i64".to_owned(),
            TypeKind::Float(_) if self.is_narrow() => "f64".to_owned(),
            TypeKind::Object { .. } => "ObjectPtr".to_owned(),
            _ => self.advanced_ret(),
        }
    }

    /// Conversion from the wire value `ret` to the Advanced return type, or
    /// `None` when the wire value is returned as is.
    pub fn ret_convert(&self, ownership: ReturnOwnership) -> Option<String> {
        match self {
            TypeKind::Int(t) | TypeKind::Float(t) if self.is_narrow() => {
                Some(format!("ret as {t}"))
            }
            TypeKind::Object { class } => {
                let ownership = ownership.variant();
                Some(format!("unsafe {{ adopt::<{class}>(ret, Ownership::{ownership}) }}"))
            }
            _ => None,
        }
    }

    // -- Instance level ----------------------------------------------------

    pub fn instance_param(&self, nullable: bool) -> String {
        match self {
            TypeKind::Text(_) => "&str".to_owned(),
            TypeKind::Packed { elem, .. } => format!("&[{elem}]"),
            TypeKind::TypedArray { elem } => format!("&[{elem}]"),
            TypeKind::Object { class } if !nullable => format!("&impl Inherits<{class}>"),
            _ => self.advanced_param(),
        }
    }

    /// Expression turning Instance parameter `name` into the Advanced argument.
    pub fn instance_arg(&self, name: &str, nullable: bool) -> String {
        match self {
            TypeKind::Text(t) => format!("&{t}::from({name})"),
            TypeKind::Packed { alias, .. } => format!("&{alias}::from_slice({name})"),
            TypeKind::TypedArray { .. } => format!("&TypedArray::from_slice({name})"),
            TypeKind::Object { .. } if !nullable => format!("Some(upcast_ref({name}))"),
            _ => name.to_owned(),
        }
    }

    pub fn instance_ret(&self) -> String {
        match self {
            TypeKind::Text(_) => "String".to_owned(),
            TypeKind::Packed { elem, .. } => format!("Vec<{elem}>"),
            TypeKind::TypedArray { elem } => format!("Vec<{elem}>"),
            _ => self.advanced_ret(),
        }
    }

    pub fn instance_ret_convert(&self, expr: &str) -> String {
        match self {
            TypeKind::Text(_) => format!("{expr}.to_string()"),
            TypeKind::Packed { .. } | TypeKind::TypedArray { .. } => format!("{expr}.to_vec()"),
            _ => expr.to_owned(),
        }
    }

    // -- Overridables ------------------------------------------------------

    /// Parameter type of a host override. Objects may be null and are lent
    /// for the duration of the call.
    pub fn virtual_param(&self) -> String {
        match self {
            TypeKind::Text(t) | TypeKind::Carrier(t) => (*t).to_owned(),
            TypeKind::Object { class } => format!("Option<Borrowed<crate::{class}>>"),
            _ => self.virtual_ret(),
        }
    }

    pub fn virtual_ret(&self) -> String {
        match self {
            TypeKind::Object { class } => format!("Option<crate::{class}>"),
            _ => self.advanced_ret(),
        }
    }

    // -- Signals -----------------------------------------------------------

    /// Type a signal argument is decoded to. Signal arguments travel as
    /// Variants, so numerics are always 64-bit.
    pub fn signal_type(&self) -> String {
        match self {
            TypeKind::Int(_) => "i64".to_owned(),
            TypeKind::Float(_) => "f64".to_owned(),
            _ => self.advanced_ret(),
        }
    }

    pub fn signal_read(&self, index: usize) -> String {
        match self {
            TypeKind::Object { class } => format!("args.object::<{class}>({index})"),
            TypeKind::Carrier("Variant") => {
                format!("args.variant({index}).cloned().unwrap_or_default()")
            }
            _ => format!("args.arg::<{}>({index})", self.signal_type()),
        }
    }
}

/// Snake-case module name for a class file.
pub fn class_file_stem(class: &str) -> String {
    to_snake_case(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GdbindConfig;
    use crate::schema::ApiFile;

    fn ctx() -> CodegenContext {
        let api: ApiFile = serde_json::from_str(
            r#"{
              "header": {"version_major": 4, "version_minor": 2},
              "global_enums": [{"name": "Error", "values": [{"name": "OK", "value": 0}]}],
              "classes": [
                {"name": "Object"},
                {"name": "Node", "inherits": "Object",
                 "enums": [{"name": "ProcessMode",
                            "values": [{"name": "PROCESS_MODE_INHERIT", "value": 0}]}]}
              ]
            }"#,
        )
        .unwrap();
        let cfg: GdbindConfig = toml::from_str("[codegen]\napi = \"\"\nout = \"\"\n").unwrap();
        CodegenContext::new(api, &cfg.codegen).unwrap()
    }

    #[test]
    fn meta_narrows_numerics() {
        let ctx = ctx();
        let t = TypeKind::parse("int", Some("int32"), &ctx).unwrap();
        assert_eq!(t.advanced_param(), "i32");
        assert_eq!(t.frame_arg("voice_idx"), "&i64::from(voice_idx)");
        assert_eq!(t.ret_wire(), "i64");
        assert_eq!(t.ret_convert(ReturnOwnership::Acquire).as_deref(), Some("ret as i32"));

        let t = TypeKind::parse("float", None, &ctx).unwrap();
        assert_eq!(t.advanced_param(), "f64");
        assert_eq!(t.ret_convert(ReturnOwnership::Acquire), None);
    }

    #[test]
    fn carriers_and_host_types() {
        let ctx = ctx();
        let t = TypeKind::parse("String", None, &ctx).unwrap();
        assert_eq!(t.advanced_param(), "&GString");
        assert_eq!(t.instance_param(false), "&str");
        assert_eq!(t.instance_arg("text", false), "&GString::from(text)");
        assert_eq!(t.instance_ret_convert("x"), "x.to_string()");

        let t = TypeKind::parse("PackedInt32Array", None, &ctx).unwrap();
        assert_eq!(t.instance_param(false), "&[i32]");
        assert_eq!(t.instance_ret(), "Vec<i32>");

        let t = TypeKind::parse("typedarray::Vector2i", None, &ctx).unwrap();
        assert_eq!(t.advanced_ret(), "TypedArray<Vector2i>");
        assert!(TypeKind::parse("typedarray::Node", None, &ctx).is_none());
    }

    #[test]
    fn objects_and_enums() {
        let ctx = ctx();
        let t = TypeKind::parse("Node", None, &ctx).unwrap();
        assert_eq!(t.advanced_param(), "Option<&Node>");
        assert_eq!(t.instance_param(false), "&impl Inherits<Node>");
        assert_eq!(t.instance_param(true), "Option<&Node>");
        assert_eq!(
            t.ret_convert(ReturnOwnership::parse(Some("borrowed"))).as_deref(),
            Some("unsafe { adopt::<Node>(ret, Ownership::Borrowed) }")
        );

        let t = TypeKind::parse("enum::Node.ProcessMode", None, &ctx).unwrap();
        assert_eq!(t.advanced_param(), "crate::core::node::ProcessMode");
        assert_eq!(t.referenced_class(), Some("Node"));
        let t = TypeKind::parse("enum::Error", None, &ctx).unwrap();
        assert_eq!(t.advanced_param(), "crate::global_enums::Error");
        assert!(TypeKind::parse("Rect2", None, &ctx).is_none());
    }

    #[test]
    fn overrides_take_owned_carriers() {
        let ctx = ctx();
        let t = TypeKind::parse("int", Some("int32"), &ctx).unwrap();
        assert_eq!(t.virtual_param(), "i32");
        assert_eq!(TypeKind::parse("String", None, &ctx).unwrap().virtual_param(), "GString");
        let t = TypeKind::parse("Node", None, &ctx).unwrap();
        assert_eq!(t.virtual_param(), "Option<Borrowed<crate::Node>>");
        assert_eq!(t.virtual_ret(), "Option<crate::Node>");
    }
}
