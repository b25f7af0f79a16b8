// Enum generation: newtypes over the engine's `int` with associated constants.
//
// Values the engine adds later still round-trip, so no conversion can fail.

use crate::context::CodegenContext;
use crate::naming::enum_constant_names;
use crate::schema::EnumInfo;

use super::HEADER;

/// Generate one enum. `owner` is the declaring class for class enums.
pub fn generate_enum(e: &EnumInfo, owner: Option<&str>) -> String {
    let name = &e.name;
    let qualified = match owner {
        Some(class) => format!("{class}.{name}"),
        None => name.clone(),
    };
    let raw: Vec<&str> = e.values.iter().map(|v| v.name.as_str()).collect();
    let consts = enum_constant_names(&raw);

    let mut out = String::with_capacity(1024);
    let kind = if e.is_bitfield { "bitfield" } else { "enum" };
    out.push_str(&format!(
        "/// Engine {kind} `{qualified}`.\n\
         #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]\n\
         pub struct {name}(i64);\n\n\
         impl {name} {{\n"
    ));
    let mut seen = std::collections::HashSet::new();
    for (value, konst) in e.values.iter().zip(&consts) {
        if !seen.insert(konst.as_str()) {
            log::debug!("{qualified}: duplicate constant {konst}");
            continue;
        }
        out.push_str(&format!("    pub const {konst}: {name} = {name}({});\n", value.value));
    }
    if e.is_bitfield {
        out.push_str(&format!(
            "\n    pub fn contains(self, other: {name}) -> bool {{\n\
             \x20       self.0 & other.0 == other.0\n\
             \x20   }}\n"
        ));
    }
    out.push_str("}\n\n");

    out.push_str(&format!(
        "impl EngineEnum for {name} {{\n\
         \x20   const NAME: &'static str = \"{qualified}\";\n\n\
         \x20   fn ord(self) -> i64 {{\n\
         \x20       self.0\n\
         \x20   }}\n\n\
         \x20   fn from_ord(ord: i64) -> Self {{\n\
         \x20       {name}(ord)\n\
         \x20   }}\n\
         }}\n"
    ));

    if e.is_bitfield {
        out.push_str(&format!(
            "\nimpl std::ops::BitOr for {name} {{\n\
             \x20   type Output = {name};\n\n\
             \x20   fn bitor(self, rhs: {name}) -> {name} {{\n\
             \x20       {name}(self.0 | rhs.0)\n\
             \x20   }}\n\
             }}\n\n\
             impl std::ops::BitOrAssign for {name} {{\n\
             \x20   fn bitor_assign(&mut self, rhs: {name}) {{\n\
             \x20       self.0 |= rhs.0;\n\
             \x20   }}\n\
             }}\n"
        ));
    }
    out
}

/// `global_enums.rs`: every global enum in one file.
pub fn generate_global_enums(ctx: &CodegenContext) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(HEADER);
    out.push_str("\nuse gdbind_runtime::EngineEnum;\n");
    for e in &ctx.global_enums {
        out.push('\n');
        out.push_str(&generate_enum(e, None));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EnumValue;

    fn info(name: &str, bitfield: bool, values: &[(&str, i64)]) -> EnumInfo {
        EnumInfo {
            name: name.to_owned(),
            is_bitfield: bitfield,
            values: values
                .iter()
                .map(|(n, v)| EnumValue { name: (*n).to_owned(), value: *v })
                .collect(),
        }
    }

    #[test]
    fn class_enum_strips_the_shared_prefix() {
        let values =
            [("OPERATION_UNION", 0), ("OPERATION_INTERSECTION", 1), ("OPERATION_SUBTRACTION", 2)];
        let code = generate_enum(&info("Operation", false, &values), Some("CSGShape3D"));
        assert!(code.contains("pub struct Operation(i64);"));
        assert!(code.contains("pub const UNION: Operation = Operation(0);"));
        assert!(code.contains("pub const SUBTRACTION: Operation = Operation(2);"));
        assert!(code.contains("const NAME: &'static str = \"CSGShape3D.Operation\";"));
        assert!(!code.contains("BitOr"));
    }

    #[test]
    fn bitfields_combine() {
        let values = [("CONNECT_DEFERRED", 1), ("CONNECT_PERSIST", 2), ("CONNECT_ONE_SHOT", 4)];
        let code = generate_enum(&info("ConnectFlags", true, &values), Some("Object"));
        assert!(code.contains("pub const ONE_SHOT: ConnectFlags = ConnectFlags(4);"));
        assert!(code.contains("impl std::ops::BitOr for ConnectFlags"));
        assert!(code.contains("pub fn contains(self, other: ConnectFlags) -> bool"));
    }

    #[test]
    fn unprefixed_global_enum_keeps_names() {
        let values = [("OK", 0), ("FAILED", 1), ("ERR_UNAVAILABLE", 2)];
        let code = generate_enum(&info("Error", false, &values), None);
        assert!(code.contains("pub const OK: Error = Error(0);"));
        assert!(code.contains("pub const ERR_UNAVAILABLE: Error = Error(2);"));
        assert!(code.contains("const NAME: &'static str = \"Error\";"));
    }
}
