// Name conversion utilities for codegen.

/// Convert an engine class name to snake_case. Dimension suffixes stay
/// attached to their digit: `CSGTorus3D` becomes `csg_torus_3d`.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 8);
    let chars: Vec<char> = name.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();
        if ch.is_ascii_digit() {
            if prev.is_some_and(|p| p.is_ascii_alphabetic()) {
                result.push('_');
            }
            result.push(ch);
        } else if ch.is_ascii_uppercase() {
            match prev {
                Some(p) if p.is_ascii_lowercase() => result.push('_'),
                // "3DEditor": the suffix ends at the next word.
                Some(p) if p.is_ascii_digit() => {
                    if next.is_some_and(|n| n.is_ascii_lowercase()) {
                        result.push('_');
                    }
                }
                // Acronym followed by a word: "CSGTorus" -> "csg_torus".
                Some(p)
                    if p.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase()) =>
                {
                    result.push('_');
                }
                _ => {}
            }
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

pub fn to_screaming_snake(name: &str) -> String {
    to_snake_case(name).to_ascii_uppercase()
}

const RESERVED_WORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "type", "unsafe", "use", "where", "while", "async",
    "await", "dyn", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Escape Rust reserved words. Names that cannot be raw identifiers get a
/// trailing underscore instead.
pub fn escape_reserved(name: &str) -> String {
    match name {
        "self" | "Self" | "super" | "crate" => format!("{name}_"),
        _ if is_reserved(name) => format!("r#{name}"),
        _ => name.to_owned(),
    }
}

/// Constant names for an enum's values, with the prefix all of them share
/// removed (`KIND_CLASS`, `KIND_SIGNAL` become `CLASS`, `SIGNAL`). The
/// prefix is kept when stripping would leave an invalid or empty name.
pub fn enum_constant_names(values: &[&str]) -> Vec<String> {
    let prefix = common_word_prefix(values);
    values
        .iter()
        .map(|v| {
            let stripped = &v[prefix.len()..];
            let valid =
                stripped.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
            if valid { stripped.to_owned() } else { (*v).to_owned() }
        })
        .collect()
}

/// Longest prefix ending in `_` shared by every value. Empty for a single value.
fn common_word_prefix<'a>(values: &[&'a str]) -> &'a str {
    let Some((first, rest)) = values.split_first() else {
        return "";
    };
    if rest.is_empty() {
        return "";
    }
    let mut end = 0;
    for (i, ch) in first.char_indices() {
        if ch != '_' {
            continue;
        }
        let candidate = &first[..=i];
        if rest.iter().all(|v| v.starts_with(candidate)) {
            end = i + 1;
        } else {
            break;
        }
    }
    &first[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_keeps_dimension_suffixes() {
        assert_eq!(to_snake_case("CSGTorus3D"), "csg_torus_3d");
        assert_eq!(to_snake_case("Geometry2D"), "geometry_2d");
        assert_eq!(to_snake_case("Node3D"), "node_3d");
        assert_eq!(to_snake_case("VisualInstance3D"), "visual_instance_3d");
        assert_eq!(to_snake_case("Node3DEditor"), "node_3d_editor");
        assert_eq!(to_snake_case("AudioEffectChorus"), "audio_effect_chorus");
        assert_eq!(to_snake_case("RefCounted"), "ref_counted");
        assert_eq!(to_snake_case("Object"), "object");
    }

    #[test]
    fn reserved_words_are_escaped() {
        assert_eq!(escape_reserved("type"), "r#type");
        assert_eq!(escape_reserved("self"), "self_");
        assert_eq!(escape_reserved("from"), "from");
    }

    #[test]
    fn shared_prefixes_are_stripped() {
        assert_eq!(
            enum_constant_names(&["KIND_CLASS", "KIND_FUNCTION", "KIND_NODE_PATH"]),
            vec!["CLASS", "FUNCTION", "NODE_PATH"]
        );
        assert_eq!(
            enum_constant_names(&["CONNECT_DEFERRED", "CONNECT_ONE_SHOT"]),
            vec!["DEFERRED", "ONE_SHOT"]
        );
        // Nothing shared by all values.
        let names = ["OK", "FAILED", "ERR_BUSY"];
        assert_eq!(enum_constant_names(&names), names.to_vec());
    }

    #[test]
    fn stripping_never_yields_a_digit_start() {
        assert_eq!(enum_constant_names(&["AXIS_2D", "AXIS_3D"]), vec!["AXIS_2D", "AXIS_3D"]);
    }
}
