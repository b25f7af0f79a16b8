// Serde model of the engine's class dump (extension_api.json). Only the
// parts the generator reads are modeled; unknown keys are ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFile {
    pub header: Header,
    #[serde(default)]
    pub global_enums: Vec<EnumInfo>,
    #[serde(default)]
    pub singletons: Vec<SingletonInfo>,
    pub classes: Vec<ClassInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub version_major: u32,
    pub version_minor: u32,
    #[serde(default)]
    pub version_patch: u32,
    #[serde(default)]
    pub version_full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingletonInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub is_refcounted: bool,
    #[serde(default)]
    pub is_instantiable: bool,
    pub inherits: Option<String>,
    #[serde(default)]
    pub enums: Vec<EnumInfo>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
    #[serde(default)]
    pub signals: Vec<SignalInfo>,
    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumInfo {
    pub name: String,
    #[serde(default)]
    pub is_bitfield: bool,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_vararg: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub hash: i64,
    pub return_value: Option<ReturnInfo>,
    #[serde(default)]
    pub arguments: Vec<ArgumentInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnInfo {
    #[serde(rename = "type")]
    pub ty: String,
    pub meta: Option<String>,
    pub ownership: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub meta: Option<String>,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalInfo {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyInfo {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub setter: Option<String>,
    pub getter: Option<String>,
    pub default_value: Option<String>,
}
