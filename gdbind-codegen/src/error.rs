// Generator errors. Anything that would produce a tree that does not compile
// is reported here instead of being written out.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("failed to parse {path}: {source}")]
    Config { path: PathBuf, source: toml::de::Error },

    #[error("failed to parse {path}: {source}")]
    Api { path: PathBuf, source: serde_json::Error },

    #[error("class {class} maps to module `{module}`, missing from [codegen.features]")]
    UnknownModule { class: String, module: String },

    #[error("class {class} inherits {base}, which is not in the api or is blocklisted")]
    MissingBase { class: String, base: String },

    #[error("{class} (feature `{feature}`) inherits {base} from unlisted feature `{base_feature}`")]
    BaseNotReachable { class: String, feature: String, base: String, base_feature: String },

    #[error("generated output failed verification:\n  {}", .0.join("\n  "))]
    Verification(Vec<String>),
}

pub type CodegenResult<T> = Result<T, CodegenError>;
