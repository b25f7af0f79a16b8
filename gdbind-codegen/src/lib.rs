// gdbind-codegen: reads an engine class dump (extension_api.json) and writes
// the gdbind-classes source tree.

pub mod config;
pub mod context;
pub mod error;
pub mod naming;
pub mod rust_gen;
pub mod schema;
pub mod type_map;
pub mod verify;

use std::path::{Path, PathBuf};

use crate::config::GdbindConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::schema::ApiFile;

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub modules: usize,
    pub classes: usize,
    pub files: usize,
    pub out_dir: PathBuf,
}

fn read(path: &Path) -> CodegenResult<String> {
    std::fs::read_to_string(path)
        .map_err(|source| CodegenError::Read { path: path.to_owned(), source })
}

/// Run the generate command. Paths in the config are relative to the
/// config file's directory.
pub fn run_generate(config_path: &Path) -> CodegenResult<Summary> {
    let config: GdbindConfig = toml::from_str(&read(config_path)?)
        .map_err(|source| CodegenError::Config { path: config_path.to_owned(), source })?;
    let codegen = &config.codegen;
    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let api_path = config_dir.join(&codegen.api);
    let out_dir = config_dir.join(&codegen.out);

    log::info!("loading {}", api_path.display());
    let api: ApiFile = serde_json::from_str(&read(&api_path)?)
        .map_err(|source| CodegenError::Api { path: api_path.clone(), source })?;
    log::info!("{} classes, {} global enums", api.classes.len(), api.global_enums.len());

    let ctx = context::CodegenContext::new(api, codegen)?;
    for module in ctx.modules() {
        log::info!("  {module}: {} classes", ctx.classes_in(module).len());
    }

    let files = rust_gen::generate(&ctx);
    write_files(&out_dir, &files)?;

    let errors = verify::verify_output(&ctx, &files, &out_dir);
    if !errors.is_empty() {
        for e in &errors {
            log::error!("verification: {e}");
        }
        return Err(CodegenError::Verification(errors));
    }

    let summary = Summary {
        modules: ctx.modules().count(),
        classes: ctx.classes.len(),
        files: files.len(),
        out_dir,
    };
    let Summary { files, classes, modules, .. } = &summary;
    log::info!("wrote {files} files ({classes} classes in {modules} modules)");
    Ok(summary)
}

/// Write every file under `out`, creating directories. Files are only
/// rewritten when their content changed.
pub fn write_files(
    out: &Path,
    files: &std::collections::BTreeMap<PathBuf, String>,
) -> CodegenResult<()> {
    for (rel, code) in files {
        let path = out.join(rel);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|source| CodegenError::Write { path: dir.to_owned(), source })?;
        }
        if std::fs::read_to_string(&path).is_ok_and(|old| old == *code) {
            continue;
        }
        std::fs::write(&path, code)
            .map_err(|source| CodegenError::Write { path: path.clone(), source })?;
    }
    Ok(())
}
