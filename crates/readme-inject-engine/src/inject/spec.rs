use serde_json::{Map, Value};
use std::path::Path;

use super::InjectError;
use crate::io;

/// Sets `info.description` of an OpenAPI JSON document to the README text.
///
/// The README goes in verbatim (OpenAPI descriptions are Markdown already).
/// `info` is created when missing. Key order is kept and the output uses
/// two-space indentation with non-ASCII characters left as they are.
pub fn inject_description(spec_json: &str, readme: &str) -> Result<String, InjectError> {
    let spec_json = spec_json.strip_prefix('\u{FEFF}').unwrap_or(spec_json);
    let mut spec: Value = serde_json::from_str(spec_json)?;

    let root = spec.as_object_mut().ok_or(InjectError::NotAnObject)?;
    let info = root
        .entry("info")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or(InjectError::InfoNotAnObject)?;
    info.insert("description".to_string(), Value::String(readme.to_string()));

    Ok(serde_json::to_string_pretty(&spec)?)
}

/// Injects the README at `readme_path` into the spec at `spec_path`, in place.
pub fn inject_readme_into_spec(spec_path: &Path, readme_path: &Path) -> Result<(), InjectError> {
    let spec_json = io::read_file(spec_path)?;
    let readme = io::read_file(readme_path)?;

    let updated = inject_description(&spec_json, &readme)?;
    log::debug!(
        "Injected {} bytes of README into {}",
        readme.len(),
        spec_path.display()
    );

    io::write_file(spec_path, &updated)?;
    Ok(())
}
