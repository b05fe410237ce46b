use std::path::Path;

use super::InjectError;
use crate::{io, render};

/// Placeholder comment the landing page carries until deployment.
pub const DEFAULT_PLACEHOLDER: &str = "<!-- README content will be inserted here during deployment -->";

/// Substitutes `fragment` for every occurrence of `placeholder` in `page`.
///
/// A page without the placeholder comes back unchanged.
pub fn inject_fragment(page: &str, placeholder: &str, fragment: &str) -> String {
    if placeholder.is_empty() || !page.contains(placeholder) {
        log::warn!("Placeholder {placeholder:?} not found, page left unchanged");
        return page.to_string();
    }
    page.replace(placeholder, fragment)
}

/// Renders the README at `readme_path` and injects it into the page at
/// `page_path`, in place.
pub fn inject_readme_into_page(
    page_path: &Path,
    readme_path: &Path,
    placeholder: &str,
) -> Result<(), InjectError> {
    let page = io::read_file(page_path)?;
    let readme = io::read_file(readme_path)?;

    let fragment = render(&readme);
    log::debug!(
        "Rendered {} into {} bytes of HTML",
        readme_path.display(),
        fragment.len()
    );

    io::write_file(page_path, &inject_fragment(&page, placeholder, &fragment))?;
    Ok(())
}
