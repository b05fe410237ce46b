//! Publishing plumbing around the renderer: README text into OpenAPI
//! specs, rendered README HTML into the landing page.

pub mod page;
pub mod spec;

use std::path::{Path, PathBuf};

use crate::io::IoError;

pub use page::{DEFAULT_PLACEHOLDER, inject_fragment, inject_readme_into_page};
pub use spec::{inject_description, inject_readme_into_spec};

#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("OpenAPI document root is not a JSON object")]
    NotAnObject,
    #[error("OpenAPI `info` field is not a JSON object")]
    InfoNotAnObject,
}

/// One injection to perform, with paths already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Copy the README verbatim into the spec's `info.description`.
    Spec { spec: PathBuf, readme: PathBuf },
    /// Render the README and substitute it for `placeholder` in the page.
    Page {
        page: PathBuf,
        readme: PathBuf,
        placeholder: String,
    },
}

impl Job {
    /// The file this job rewrites.
    pub fn target(&self) -> &Path {
        match self {
            Job::Spec { spec, .. } => spec.as_path(),
            Job::Page { page, .. } => page.as_path(),
        }
    }

    pub fn execute(&self) -> Result<(), InjectError> {
        match self {
            Job::Spec { spec, readme } => inject_readme_into_spec(spec, readme),
            Job::Page {
                page,
                readme,
                placeholder,
            } => inject_readme_into_page(page, readme, placeholder),
        }
    }
}

/// Outcome counts of a [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Executes every job in order. A failed job is logged and counted; it
/// doesn't stop the ones after it.
pub fn run(jobs: &[Job]) -> Summary {
    jobs.iter().fold(Summary::default(), |mut summary, job| {
        match job.execute() {
            Ok(()) => {
                log::info!("✓ Successfully injected README into {}", job.target().display());
                summary.succeeded += 1;
            }
            Err(e) => {
                log::error!("✗ Error processing {}: {e}", job.target().display());
                summary.failed += 1;
            }
        }
        summary
    })
}
