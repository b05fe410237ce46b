pub mod inject;
pub mod io;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use inject::{InjectError, Job, Summary, run};
pub use io::IoError;
pub use render::render;
