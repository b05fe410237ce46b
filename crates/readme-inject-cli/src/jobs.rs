use readme_inject_config::{Config, ConfigError};
use readme_inject_engine::{Job, io};

/// Turns the config into the job list: one spec job per API directory, in
/// path order, then the index page if it's enabled.
pub fn build_jobs(config: &Config) -> Result<Vec<Job>, ConfigError> {
    if config.apis.is_empty() {
        log::warn!("No API directories configured; only the index page will be injected");
    }

    let mut jobs: Vec<Job> = config
        .api_dirs()?
        .into_iter()
        .map(|dir| Job::Spec {
            spec: io::resolve(&config.spec_file, &dir),
            readme: io::resolve(&config.readme_file, &dir),
        })
        .collect();

    if config.index.enabled {
        jobs.push(Job::Page {
            page: io::resolve(&config.index.page, &config.root),
            readme: io::resolve(&config.index.readme, &config.root),
            placeholder: config.index.placeholder.clone(),
        });
    }

    Ok(jobs)
}
