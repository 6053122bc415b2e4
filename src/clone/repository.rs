use crate::error::{GcloneError, Result};

const GITHUB_BASE_URL: &str = "https://github.com";

/// Resolve a repository argument into `owner/name`.
///
/// Arguments that already contain a `/` are used verbatim; bare names are
/// prefixed with the default username.
pub fn resolve_name(repository: &str, default_username: &str) -> Result<String> {
    if repository.is_empty() {
        return Err(GcloneError::InvalidRepository(repository.to_string()));
    }

    let full_name = if repository.contains('/') {
        repository.to_string()
    } else {
        format!("{}/{}", default_username, repository)
    };

    // git derives the clone directory from this segment
    if last_segment(&full_name).is_empty() {
        return Err(GcloneError::InvalidRepository(repository.to_string()));
    }

    Ok(full_name)
}

/// Clone URL for an `owner/name` designator
pub fn repository_url(full_name: &str) -> String {
    format!("{}/{}", GITHUB_BASE_URL, full_name)
}

/// Local directory name git creates when cloning `owner/name`
pub fn directory_name(full_name: &str) -> &str {
    let name = last_segment(full_name);
    match name.strip_suffix(".git") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}

fn last_segment(full_name: &str) -> &str {
    full_name.rsplit('/').next().unwrap_or(full_name)
}
