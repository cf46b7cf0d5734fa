//! Shared error utilities

use std::path::Path;

/// Format a file path for error display
///
/// Paths below the current working directory are shown relative to it so
/// messages stay short when the validator runs from the repository root.
pub fn format_error_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| {
            path.strip_prefix(&cwd)
                .ok()
                .map(|relative| relative.display().to_string())
        })
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_are_unchanged() {
        let path = Path::new("data/roadmap.csv");
        assert_eq!(format_error_path(path), "data/roadmap.csv");
    }

    #[test]
    fn test_paths_below_cwd_are_shortened() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("supporting_material").join("CD3_AF488");
        assert_eq!(
            format_error_path(&path),
            Path::new("supporting_material")
                .join("CD3_AF488")
                .display()
                .to_string()
        );
    }
}
