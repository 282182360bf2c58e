use std::env;
use std::path::{Path, PathBuf};

use color_eyre::{eyre, Report};

/// Gets the directory of the current app executable
pub fn app_current_directory() -> eyre::Result<PathBuf> {
    let exe_path = env::current_exe()
        .map_err(|error| Report::new(error).wrap_err("was not able to find current process file location"))?;
    exe_path.parent().map(PathBuf::from).ok_or_else(|| {
        Report::msg("could not get parent (directory) of executable: `exe_path.parent()` returned [None]")
    })
}

/// Resolves a resource path against a list of base directories
///
/// Absolute paths are returned unchanged. Relative paths are joined onto each base in order, and the first one that exists is returned;
/// if none exist the path joined onto the first base is returned (so the error message later on points somewhere sensible)
pub fn resolve_against(bases: &[PathBuf], relative: &Path) -> PathBuf {
    if relative.is_absolute() || bases.is_empty() {
        return relative.to_path_buf();
    }
    bases
        .iter()
        .map(|base| base.join(relative))
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| bases[0].join(relative))
}

/// Directories that resources are looked up in: `<exe dir>/<resources_dir>`, then `<working dir>/<resources_dir>`
pub fn resource_search_dirs(resources_dir: &Path) -> Vec<PathBuf> {
    [app_current_directory().ok(), env::current_dir().ok()]
        .into_iter()
        .flatten()
        .map(|base| base.join(resources_dir))
        .collect()
}

/// Shorthand for [resolve_against] with [resource_search_dirs]
pub fn resolve_resource_path(resources_dir: &Path, relative: &Path) -> PathBuf {
    resolve_against(&resource_search_dirs(resources_dir), relative)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("widget_demos_file_helper_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("could not create scratch dir");
        dir
    }

    #[test]
    fn absolute_paths_are_untouched() {
        let absolute = env::temp_dir().join("icon.png");
        assert_eq!(resolve_against(&[PathBuf::from("somewhere")], &absolute), absolute);
    }

    #[test]
    fn first_existing_candidate_wins() {
        let first = scratch_dir("first");
        let second = scratch_dir("second");
        fs::write(second.join("font.ttf"), b"not really a font").expect("could not write file");

        let resolved = resolve_against(&[first.clone(), second.clone()], Path::new("font.ttf"));
        assert_eq!(resolved, second.join("font.ttf"));

        fs::remove_dir_all(first).ok();
        fs::remove_dir_all(second).ok();
    }

    #[test]
    fn falls_back_to_first_base_when_nothing_exists() {
        let bases = [PathBuf::from("/definitely/not/here"), PathBuf::from("/nor/here")];
        let resolved = resolve_against(&bases, Path::new("missing.png"));
        assert_eq!(resolved, PathBuf::from("/definitely/not/here/missing.png"));
    }

    #[test]
    fn exe_directory_is_found() {
        let dir = app_current_directory().expect("test binary should have a directory");
        assert!(dir.is_dir());
    }
}
