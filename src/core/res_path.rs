use std::path::{Path, PathBuf};

use super::error::{AssetError, Context};

/// directory names that hold built executables rather than the project
const BUILD_DIRS: [&str; 2] = ["bin", "target"];

/// `res` next to the nearest build output directory above `base`, or
/// `base/res` when the executable was not run from one
pub fn resource_root(base: &Path) -> PathBuf {
    base.ancestors()
        .find(|dir| {
            dir.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| BUILD_DIRS.contains(&name))
        })
        .and_then(Path::parent)
        .map(|project| project.join("res"))
        .unwrap_or_else(|| base.join("res"))
}

/// directory holding the assets of one category ("font", "img", "audio")
pub fn resource_path(category: &str) -> Result<PathBuf, AssetError> {
    let base = sdl2::filesystem::base_path().context("SDL_GetBasePath")?;
    Ok(resource_root(Path::new(&base)).join(category))
}
