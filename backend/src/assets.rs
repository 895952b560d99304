use std::path::{Path, PathBuf};

/// Static images referenced by the dashboard that are absent from `dir`.
pub fn missing_assets(dir: &Path) -> Vec<PathBuf> {
    shared::report::asset_files()
        .map(|name| dir.join(name))
        .filter(|path| !path.is_file())
        .collect()
}
