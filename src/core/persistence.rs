//! Page document persistence.
//!
//! Saves and loads the composed page as pretty JSON in the working
//! directory. When the composer is started with `--no-page-cache`, all
//! save/load operations are skipped so test runs start from a clean slate.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::core::document::PageDocument;

/// Global flag to disable the page cache (set via `--no-page-cache`).
static NO_PAGE_CACHE: AtomicBool = AtomicBool::new(false);

/// Set the no-cache flag; call early in startup, before any load.
pub fn set_no_cache(enabled: bool) {
    NO_PAGE_CACHE.store(enabled, Ordering::SeqCst);
    if enabled {
        log::info!("🚫 Page cache disabled (--no-page-cache)");
    }
}

fn is_no_cache() -> bool {
    NO_PAGE_CACHE.load(Ordering::SeqCst)
}

/// Default page file in the current working directory.
pub fn default_page_path() -> Result<PathBuf> {
    let dir = std::env::current_dir().context("Failed to get current working directory")?;
    Ok(dir.join("helpdeck_page.json"))
}

/// Save the page document to `path`. Skipped silently under
/// `--no-page-cache`.
pub fn save_page(path: &Path, page: &PageDocument) -> Result<()> {
    if is_no_cache() {
        log::debug!("⏭️  Skipping page save (--no-page-cache enabled)");
        return Ok(());
    }

    let json = serde_json::to_string_pretty(page).context("Failed to serialize page document")?;
    fs::write(path, json).with_context(|| format!("Failed to write page to {path:?}"))?;

    log::debug!("💾 Saved {} blocks to {:?}", page.blocks.len(), path);
    Ok(())
}

/// Load the page document from `path`. Returns `Ok(None)` when the file does
/// not exist or the cache is disabled; a malformed file is an error.
pub fn load_page(path: &Path) -> Result<Option<PageDocument>> {
    if is_no_cache() {
        log::debug!("⏭️  Skipping page load (--no-page-cache enabled)");
        return Ok(None);
    }

    if !path.exists() {
        log::debug!("📂 No saved page found at {path:?}");
        return Ok(None);
    }

    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read page from {path:?}"))?;
    let page: PageDocument =
        serde_json::from_str(&json).context("Failed to deserialize page document")?;

    log::info!("📂 Loaded {} blocks from {:?}", page.blocks.len(), path);
    Ok(Some(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::starter_page;

    fn scratch_path(tag: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("helpdeck_test_{tag}_{}.json", std::process::id()));
        path
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = scratch_path("roundtrip");
        let page = starter_page();
        save_page(&path, &page).expect("save");
        let loaded = load_page(&path).expect("load").expect("file exists");
        assert_eq!(page, loaded);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = scratch_path("missing");
        let _ = fs::remove_file(&path);
        assert!(load_page(&path).expect("load").is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = scratch_path("malformed");
        fs::write(&path, "{ not json").expect("write");
        assert!(load_page(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
