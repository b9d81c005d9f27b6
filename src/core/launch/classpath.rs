// ─── Classpath Builder ───
// Constructs the classpath string from the overlay and base library lists.

use std::path::Path;

use tracing::{debug, info};

use crate::core::error::LauncherError;
use crate::core::version::VersionManifest;

use super::conflicts::LibraryFilter;

/// Builds the full classpath string for launching the game.
///
/// Overlay libraries come first, then base libraries; the first occurrence of a
/// path wins. Libraries excluded by `filter` or missing on disk are skipped.
/// `main_jar` is appended last without any check.
///
/// Every library entry is followed by the separator, so the output reads
/// `lib1:lib2:main.jar` (`;` on Windows).
pub fn build_classpath(
    overlay: &VersionManifest,
    base: &VersionManifest,
    libs_dir: &Path,
    main_jar: &Path,
    filter: &LibraryFilter,
) -> String {
    let separator = get_classpath_separator();
    let mut entries: Vec<String> = Vec::new();

    append_libraries(&mut entries, overlay, libs_dir, filter);
    append_libraries(&mut entries, base, libs_dir, filter);

    debug!(
        "Classpath: {} libraries from {} + {}",
        entries.len(),
        overlay.origin(),
        base.origin()
    );

    let mut classpath = String::new();
    for entry in &entries {
        classpath.push_str(entry);
        classpath.push_str(separator);
    }
    classpath.push_str(&safe_path_str(main_jar));
    classpath
}

fn append_libraries(
    entries: &mut Vec<String>,
    manifest: &VersionManifest,
    libs_dir: &Path,
    filter: &LibraryFilter,
) {
    for library in &manifest.libraries {
        let path = libs_dir.join(library.relative_path());

        if filter.excludes(&path) {
            info!(
                "Excluding conflicting library {} ({})",
                path.display(),
                library.name.as_deref().unwrap_or("unnamed")
            );
            continue;
        }

        if !path.exists() {
            debug!("{}", LauncherError::MissingLibrary { path });
            continue;
        }

        let entry = safe_path_str(&path);
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }
}

/// Platform-specific Java classpath separator.
pub fn get_classpath_separator() -> &'static str {
    if cfg!(target_os = "windows") {
        ";"
    } else {
        ":"
    }
}

/// Absolute, symlink-free string form of `path` when it exists; the path as
/// given otherwise.
pub fn safe_path_str(path: &Path) -> String {
    let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let text = resolved.to_string_lossy().to_string();

    #[cfg(target_os = "windows")]
    {
        // Java rejects extended-length `\\?\C:\...` classpath entries.
        if let Some(stripped) = text.strip_prefix(r"\\?\") {
            return stripped.to_string();
        }
    }

    text
}
