pub mod version_file;

pub use version_file::{
    Arguments, AssetIndexInfo, LibraryArtifact, LibraryDownloads, LibraryEntry, VersionManifest,
};
