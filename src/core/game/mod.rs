pub mod environment;
pub mod layout;

pub use environment::LaunchEnvironment;
pub use layout::FolderLayout;
