pub mod arguments;
pub mod classpath;
pub mod conflicts;
pub mod placeholder;
pub mod profile;
pub mod session;
pub mod task;

pub use arguments::{extract_game_args, extract_jvm_args};
pub use classpath::{build_classpath, get_classpath_separator};
pub use conflicts::{ConflictPolicy, ConflictRule, GameProfile, GameTweak, GameType, LibraryFilter};
pub use placeholder::{Placeholder, PlaceholderRegistry, ResolutionContext};
pub use profile::{LaunchAssembler, LaunchSpecification};
pub use session::LaunchSession;
pub use task::{ExternalLauncher, HookError, LaunchHook};
