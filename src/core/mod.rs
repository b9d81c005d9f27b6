// ─── forge-launch core ───
// Resolves a vanilla + Forge manifest pair into one Java command line.
//
// Architecture:
//   core/
//     auth/     : credentials handed to the game
//     game/     : folder layout, game directory paths, folder check
//     version/  : version JSON model
//     launch/   : placeholders, argument extraction, classpath, assembly, process spawn
//     loaders/  : Forge command-line arguments
//     state/    : persisted launch settings

pub mod auth;
pub mod error;
pub mod game;
pub mod launch;
pub mod loaders;
pub mod state;
pub mod version;
