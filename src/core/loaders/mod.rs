pub mod forge;

pub use forge::ForgeVersionDiscriminator;
