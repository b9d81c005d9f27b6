use serde::{Deserialize, Serialize};

pub const DEFAULT_FORGE_GROUP: &str = "net.minecraftforge";

/// Version coordinates FML needs on the command line for 1.13+ Forge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgeVersionDiscriminator {
    /// e.g. `37.0.33`
    pub forge_version: String,
    /// e.g. `1.17.1`
    pub mc_version: String,
    pub forge_group: String,
    /// e.g. `20210706.113038`
    pub mcp_version: String,
}

impl ForgeVersionDiscriminator {
    pub fn new(
        forge_version: impl Into<String>,
        mc_version: impl Into<String>,
        mcp_version: impl Into<String>,
    ) -> Self {
        Self {
            forge_version: forge_version.into(),
            mc_version: mc_version.into(),
            forge_group: DEFAULT_FORGE_GROUP.into(),
            mcp_version: mcp_version.into(),
        }
    }

    pub fn with_forge_group(mut self, forge_group: impl Into<String>) -> Self {
        self.forge_group = forge_group.into();
        self
    }

    /// `--launchTarget fmlclient` followed by the `--fml.*` version flags.
    /// Meant to be passed as extra game arguments.
    pub fn forge_arguments(&self) -> Vec<String> {
        vec![
            "--launchTarget".into(),
            "fmlclient".into(),
            "--fml.forgeVersion".into(),
            self.forge_version.clone(),
            "--fml.mcVersion".into(),
            self.mc_version.clone(),
            "--fml.forgeGroup".into(),
            self.forge_group.clone(),
            "--fml.mcpVersion".into(),
            self.mcp_version.clone(),
        ]
    }
}
