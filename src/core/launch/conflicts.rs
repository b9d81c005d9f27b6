// ─── Library Conflict Policy ───
// Some library versions shipped by vanilla clash with what Forge expects for a
// given game generation. Those jars are kept off the classpath.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game generation; decides which conflict rules apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameType {
    #[serde(rename = "v1_7_10")]
    V1_7_10,
    #[serde(rename = "v1_8_higher")]
    V1_8Higher,
    #[serde(rename = "v1_13_higher")]
    V1_13Higher,
    #[serde(rename = "v1_13_higher_forge")]
    V1_13HigherForge,
}

/// Legacy launch tweaks layered on the game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameTweak {
    Forge,
    Optifine,
    Shader,
}

/// The game a classpath is being built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    pub version: String,
    pub game_type: GameType,
    pub tweaks: Vec<GameTweak>,
}

impl GameProfile {
    pub fn new(version: impl Into<String>, game_type: GameType, tweaks: Vec<GameTweak>) -> Self {
        Self {
            version: version.into(),
            game_type,
            tweaks,
        }
    }
}

/// Excludes library files whose name matches, for one game type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConflictRule {
    pub game_type: GameType,
    /// Only applies when this is the first active tweak.
    #[serde(default)]
    pub requires_tweak: Option<GameTweak>,
    pub file_contains: String,
    /// Any of these must also appear in the file name. Empty matches every file.
    #[serde(default)]
    pub version_markers: Vec<String>,
    #[serde(default)]
    pub unless_game_version_contains: Option<String>,
}

impl ConflictRule {
    pub fn new(game_type: GameType, file_contains: impl Into<String>) -> Self {
        Self {
            game_type,
            requires_tweak: None,
            file_contains: file_contains.into(),
            version_markers: Vec::new(),
            unless_game_version_contains: None,
        }
    }

    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.version_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn requiring_tweak(mut self, tweak: GameTweak) -> Self {
        self.requires_tweak = Some(tweak);
        self
    }

    pub fn unless_game_version_contains(mut self, marker: impl Into<String>) -> Self {
        self.unless_game_version_contains = Some(marker.into());
        self
    }

    fn excludes(&self, file_name: &str, game: &GameProfile) -> bool {
        if self.game_type != game.game_type {
            return false;
        }
        if let Some(tweak) = self.requires_tweak {
            if game.tweaks.first() != Some(&tweak) {
                return false;
            }
        }
        if let Some(marker) = &self.unless_game_version_contains {
            if game.version.contains(marker.as_str()) {
                return false;
            }
        }
        if !file_name.contains(self.file_contains.as_str()) {
            return false;
        }
        self.version_markers.is_empty()
            || self
                .version_markers
                .iter()
                .any(|marker| file_name.contains(marker.as_str()))
    }
}

/// Ordered set of conflict rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConflictPolicy {
    rules: Vec<ConflictRule>,
}

impl ConflictPolicy {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: Vec<ConflictRule>) -> Self {
        Self { rules }
    }

    /// Known clashes between vanilla libraries and Forge builds.
    pub fn builtin() -> Self {
        Self::from_rules(vec![
            ConflictRule::new(GameType::V1_13HigherForge, "asm")
                .with_markers(["6"])
                .unless_game_version_contains("1.14"),
            ConflictRule::new(GameType::V1_13HigherForge, "guava").with_markers(["20", "25"]),
            ConflictRule::new(GameType::V1_7_10, "guava")
                .with_markers(["15"])
                .requiring_tweak(GameTweak::Forge),
        ])
    }

    pub fn rules(&self) -> &[ConflictRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Conflict policy bound to the game being launched.
#[derive(Debug, Clone)]
pub struct LibraryFilter {
    policy: ConflictPolicy,
    game: Option<GameProfile>,
}

impl LibraryFilter {
    /// Filter that keeps every library.
    pub fn allow_all() -> Self {
        Self {
            policy: ConflictPolicy::none(),
            game: None,
        }
    }

    pub fn new(policy: ConflictPolicy, game: GameProfile) -> Self {
        Self {
            policy,
            game: Some(game),
        }
    }

    /// Whether the library at `path` must stay off the classpath.
    pub fn excludes(&self, path: &Path) -> bool {
        let Some(game) = &self.game else {
            return false;
        };
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.policy
            .rules
            .iter()
            .any(|rule| rule.excludes(file_name, game))
    }
}
