/// Longest name a player may carry, in characters.
pub const PLAYER_NAME_MAX_LENGTH: usize = 20;

/// Names used when a player leaves their name blank.
pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// The player at `index` before anyone has typed a name.
    pub fn default_for(index: usize) -> Self {
        Self::new(DEFAULT_PLAYER_NAMES[index])
    }
}

/// Trims `raw`, falls back to the default name for `index` when nothing is
/// left, and caps the result at [`PLAYER_NAME_MAX_LENGTH`] characters.
pub fn normalize_name(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAMES[index].to_string();
    }

    trimmed
        .chars()
        .take(PLAYER_NAME_MAX_LENGTH)
        .collect::<String>()
        .trim_end()
        .to_string()
}
