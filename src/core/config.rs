//! Game configuration types.
//!
//! A UI builds a `GameConfig` from its lobby screen and hands it to
//! `GameSession::new`:
//! - `PlayerConfig`: name, stone color, and whether a human or the CPU plays the seat
//! - `GameConfig`: the roster plus turn time, stone pool size, and an optional seed

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Most seats the lobby offers.
pub const MAX_PLAYERS: usize = 4;

/// Default seconds per turn.
pub const DEFAULT_TURN_SECONDS: u32 = 30;

/// Default stones per player.
pub const DEFAULT_STONES: u32 = 10;

/// RGB stone color. The engine never interprets it; UIs render with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default stone colors, one per seat.
pub const SEAT_COLORS: [Color; MAX_PLAYERS] = [
    Color::new(30, 144, 255),
    Color::new(220, 20, 60),
    Color::new(50, 205, 50),
    Color::new(255, 165, 0),
];

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Color,
    /// `false` seats are driven by the automated move policy.
    pub is_human: bool,
}

impl PlayerConfig {
    /// A seat driven by UI commands.
    pub fn human(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            is_human: true,
        }
    }

    /// A seat driven by the automated move policy.
    pub fn cpu(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            is_human: false,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats in turn order.
    pub players: Vec<PlayerConfig>,

    /// Time budget for a single turn, in whole seconds.
    pub turn_time_seconds: u32,

    /// Stones each player starts with.
    pub stones_per_player: u32,

    /// Dice seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            turn_time_seconds: DEFAULT_TURN_SECONDS,
            stones_per_player: DEFAULT_STONES,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create an empty configuration with default turn time and stone pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seat.
    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.players.push(player);
        self
    }

    /// Set the per-turn time budget in seconds.
    #[must_use]
    pub fn with_turn_time(mut self, seconds: u32) -> Self {
        self.turn_time_seconds = seconds;
        self
    }

    /// Set the starting stone pool.
    #[must_use]
    pub fn with_stones_per_player(mut self, stones: u32) -> Self {
        self.stones_per_player = stones;
        self
    }

    /// Fix the dice seed for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The turn budget as a `Duration`.
    #[must_use]
    pub fn turn_budget(&self) -> Duration {
        Duration::from_secs(u64::from(self.turn_time_seconds))
    }

    /// Panics if the configuration cannot start a game.
    pub fn validate(&self) {
        assert!(!self.players.is_empty(), "Must have at least 1 player");
        assert!(
            self.players.len() <= MAX_PLAYERS,
            "At most {} players supported",
            MAX_PLAYERS
        );
        assert!(self.turn_time_seconds > 0, "Turn time must be positive");
        assert!(self.stones_per_player > 0, "Stone pool must be positive");
    }
}
