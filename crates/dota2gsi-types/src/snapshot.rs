//! Game state snapshot structs.
//!
//! Mirrors the JSON document the game client sends on every update. Wire
//! names are the snake_case keys the client emits (`gpm`, `magicimmune`,
//! `break`, ...); the Rust field names are descriptive and serde maps
//! between the two.
//!
//! Every struct is `#[serde(default)]`: a missing key decodes to the
//! field's zero value and unknown keys are ignored. A key that is present
//! with the wrong JSON type still fails the decode.

use core::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A single decoded game state update.
///
/// Created fresh for every received request and handed to the consumer.
/// Immutable once constructed; the listener keeps no history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Snapshot {
    /// The reporting player's identity and counters.
    pub player: Player,
    /// The reporting player's controlled hero.
    pub hero: Hero,
    /// Match-level map and clock state.
    pub map: Map,
    /// The preceding update as embedded by the sender under `previously`.
    ///
    /// Only points backward in time and is never mutated, so an owned box
    /// is enough. The client sends at most one level in practice.
    #[serde(rename = "previously")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub previous: Option<Box<Snapshot>>,
}

impl Snapshot {
    /// Number of embedded `previous` snapshots below this one.
    pub fn depth(&self) -> usize {
        let mut depth: usize = 0;
        let mut current = self.previous.as_deref();
        while let Some(snapshot) = current {
            depth = depth.saturating_add(1);
            current = snapshot.previous.as_deref();
        }
        depth
    }

    /// Encode back into the wire shape.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails, which does
    /// not happen for the field types used here.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = if self.map.name.is_empty() {
            "-"
        } else {
            self.map.name.as_str()
        };
        let hero = if self.hero.name.is_empty() {
            "-"
        } else {
            self.hero.name.as_str()
        };
        let (kills, deaths, assists) = self.player.kda();

        write!(
            f,
            "[{map} #{match_id} {clock}] {hero} lvl {level} {health}/{max_health} hp{dead} | \
             K/D/A {kills}/{deaths}/{assists} | {gold} gold",
            match_id = self.map.match_id,
            clock = ClockTime(self.map.clock_time),
            level = self.hero.level,
            health = self.hero.health,
            max_health = self.hero.max_health,
            dead = if self.hero.is_alive { "" } else { " (dead)" },
            gold = self.player.gold,
        )
    }
}

/// Formats signed seconds as `[-]mm:ss`.
struct ClockTime(i64);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let seconds = self.0.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Status information for the reporting player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Player {
    /// Steam account identifier.
    #[ts(type = "number")]
    pub steam_id: i64,
    /// Display name.
    pub name: String,
    /// Team affiliation as reported (`radiant`, `dire`).
    pub team_name: String,
    /// Current activity (`playing`, `menu`, ...).
    pub activity: String,

    /// Hero kills.
    pub kills: i32,
    /// Current kill streak.
    pub kill_streak: i32,
    /// Deaths.
    pub deaths: i32,
    /// Assists.
    pub assists: i32,

    /// Creep last hits.
    pub last_hits: i32,
    /// Creep denies.
    pub denies: i32,

    /// Total gold.
    pub gold: i32,
    /// Reliable gold.
    pub gold_reliable: i32,
    /// Unreliable gold.
    pub gold_unreliable: i32,
    /// Gold per minute.
    #[serde(rename = "gpm")]
    pub gold_per_minute: i32,

    /// Experience per minute.
    #[serde(rename = "xpm")]
    pub experience_per_minute: i32,
}

impl Player {
    /// Kills, deaths, and assists as a tuple.
    pub const fn kda(&self) -> (i32, i32, i32) {
        (self.kills, self.deaths, self.assists)
    }
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// Live state of the reporting player's hero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Hero {
    /// Numeric hero identifier.
    pub id: i32,
    /// Internal hero name (`npc_dota_hero_axe`).
    pub name: String,
    /// Current level.
    pub level: i32,
    /// Whether the hero is alive.
    #[serde(rename = "alive")]
    pub is_alive: bool,
    /// Seconds until respawn while dead.
    #[serde(rename = "respawn_seconds")]
    pub seconds_to_respawn: i32,

    /// Gold needed to buy back.
    pub buyback_cost: i32,
    /// Seconds until buyback is available again.
    pub buyback_cooldown: i32,

    /// Current health.
    pub health: i32,
    /// Maximum health.
    pub max_health: i32,
    /// Health as a percentage, conventionally 0-100.
    pub health_percent: i32,

    /// Current mana.
    pub mana: i32,
    /// Maximum mana.
    pub max_mana: i32,
    /// Mana as a percentage, conventionally 0-100.
    pub mana_percent: i32,

    /// Stunned.
    #[serde(rename = "stunned")]
    pub is_stunned: bool,
    /// Disarmed.
    #[serde(rename = "disarmed")]
    pub is_disarmed: bool,
    /// Spell immune.
    #[serde(rename = "magicimmune")]
    pub is_magic_immune: bool,
    /// Hexed.
    #[serde(rename = "hexed")]
    pub is_hexed: bool,
    /// Silenced.
    #[serde(rename = "muted")]
    pub is_muted: bool,
    /// Passives disabled.
    #[serde(rename = "break")]
    pub is_broken: bool,
    /// Carries any debuff.
    pub has_debuff: bool,
}

impl Hero {
    /// True when the hero is stunned, hexed, muted, or broken.
    pub const fn is_disabled(&self) -> bool {
        self.is_stunned || self.is_hexed || self.is_muted || self.is_broken
    }
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

/// Match-level state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Map {
    /// Map name (`dota`, `start`, ...).
    pub name: String,
    /// Match identifier.
    #[ts(type = "number")]
    pub match_id: i64,
    /// Seconds since the match was loaded.
    #[ts(type = "number")]
    pub game_time: i64,
    /// In-game clock in seconds; negative before the horn.
    #[ts(type = "number")]
    pub clock_time: i64,
    /// Seconds until the next observer ward can be purchased.
    pub ward_purchase_cooldown: i32,
    /// Whether it is currently day.
    #[serde(rename = "daytime")]
    pub is_daytime: bool,
    /// Whether Night Stalker's ultimate night is active.
    #[serde(rename = "nightstalker_night")]
    pub is_nightstalker_night: bool,
}
