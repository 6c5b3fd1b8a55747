//! Host-to-watcher messaging protocol for the table viewer.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::cards::CardToken;
use crate::{Chips, Payout};

/// Wire value of `action` when nobody is to act.
pub const NO_ACTOR: i64 = -1;

fn no_actor() -> i64 {
    NO_ACTOR
}

/// One authoritative table-state update.
///
/// On the wire both variants are plain JSON objects; a payload carrying a
/// `hole_cards` key is a hand in progress, anything else is an idle table.
/// That check happens once, here, while decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub enum Snapshot {
    #[default]
    Idle,
    Hand(HandSnapshot),
}

impl Snapshot {
    pub fn from_json(txt: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(txt)
    }

    pub fn as_hand(&self) -> Option<&HandSnapshot> {
        match self {
            Snapshot::Hand(hand) => Some(hand),
            Snapshot::Idle => None,
        }
    }

    pub fn is_hand(&self) -> bool {
        matches!(self, Snapshot::Hand(_))
    }
}

impl TryFrom<Map<String, Value>> for Snapshot {
    type Error = serde_json::Error;

    fn try_from(payload: Map<String, Value>) -> Result<Self, Self::Error> {
        if payload.contains_key("hole_cards") {
            serde_json::from_value(Value::Object(payload)).map(Snapshot::Hand)
        } else {
            Ok(Snapshot::Idle)
        }
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Snapshot::Idle => serializer.serialize_map(Some(0))?.end(),
            Snapshot::Hand(hand) => hand.serialize(serializer),
        }
    }
}

impl From<HandSnapshot> for Snapshot {
    fn from(hand: HandSnapshot) -> Self {
        Snapshot::Hand(hand)
    }
}

/// Table state while a hand is being played.
///
/// Per-seat vectors are indexed by seat. Everything except `hole_cards` may be
/// omitted; omitted or short fields leave the corresponding parts of the
/// table untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSnapshot {
    /// Hole cards per seat; empty for seats without cards.
    pub hole_cards: Vec<Vec<CardToken>>,
    /// Chips each seat put in on the current street.
    #[serde(default)]
    pub street_commits: Vec<Chips>,
    #[serde(default)]
    pub stacks: Vec<Chips>,
    /// Seats still in the hand.
    #[serde(default)]
    pub active: Vec<bool>,
    #[serde(default)]
    pub community_cards: Vec<CardToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pot: Option<Chips>,
    /// Dealer button seat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<i64>,
    /// Seat to act, or [`NO_ACTOR`].
    #[serde(default = "no_actor")]
    pub action: i64,
    #[serde(default)]
    pub all_in: Vec<bool>,
    /// Hand is over and `payouts` are final.
    #[serde(default)]
    pub done: bool,
    /// Net chips won or lost per seat.
    #[serde(default)]
    pub payouts: Vec<Payout>,
    #[serde(default)]
    pub prev_action: Option<PrevAction>,
}

impl Default for HandSnapshot {
    fn default() -> Self {
        Self {
            hole_cards: Vec::new(),
            street_commits: Vec::new(),
            stacks: Vec::new(),
            active: Vec::new(),
            community_cards: Vec::new(),
            pot: None,
            button: None,
            action: NO_ACTOR,
            all_in: Vec::new(),
            done: false,
            payouts: Vec::new(),
            prev_action: None,
        }
    }
}

impl HandSnapshot {
    /// Seat to act, if any.
    pub fn actor(&self) -> Option<usize> {
        usize::try_from(self.action).ok()
    }

    pub fn dealer(&self) -> Option<usize> {
        self.button.and_then(|b| usize::try_from(b).ok())
    }

    pub fn is_active(&self, seat: usize) -> bool {
        self.active.get(seat).copied().unwrap_or(false)
    }

    pub fn seat_count(&self) -> usize {
        self.hole_cards.len()
    }
}

/// The last action taken, as `[seat, bet, folded]` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrevAction(pub usize, pub Chips, pub bool);

impl PrevAction {
    pub fn seat(self) -> usize {
        self.0
    }

    pub fn bet(self) -> Chips {
        self.1
    }

    pub fn folded(self) -> bool {
        self.2
    }
}

/// Messages that the host pushes to watchers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerEvent {
    Config(Snapshot),
}
