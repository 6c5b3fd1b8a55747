//! Wire types shared by the snapshot host and the table watchers.

pub mod cards;
pub mod messages;

pub use cards::*;
pub use messages::*;

/// Chip amounts as they travel on the wire (stacks, commits, pot, bets).
pub type Chips = u32;

/// Net result of a hand for one seat; negative for chips lost.
pub type Payout = i64;
