use serde::{Deserialize, Serialize};

use crate::Move;

/// The messages that cross the peer-session boundary.
///
/// Only the shapes live here; transport and session establishment are the
/// network layer's concern. Both sides run moves received this way through
/// [`Game::apply_peer_message`](crate::Game::apply_peer_message), which
/// validates them exactly like local input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PeerMessage {
    /// The host started a game. The receiver sets up a fresh board and
    /// plays second, as Red.
    #[serde(rename = "START")]
    Start,
    /// The opponent committed a move.
    #[serde(rename = "MOVE")]
    Move {
        #[serde(rename = "move")]
        mv: Move,
    },
}
