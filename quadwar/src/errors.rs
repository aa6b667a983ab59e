use crate::{Degree, Square};

/// The error type for [`check_move`](crate::check_move) and the engine's
/// move entry points.
///
/// An illegal attempt is surfaced by rejecting the move and leaving all
/// state unchanged; it never enters the animation pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// Origin and destination are the same square.
    NullMove,
    OutOfBounds { square: Square },
    EmptyOrigin { square: Square },
    WrongOwner { square: Square },
    DestinationOccupied { square: Square },
    OutOfRange { degree: Degree, distance: i8 },
    BadDirection { degree: Degree },
    PathBlocked { square: Square },
    /// The engine is mid-animation and not accepting moves.
    Busy,
    /// The game has already ended.
    GameOver,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NullMove => {
                write!(f, "Origin and destination are the same square")
            }
            IllegalMove::OutOfBounds { square } => {
                write!(f, "Square {} is outside the {}x{} board", square, crate::BOARD_ROWS, crate::BOARD_COLS)
            }
            IllegalMove::EmptyOrigin { square } => {
                write!(f, "There is no piece at {}", square)
            }
            IllegalMove::WrongOwner { square } => {
                write!(f, "The piece at {} belongs to the other side", square)
            }
            IllegalMove::DestinationOccupied { square } => {
                write!(f, "Destination {} is already occupied", square)
            }
            IllegalMove::OutOfRange { degree, distance } => {
                write!(
                    f,
                    "A {} piece cannot step {} squares (limit {})",
                    degree,
                    distance,
                    degree.step_range()
                )
            }
            IllegalMove::BadDirection { degree } => match degree {
                Degree::Constant => {
                    write!(f, "A constant piece may only step one square straight ahead")
                }
                Degree::Linear => {
                    write!(f, "A linear piece may only move along its rank or file")
                }
                Degree::Quadratic => {
                    write!(f, "A quadratic piece may only move along a rank, file or diagonal")
                }
            },
            IllegalMove::PathBlocked { square } => {
                write!(f, "The path is blocked at {}", square)
            }
            IllegalMove::Busy => {
                write!(f, "The previous move is still being resolved")
            }
            IllegalMove::GameOver => {
                write!(f, "The game has already ended")
            }
        }
    }
}
