//! Code for working with Othello positions at a medium level of abstraction.

use crate::bitboard::{self, Bitboard};
use crate::{utils, Location, LocationList, Player, NUM_SPACES};
use derive_more::Error;
use std::fmt;

/// An Othello position seen from the perspective of the side to move.
///
/// Acts as a thin wrapper over [`bitboard`] operations: fast and unchecked,
/// ideal for search code. Operations preserve the position invariants but
/// cannot verify their inputs; applying an illegal move or passing when
/// moves exist leaves the board in an inconsistent state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    /// Disks of the side to move.
    pub player: Bitboard,
    /// Disks of the side that just moved.
    pub opp: Bitboard,
    /// Whether the previous ply was a pass.
    pub just_passed: bool,
}

impl Board {
    /// Build a board from per-color bitboards and the color to move.
    pub fn from_color_bitboards(black: Bitboard, white: Bitboard, to_move: Player) -> Self {
        let (player, opp) = match to_move {
            Player::Black => (black, white),
            Player::White => (white, black),
        };
        Self {
            player,
            opp,
            just_passed: false,
        }
    }

    /// Compute the legal moves for the side to move.
    #[inline]
    pub fn get_moves(self) -> LocationList {
        LocationList::from(bitboard::find_moves(self.player, self.opp))
    }

    /// Apply a non-pass move and hand the turn over, without validity checks.
    /// Undefined results if the location is occupied or flips nothing.
    #[inline]
    pub fn apply_move(self, loc: Location) -> Self {
        let new_disk: Bitboard = loc.into();
        let flipped = bitboard::resolve_move(self.player, self.opp, new_disk);
        Self {
            player: self.opp ^ flipped,
            opp: (self.player ^ flipped) | new_disk,
            just_passed: false,
        }
    }

    /// Apply a pass: the turn changes hands and nothing else moves.
    /// Inconsistent state results if the side to move has legal moves.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            player: self.opp,
            opp: self.player,
            just_passed: true,
        }
    }

    /// View the position from the opponent's perspective.
    #[inline]
    pub fn swap_players(self) -> Self {
        Self {
            player: self.opp,
            opp: self.player,
            ..self
        }
    }

    /// Score for the side to move as the raw disk difference.
    #[inline]
    pub fn score_absolute_difference(self) -> i8 {
        bitboard::score_absolute_difference(self.player, self.opp)
    }

    /// Score for the side to move with empty squares awarded to the winner.
    #[inline]
    pub fn score_winner_gets_empties(self) -> i8 {
        bitboard::score_winner_gets_empties(self.player, self.opp)
    }

    /// The disks of the side to move that can never be flipped again.
    #[inline]
    pub fn stable_disks(self) -> Bitboard {
        bitboard::stability(self.player, self.opp)
    }

    /// Mask of all occupied squares.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.player | self.opp
    }

    /// Mask of all empty squares.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    /// The number of empty squares left in the game.
    #[inline]
    pub fn count_empties(self) -> u32 {
        self.occupied_mask().count_empty()
    }
}

/// The starting position, from the starting player's perspective.
impl Default for Board {
    fn default() -> Self {
        Self {
            player: bitboard::BLACK_START,
            opp: bitboard::WHITE_START,
            just_passed: false,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves: Bitboard = self.get_moves().into();

        utils::write_board_grid(f, |x, y| {
            let square = bitboard::make_singleton(x, y);
            if !(square & self.player).is_empty() {
                'X' // Mover's disk
            } else if !(square & self.opp).is_empty() {
                'O' // Opponent's disk
            } else if !(square & moves).is_empty() {
                '-' // Legal move
            } else {
                '.' // Empty square
            }
        })
    }
}

#[derive(Debug, PartialEq, Error)]
pub struct ParseBoardError;

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse board; expected 64 squares of X/O/-")
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a board in the one-line FFO format: 64 characters, top-left
    /// first, `X` for the side to move, `O` for the opponent, `-` for empty.
    fn from_str(board_str: &str) -> Result<Self, Self::Err> {
        if board_str.len() != NUM_SPACES {
            return Err(ParseBoardError);
        }

        let mut player: u64 = 0;
        let mut opp: u64 = 0;

        for square in board_str.chars() {
            player <<= 1;
            opp <<= 1;

            match square {
                'X' => player |= 1,
                'O' => opp |= 1,
                '-' => (),
                _ => return Err(ParseBoardError),
            }
        }

        Ok(Board {
            player: Bitboard(player),
            opp: Bitboard(opp),
            just_passed: false,
        })
    }
}
