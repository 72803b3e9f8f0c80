//! Parsing for one-line FFO-style endgame positions, used as test fixtures.
//!
//! Each line holds four whitespace-separated fields: a 64-character board
//! (`X` = black, `O` = white, `-` = empty, top-left first), the player to
//! move ("Black"/"White"), the best move's bit index (-1 for none), and the
//! final score for black under optimal play, empty squares counting for the
//! winner as in the FFO test suite.

use crate::bitboard::Bitboard;
use crate::{Board, Location, Player};

/// An endgame fixture: a position plus its known solution.
#[derive(Clone, Copy)]
pub struct FfoPosition {
    /// The position, from the perspective of the side to move.
    pub board: Board,
    /// The best move, or `None` when the side to move must pass.
    pub best_move: Option<Location>,
    /// The optimal final score for the side to move, empties to the winner.
    pub score: i8,
}

/// Parse a list of fixture lines, panicking on malformed input.
pub fn parse_ffo_positions(lines: &str) -> Vec<FfoPosition> {
    lines
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_ffo_position)
        .collect()
}

fn parse_ffo_position(line: &str) -> FfoPosition {
    let mut fields = line.split_whitespace();

    let board_str = fields.next().unwrap();
    let player: Player = fields.next().unwrap().parse().unwrap();
    let best_move = match fields.next().unwrap() {
        "-1" => None,
        index => Some(Location::from_index(index.parse().unwrap())),
    };
    let mut score: i8 = fields.next().unwrap().parse().unwrap();

    // Fixture scores are for black; flip for white-to-move positions.
    if player == Player::White {
        score = -score;
    }

    FfoPosition {
        board: parse_ffo_board(board_str, player),
        best_move,
        score,
    }
}

fn parse_ffo_board(board_str: &str, player: Player) -> Board {
    let mut black: u64 = 0;
    let mut white: u64 = 0;

    for square in board_str.chars() {
        black <<= 1;
        white <<= 1;

        match square {
            'X' => black |= 1,
            'O' => white |= 1,
            '-' => (),
            unknown => panic!("unknown character in FFO board: {}", unknown),
        }
    }

    Board::from_color_bitboards(Bitboard(black), Bitboard(white), player)
}
