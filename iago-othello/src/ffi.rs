//! A C-compatible FFI for the core bitboard operations.
//!
//! Boards cross the boundary as raw `u64`s and squares as the `(x, y)`
//! convention of [`bitboard::make_singleton`]; see that function for how the
//! coordinates map onto bits.

use crate::bitboard::{self, Bitboard};

/// Count the disks on a bitboard.
#[no_mangle]
pub extern "C" fn ffi_popcount(bits: u64) -> u32 {
    bitboard::popcount(Bitboard(bits))
}

/// Get a bitboard holding only the lowest disk of `bits`.
#[no_mangle]
pub extern "C" fn ffi_extract_disk(bits: u64) -> u64 {
    bitboard::extract_disk(Bitboard(bits)).into()
}

/// Get the 1-based position of the `rank`-th lowest disk of `bits`.
#[no_mangle]
pub extern "C" fn ffi_select_bit(bits: u64, rank: u32) -> u32 {
    bitboard::select_bit(Bitboard(bits), rank)
}

/// Build a one-hot bitboard for the square at `(x, y)`.
#[no_mangle]
pub extern "C" fn ffi_make_singleton(x: u32, y: u32) -> u64 {
    bitboard::make_singleton(x as usize, y as usize).into()
}

/// Get the legal-move mask for the side to move.
#[no_mangle]
pub extern "C" fn ffi_find_moves(player: u64, opp: u64) -> u64 {
    bitboard::find_moves(Bitboard(player), Bitboard(opp)).into()
}

/// Get the mask of opponent disks flipped by playing `new_disk`.
#[no_mangle]
pub extern "C" fn ffi_resolve_move(player: u64, opp: u64, new_disk: u64) -> u64 {
    bitboard::resolve_move(Bitboard(player), Bitboard(opp), Bitboard(new_disk)).into()
}

/// Get the mask of the mover's disks that can never be flipped again.
#[no_mangle]
pub extern "C" fn ffi_stability(player: u64, opp: u64) -> u64 {
    bitboard::stability(Bitboard(player), Bitboard(opp)).into()
}
