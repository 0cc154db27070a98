// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation.
//!
//! Every routine here appends to a caller-provided vector. Moves are produced in a fixed order: squares are visited
//! in row-major order from a8 to h1, and each piece emits its moves in the order of its direction table. Nothing here
//! checks whether a move leaves the mover's own king attacked.

use crate::core::*;

const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::North,
    Direction::West,
];

const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (1, 1),
    (1, 0),
    (1, -1),
];

pub fn generate_pawn_moves(us: Color, board: &Board, square: Square, moves: &mut Vec<Move>) {
    let them = us.toggle();
    let up = us.forward();

    // Single and double pawn pushes. Both squares of a double push have to be empty.
    if let Some(single) = square.offset(up, 0) {
        if board.is_empty(single) {
            moves.push(Move::new(square, single, board));
            if square.row() == us.pawn_row() {
                if let Some(double) = single.offset(up, 0) {
                    if board.is_empty(double) {
                        moves.push(Move::new(square, double, board));
                    }
                }
            }
        }
    }

    // Captures, left diagonal first. Pawns never move diagonally onto an empty square.
    for side in [-1, 1] {
        if let Some(target) = square.offset(up, side) {
            if board.is_color(target, them) {
                moves.push(Move::new(square, target, board));
            }
        }
    }
}

/// Walks outward from `square` along each of the given directions. Empty squares are added and the walk continues; an
/// enemy piece is added and ends the walk; a friendly piece or the edge of the board ends the walk.
pub fn generate_sliding_moves(
    us: Color,
    board: &Board,
    square: Square,
    directions: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &dir in directions {
        let mut cursor = square;
        while let Some(target) = cursor.towards(dir) {
            match board.piece_at(target) {
                None => moves.push(Move::new(square, target, board)),
                Some(piece) => {
                    if piece.color != us {
                        moves.push(Move::new(square, target, board));
                    }
                    break;
                }
            }

            cursor = target;
        }
    }
}

/// Tries a single step to each of the given offsets. A target is added if it is on the board and not occupied by a
/// friendly piece.
pub fn generate_step_moves(
    us: Color,
    board: &Board,
    square: Square,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = square.offset(dr, dc) {
            if !board.is_color(target, us) {
                moves.push(Move::new(square, target, board));
            }
        }
    }
}

pub fn generate_rook_moves(us: Color, board: &Board, square: Square, moves: &mut Vec<Move>) {
    generate_sliding_moves(us, board, square, &ROOK_DIRECTIONS, moves);
}

pub fn generate_bishop_moves(us: Color, board: &Board, square: Square, moves: &mut Vec<Move>) {
    generate_sliding_moves(us, board, square, &BISHOP_DIRECTIONS, moves);
}

pub fn generate_queen_moves(us: Color, board: &Board, square: Square, moves: &mut Vec<Move>) {
    generate_sliding_moves(us, board, square, &ROOK_DIRECTIONS, moves);
    generate_sliding_moves(us, board, square, &BISHOP_DIRECTIONS, moves);
}

pub fn generate_knight_moves(us: Color, board: &Board, square: Square, moves: &mut Vec<Move>) {
    generate_step_moves(us, board, square, &KNIGHT_OFFSETS, moves);
}

pub fn generate_king_moves(us: Color, board: &Board, square: Square, moves: &mut Vec<Move>) {
    generate_step_moves(us, board, square, &KING_OFFSETS, moves);
}

/// Generates the moves of the piece standing on `square`, which must belong to `us`.
pub fn generate_moves_for_kind(
    us: Color,
    board: &Board,
    kind: PieceKind,
    square: Square,
    moves: &mut Vec<Move>,
) {
    debug_assert!(
        board.is_color(square, us),
        "movegen for a square that isn't ours"
    );

    match kind {
        PieceKind::Pawn => generate_pawn_moves(us, board, square, moves),
        PieceKind::Knight => generate_knight_moves(us, board, square, moves),
        PieceKind::Bishop => generate_bishop_moves(us, board, square, moves),
        PieceKind::Rook => generate_rook_moves(us, board, square, moves),
        PieceKind::Queen => generate_queen_moves(us, board, square, moves),
        PieceKind::King => generate_king_moves(us, board, square, moves),
    }
}

/// Generates every pseudo-legal move for the given side.
pub fn generate_moves(us: Color, board: &Board, moves: &mut Vec<Move>) {
    let start = moves.len();
    for (square, piece) in board.pieces() {
        if piece.color == us {
            generate_moves_for_kind(us, board, piece.kind, square, moves);
        }
    }

    tracing::trace!(side = %us, count = moves.len() - start, "generated moves");
}
