// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("square index out of range: {0}")]
    OutOfRange(u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
    #[error("invalid piece code: {0:?}")]
    InvalidCode(String),
}

/// Returns the rank digit (1 through 8) for the given board row. Row 0 is the eighth rank.
pub const fn row_to_rank(row: u8) -> u8 {
    8 - row
}

/// Returns the file letter for the given board column. Column 0 is the a-file.
pub const fn col_to_file(col: u8) -> char {
    (b'a' + col) as char
}

/// Parses a rank digit into the board row it names.
pub const fn rank_to_row(rank: char) -> Option<u8> {
    match rank {
        '1'..='8' => Some(b'8' - rank as u8),
        _ => None,
    }
}

/// Parses a file letter into the board column it names.
pub const fn file_to_col(file: char) -> Option<u8> {
    match file {
        'a'..='h' => Some(file as u8 - b'a'),
        _ => None,
    }
}

/// A square on the chessboard, addressed by row and column.
///
/// Row 0 is the far (black) side of the board and column 0 is the a-file, so the square at `(0, 0)` is a8 and the
/// square at `(7, 7)` is h1. Squares can only be constructed in bounds; there is no way to name a square off the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(pub(in crate::core) u8);

impl Square {
    /// Creates a square from a row and column, returning None if either is off the board.
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    /// Returns the square `dr` rows and `dc` columns away from this one, or None if that square lies off the board.
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i16 + dr as i16;
        let col = self.col() as i16 + dc as i16;
        if row < 0 || row >= 8 || col < 0 || col >= 8 {
            return None;
        }

        Some(Square(row as u8 * 8 + col as u8))
    }

    /// Returns the square one step away in the given direction, if it is on the board.
    pub const fn towards(self, dir: Direction) -> Option<Square> {
        let (dr, dc) = dir.as_vector();
        self.offset(dr, dc)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 64 {
            return Err(SquareParseError::OutOfRange(value));
        }

        Ok(Square(value))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_to_file(self.col()), row_to_rank(self.row()))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const A8: Square = Square(0);
pub const B8: Square = Square(1);
pub const C8: Square = Square(2);
pub const D8: Square = Square(3);
pub const E8: Square = Square(4);
pub const F8: Square = Square(5);
pub const G8: Square = Square(6);
pub const H8: Square = Square(7);
pub const A7: Square = Square(8);
pub const B7: Square = Square(9);
pub const C7: Square = Square(10);
pub const D7: Square = Square(11);
pub const E7: Square = Square(12);
pub const F7: Square = Square(13);
pub const G7: Square = Square(14);
pub const H7: Square = Square(15);
pub const A6: Square = Square(16);
pub const B6: Square = Square(17);
pub const C6: Square = Square(18);
pub const D6: Square = Square(19);
pub const E6: Square = Square(20);
pub const F6: Square = Square(21);
pub const G6: Square = Square(22);
pub const H6: Square = Square(23);
pub const A5: Square = Square(24);
pub const B5: Square = Square(25);
pub const C5: Square = Square(26);
pub const D5: Square = Square(27);
pub const E5: Square = Square(28);
pub const F5: Square = Square(29);
pub const G5: Square = Square(30);
pub const H5: Square = Square(31);
pub const A4: Square = Square(32);
pub const B4: Square = Square(33);
pub const C4: Square = Square(34);
pub const D4: Square = Square(35);
pub const E4: Square = Square(36);
pub const F4: Square = Square(37);
pub const G4: Square = Square(38);
pub const H4: Square = Square(39);
pub const A3: Square = Square(40);
pub const B3: Square = Square(41);
pub const C3: Square = Square(42);
pub const D3: Square = Square(43);
pub const E3: Square = Square(44);
pub const F3: Square = Square(45);
pub const G3: Square = Square(46);
pub const H3: Square = Square(47);
pub const A2: Square = Square(48);
pub const B2: Square = Square(49);
pub const C2: Square = Square(50);
pub const D2: Square = Square(51);
pub const E2: Square = Square(52);
pub const F2: Square = Square(53);
pub const G2: Square = Square(54);
pub const H2: Square = Square(55);
pub const A1: Square = Square(56);
pub const B1: Square = Square(57);
pub const C1: Square = Square(58);
pub const D1: Square = Square(59);
pub const E1: Square = Square(60);
pub const F1: Square = Square(61);
pub const G1: Square = Square(62);
pub const H1: Square = Square(63);

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The row step of a pawn push for this color. White moves up the board towards row 0 and black moves down it.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row that pawns of this color start the game on.
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The code used for an empty square wherever pieces are rendered as two-character codes.
pub const EMPTY_CODE: &str = "--";

/// A colored chess piece. Empty squares are represented by the absence of a piece (`None`) and are never a `Piece`
/// with a missing half.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Returns the two-character code for this piece, e.g. `wp` or `bK`.
    pub const fn code(self) -> &'static str {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => "wp",
            (Color::White, PieceKind::Knight) => "wN",
            (Color::White, PieceKind::Bishop) => "wB",
            (Color::White, PieceKind::Rook) => "wR",
            (Color::White, PieceKind::Queen) => "wQ",
            (Color::White, PieceKind::King) => "wK",
            (Color::Black, PieceKind::Pawn) => "bp",
            (Color::Black, PieceKind::Knight) => "bN",
            (Color::Black, PieceKind::Bishop) => "bB",
            (Color::Black, PieceKind::Rook) => "bR",
            (Color::Black, PieceKind::Queen) => "bQ",
            (Color::Black, PieceKind::King) => "bK",
        }
    }

    /// Returns the FEN letter for this piece; upper case for white and lower case for black.
    pub const fn fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// Returns the two-character code for a square's contents, using `--` for an empty square.
pub fn square_code(piece: Option<Piece>) -> &'static str {
    piece.map_or(EMPTY_CODE, Piece::code)
}

impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    /// Parses a FEN piece letter.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let color = if value.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let kind = match value.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(PieceParseError::InvalidChar(value)),
        };

        Ok(Piece { color, kind })
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    /// Parses a two-character piece code. The empty code `--` is not a piece and is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (color, kind) = match (chars.next(), chars.next(), chars.next()) {
            (Some(color), Some(kind), None) => (color, kind),
            _ => return Err(PieceParseError::InvalidCode(s.to_string())),
        };

        let color = match color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err(PieceParseError::InvalidCode(s.to_string())),
        };

        let kind = match kind {
            'p' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return Err(PieceParseError::InvalidCode(s.to_string())),
        };

        Ok(Piece { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// One of the eight compass directions on the board. North points towards row 0, the black side of the board.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Returns the (row, column) displacement of a single step in this direction.
    pub const fn as_vector(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

macro_rules! type_iterator {
    ($name:ident, $type:ident, $max:expr) => {
        pub struct $name(u8, u8);

        impl Iterator for $name {
            type Item = $type;

            fn next(&mut self) -> Option<Self::Item> {
                if self.0 >= self.1 {
                    None
                } else {
                    let next = self.0;
                    self.0 += 1;
                    Some($type(next))
                }
            }
        }

        impl ::std::iter::DoubleEndedIterator for $name {
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.1 <= self.0 {
                    None
                } else {
                    self.1 -= 1;
                    Some($type(self.1))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name(0, $max)
            }
        }
    };
}

type_iterator!(AllSquares, Square, 64);

/// Iterates every square in row-major order, starting at a8 and ending at h1.
pub fn squares() -> AllSquares {
    AllSquares::default()
}

pub fn piece_kinds() -> ::std::vec::IntoIter<PieceKind> {
    vec![
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ]
    .into_iter()
}

pub fn colors() -> ::std::vec::IntoIter<Color> {
    vec![Color::White, Color::Black].into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod squares {
        use super::*;

        #[test]
        fn corners() {
            assert_eq!(Some(A8), Square::new(0, 0));
            assert_eq!(Some(H8), Square::new(0, 7));
            assert_eq!(Some(A1), Square::new(7, 0));
            assert_eq!(Some(H1), Square::new(7, 7));
            assert_eq!(None, Square::new(8, 0));
            assert_eq!(None, Square::new(0, 8));
        }

        #[test]
        fn row_and_col() {
            assert_eq!(6, E2.row());
            assert_eq!(4, E2.col());
        }

        #[test]
        fn offset_bounds() {
            assert_eq!(Some(E4), E2.offset(-2, 0));
            assert_eq!(None, A1.offset(1, 0));
            assert_eq!(None, A1.offset(0, -1));
            assert_eq!(None, H8.offset(-1, 0));
            assert_eq!(None, H8.offset(0, 1));
        }

        #[test]
        fn offset_extreme_steps() {
            assert_eq!(None, H1.offset(i8::MAX, 0));
            assert_eq!(None, H1.offset(0, i8::MAX));
            assert_eq!(None, A8.offset(i8::MIN, 0));
            assert_eq!(None, A8.offset(0, i8::MIN));
            assert_eq!(None, E4.offset(i8::MAX, i8::MIN));
        }

        #[test]
        fn towards() {
            assert_eq!(Some(E3), E2.towards(Direction::North));
            assert_eq!(Some(D1), E2.towards(Direction::SouthWest));
            assert_eq!(None, A8.towards(Direction::NorthWest));
        }

        #[test]
        fn display() {
            assert_eq!("a8", A8.to_string());
            assert_eq!("e2", E2.to_string());
            assert_eq!("h1", H1.to_string());
        }

        #[test]
        fn try_from_u8() {
            assert_eq!(Ok(H1), Square::try_from(63u8));
            assert_eq!(Err(SquareParseError::OutOfRange(64)), Square::try_from(64u8));
        }

        #[test]
        fn iteration_is_row_major() {
            let all: Vec<_> = squares().collect();
            assert_eq!(64, all.len());
            assert_eq!(A8, all[0]);
            assert_eq!(B8, all[1]);
            assert_eq!(A7, all[8]);
            assert_eq!(H1, all[63]);
        }
    }

    mod coordinates {
        use super::*;

        #[test]
        fn rank_mapping() {
            assert_eq!(8, row_to_rank(0));
            assert_eq!(1, row_to_rank(7));
            assert_eq!(Some(0), rank_to_row('8'));
            assert_eq!(Some(7), rank_to_row('1'));
            assert_eq!(None, rank_to_row('9'));
            assert_eq!(None, rank_to_row('0'));
        }

        #[test]
        fn file_mapping() {
            assert_eq!('a', col_to_file(0));
            assert_eq!('h', col_to_file(7));
            assert_eq!(Some(4), file_to_col('e'));
            assert_eq!(None, file_to_col('i'));
            assert_eq!(None, file_to_col('E'));
        }

        #[test]
        fn mapping_roundtrips() {
            for row in 0..8 {
                let rank = char::from_digit(row_to_rank(row) as u32, 10).unwrap();
                assert_eq!(Some(row), rank_to_row(rank));
            }

            for col in 0..8 {
                assert_eq!(Some(col), file_to_col(col_to_file(col)));
            }
        }
    }

    mod pieces {
        use super::*;

        #[test]
        fn codes() {
            assert_eq!("wp", Piece::new(Color::White, PieceKind::Pawn).code());
            assert_eq!("bR", Piece::new(Color::Black, PieceKind::Rook).code());
            assert_eq!("--", square_code(None));
        }

        #[test]
        fn parse_codes() {
            for color in colors() {
                for kind in piece_kinds() {
                    let piece = Piece::new(color, kind);
                    assert_eq!(Ok(piece), piece.code().parse());
                }
            }
        }

        #[test]
        fn empty_code_is_not_a_piece() {
            assert!("--".parse::<Piece>().is_err());
            assert!("w-".parse::<Piece>().is_err());
            assert!("-p".parse::<Piece>().is_err());
            assert!("wpp".parse::<Piece>().is_err());
        }

        #[test]
        fn fen_chars() {
            assert_eq!('K', Piece::new(Color::White, PieceKind::King).fen_char());
            assert_eq!('n', Piece::new(Color::Black, PieceKind::Knight).fen_char());
            assert_eq!(
                Ok(Piece::new(Color::Black, PieceKind::Queen)),
                Piece::try_from('q')
            );
            assert_eq!(Err(PieceParseError::InvalidChar('x')), Piece::try_from('x'));
        }
    }
}
