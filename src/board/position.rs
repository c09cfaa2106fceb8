// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use thiserror::Error;

use super::moves::Move;
use super::piece::Piece;
use super::square::{Rank, Square};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PositionError {
    #[error("Expecting exactly 64 pieces, found {0}")]
    InvalidLength(usize),
}
use PositionError::*;

type Row = [Piece; 8];

#[rustfmt::skip]
const STANDARD_LAYOUT: [Row; 8] = {
    const E: Piece = Piece::EMPTY;
    [
        [Piece::WR, Piece::WN, Piece::WB, Piece::WQ, Piece::WK, Piece::WB, Piece::WN, Piece::WR],
        [Piece::WP; 8],
        [E; 8],
        [E; 8],
        [E; 8],
        [E; 8],
        [Piece::BP; 8],
        [Piece::BR, Piece::BN, Piece::BB, Piece::BQ, Piece::BK, Piece::BB, Piece::BN, Piece::BR],
    ]
};

static STANDARD: Lazy<Position> = Lazy::new(|| Position::from_rows(STANDARD_LAYOUT));

/// Contents of all 64 squares. Every square is addressable and reads as
/// `Piece::EMPTY` unless something was placed there.
///
/// A position never changes once built. `set` and `reset` return a new
/// position; the rows they did not touch are shared with the original.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    rows: [Arc<Row>; 8],
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

impl Position {
    pub fn empty() -> Self {
        Self::from_rows([[Piece::EMPTY; 8]; 8])
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Builds a position from 64 piece symbols listed row-major, starting
    /// at `a1` and ending at `h8`.
    ///
    /// # Errors
    ///
    /// Returns `PositionError::InvalidLength` unless exactly 64 symbols are
    /// given, or a `PieceError` for the first invalid symbol.
    pub fn custom<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let pieces = symbols
            .into_iter()
            .map(|symbol| symbol.as_ref().parse::<Piece>())
            .collect::<Result<Vec<_>>>()?;
        Self::from_pieces(pieces)
    }

    fn from_pieces(pieces: Vec<Piece>) -> Result<Self> {
        if pieces.len() != 64 {
            return Err(InvalidLength(pieces.len()).into());
        }
        let mut rows = [[Piece::EMPTY; 8]; 8];
        for (index, piece) in pieces.into_iter().enumerate() {
            rows[index / 8][index % 8] = piece;
        }
        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: [Row; 8]) -> Self {
        Self {
            rows: rows.map(Arc::new),
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Piece {
        self.rows[square.rank_index()][square.file_index()]
    }

    pub fn set(&self, square: Square, piece: Piece) -> Self {
        let mut rows = self.rows.clone();
        let mut row = *rows[square.rank_index()];
        row[square.file_index()] = piece;
        rows[square.rank_index()] = Arc::new(row);
        Self { rows }
    }

    pub fn reset(&self, square: Square) -> Self {
        self.set(square, Piece::EMPTY)
    }

    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        !self.is_vacant(square)
    }

    /// All squares with their contents, `a1` first and `h8` last.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().map(move |square| (square, self.get(square)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.iter().filter(|(_, p)| *p == piece).count()
    }

    /// Occupied squares strictly between the endpoints of `mv`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NotAligned` if `mv` is not along a line.
    pub fn blockers(&self, mv: &Move) -> Result<Vec<Square>> {
        Ok(mv
            .between()?
            .into_iter()
            .filter(|square| self.is_occupied(*square))
            .collect())
    }

    /// # Errors
    ///
    /// Returns `MoveError::NotAligned` if `mv` is not along a line.
    pub fn is_path_clear(&self, mv: &Move) -> Result<bool> {
        Ok(self.blockers(mv)?.is_empty())
    }

    /// 64 piece symbols in the same order `custom` accepts them.
    pub fn to_notation(&self) -> String {
        self.iter().map(|(_, piece)| piece.to_char()).collect()
    }
}

impl Index<Square> for Position {
    type Output = Piece;
    fn index(&self, square: Square) -> &Self::Output {
        &self.rows[square.rank_index()][square.file_index()]
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    /// Parses 64 piece symbols, ignoring whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let pieces = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Piece::try_from_char)
            .collect::<Result<Vec<_>>>()?;
        Self::from_pieces(pieces)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let row = &self.rows[rank.to_index()];
            let symbols: Vec<String> = row.iter().map(|piece| piece.to_string()).collect();
            writeln!(f, "{} {}", rank, symbols.join(" "))?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.to_notation()).finish()
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_notation())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PositionVisitor;
        impl<'de> serde::de::Visitor<'de> for PositionVisitor {
            type Value = Position;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of 64 piece symbols")
            }
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(|err| E::custom(err))
            }
        }
        deserializer.deserialize_str(PositionVisitor)
    }
}
