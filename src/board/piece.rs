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
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;
use std::str::FromStr;
use strum_macros::Display;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PieceError {
    #[error("Invalid piece symbol {0:?} (expecting one of pnbrqk, PNBRQK or _)")]
    InvalidSymbol(char),
    #[error("Piece notation must be exactly one symbol")]
    InvalidLength,
}
use PieceError::*;

/// The contents of a single square: either a kind of piece owned by one
/// side, or nothing. Kind and owner are stored together so an empty
/// square never has an owner and an occupied one always does.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(Option<(Kind, Color)>);

impl Piece {
    pub const EMPTY: Self = Self(None);

    pub const WK: Self = Self::new(King, White);
    pub const WQ: Self = Self::new(Queen, White);
    pub const WR: Self = Self::new(Rook, White);
    pub const WB: Self = Self::new(Bishop, White);
    pub const WN: Self = Self::new(Knight, White);
    pub const WP: Self = Self::new(Pawn, White);

    pub const BK: Self = Self::new(King, Black);
    pub const BQ: Self = Self::new(Queen, Black);
    pub const BR: Self = Self::new(Rook, Black);
    pub const BB: Self = Self::new(Bishop, Black);
    pub const BN: Self = Self::new(Knight, Black);
    pub const BP: Self = Self::new(Pawn, Black);

    #[inline]
    pub const fn new(kind: Kind, owner: Color) -> Self {
        Self(Some((kind, owner)))
    }

    #[inline]
    pub const fn white(kind: Kind) -> Self {
        Self::new(kind, White)
    }

    #[inline]
    pub const fn black(kind: Kind) -> Self {
        Self::new(kind, Black)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The kind of piece, or `None` for an empty square.
    #[inline]
    pub const fn kind(&self) -> Option<Kind> {
        match self.0 {
            Some((kind, _)) => Some(kind),
            None => None,
        }
    }

    /// The side owning the piece, or `None` for an empty square.
    #[inline]
    pub const fn owner(&self) -> Option<Color> {
        match self.0 {
            Some((_, owner)) => Some(owner),
            None => None,
        }
    }

    #[inline]
    pub fn is(&self, kind: Kind) -> bool {
        self.kind() == Some(kind)
    }

    #[inline]
    pub fn is_owned_by(&self, color: Color) -> bool {
        self.owner() == Some(color)
    }

    pub fn try_from_char(c: char) -> Result<Self> {
        if c == '_' {
            return Ok(Self::EMPTY);
        }
        let kind = Kind::try_from_char(c).ok_or(InvalidSymbol(c))?;
        let owner = if c.is_ascii_uppercase() { White } else { Black };
        Ok(Self::new(kind, owner))
    }

    pub fn to_char(&self) -> char {
        match self.0 {
            None => '_',
            Some((kind, White)) => kind.to_char().to_ascii_uppercase(),
            Some((kind, Black)) => kind.to_char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Piece {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from_char(c),
            _ => Err(InvalidLength.into()),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self> {
        Self::try_from_char(c)
    }
}

use Color::{Black, White};

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn to_index(&self) -> usize {
        *self as usize
    }
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            White => Black,
            Black => White,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Kind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}
use Kind::{Bishop, King, Knight, Pawn, Queen, Rook};

impl Kind {
    #[inline]
    pub const fn try_from_char(c: char) -> Option<Self> {
        match c {
            'p' | 'P' => Some(Pawn),
            'r' | 'R' => Some(Rook),
            'n' | 'N' => Some(Knight),
            'b' | 'B' => Some(Bishop),
            'q' | 'Q' => Some(Queen),
            'k' | 'K' => Some(King),
            _ => None,
        }
    }
    /// Lowercase notation letter.
    #[inline]
    pub const fn to_char(&self) -> char {
        match self {
            Pawn => 'p',
            Rook => 'r',
            Knight => 'n',
            Bishop => 'b',
            Queen => 'q',
            King => 'k',
        }
    }
    pub fn is_line_piece(&self) -> bool {
        matches!(*self, Rook | Bishop | Queen)
    }
}
