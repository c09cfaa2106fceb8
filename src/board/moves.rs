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
use std::iter::successors;
use std::str::FromStr;
use strum_macros::EnumIter;
use thiserror::Error;

use super::piece::Kind;
use super::square::Square;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("Move notation must be <from><to>[promotion], e.g. e2e4 or e7e8q")]
    InvalidNotation,
    #[error("Invalid promotion {0:?} (expecting one of q, r, b, n)")]
    InvalidPromotion(char),
    #[error("Squares are not on a common rank, file or diagonal")]
    NotAligned,
}
use MoveError::*;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Promotion>,
}

impl Move {
    pub fn new(from: Square, to: Square, promotion: Option<Promotion>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    #[inline]
    pub fn is_aligned(&self) -> bool {
        aligned(self.from, self.to)
    }
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        horizontally_aligned(self.from, self.to)
    }
    #[inline]
    pub fn is_vertical(&self) -> bool {
        vertically_aligned(self.from, self.to)
    }
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        diagonally_aligned(self.from, self.to)
    }

    /// Every square from `from` to `to`, both included.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NotAligned` unless the squares share a rank,
    /// file or diagonal.
    pub fn path(&self) -> Result<Vec<Square>> {
        path(self.from, self.to)
    }

    /// Like `path` but without the two endpoints.
    pub fn between(&self) -> Result<Vec<Square>> {
        let mut squares = self.path()?;
        squares.retain(|square| *square != self.from && *square != self.to);
        Ok(squares)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion)?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        let promotion = match chars.len() {
            4 => None,
            5 => Some(Promotion::try_from_char(chars[4]).ok_or(InvalidPromotion(chars[4]))?),
            _ => return Err(InvalidNotation.into()),
        };
        let from = Square::try_from_chars(chars[0], chars[1]).ok_or(InvalidNotation)?;
        let to = Square::try_from_chars(chars[2], chars[3]).ok_or(InvalidNotation)?;
        Ok(Self::new(from, to, promotion))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    #[inline]
    pub const fn try_from_char(c: char) -> Option<Self> {
        match c {
            'q' | 'Q' => Some(Promotion::Queen),
            'r' | 'R' => Some(Promotion::Rook),
            'b' | 'B' => Some(Promotion::Bishop),
            'n' | 'N' => Some(Promotion::Knight),
            _ => None,
        }
    }
}

impl From<Promotion> for Kind {
    fn from(value: Promotion) -> Self {
        match value {
            Promotion::Queen => Kind::Queen,
            Promotion::Rook => Kind::Rook,
            Promotion::Bishop => Kind::Bishop,
            Promotion::Knight => Kind::Knight,
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind: Kind = (*self).into();
        write!(f, "{}", kind.to_char())
    }
}

#[inline]
pub fn horizontally_aligned(from: Square, to: Square) -> bool {
    from.rank() == to.rank()
}

#[inline]
pub fn vertically_aligned(from: Square, to: Square) -> bool {
    from.file() == to.file()
}

#[inline]
pub fn diagonally_aligned(from: Square, to: Square) -> bool {
    let offset = to - from;
    offset.rank.abs() == offset.file.abs()
}

/// True if both squares lie on one rank, file or diagonal. A square is
/// aligned with itself.
#[inline]
pub fn aligned(from: Square, to: Square) -> bool {
    horizontally_aligned(from, to) || vertically_aligned(from, to) || diagonally_aligned(from, to)
}

/// Squares on the line from `from` to `to`, both included, ordered from
/// `from`. `path(a, a)` is `[a]`.
///
/// # Errors
///
/// Returns `MoveError::NotAligned` if the squares are not in a line.
pub fn path(from: Square, to: Square) -> Result<Vec<Square>> {
    if !aligned(from, to) {
        return Err(NotAligned.into());
    }
    let Some(step) = (to - from).to_unit() else {
        return Ok(vec![from]);
    };
    // `step` is a unit from `from` toward `to`, so we always reach `to`
    // before leaving the board
    let squares = successors(Some(from), |square| {
        if *square == to {
            None
        } else {
            *square + step
        }
    })
    .collect();
    Ok(squares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Square::*;

    fn mv(notation: &str) -> Move {
        notation.parse().unwrap()
    }

    fn path_names(notation: &str) -> Vec<String> {
        mv(notation)
            .path()
            .unwrap()
            .iter()
            .map(|square| square.to_string())
            .collect()
    }

    #[test]
    fn test_parse_without_promotion() {
        let m = mv("a1h8");
        assert_eq!(m.from, A1);
        assert_eq!(m.to, H8);
        assert_eq!(m.promotion, None);
    }
    #[test]
    fn test_parse_lowercase_promotion_uppercase_files() {
        let m = mv("E4G8n");
        assert_eq!(m.from, E4);
        assert_eq!(m.to, G8);
        assert_eq!(m.promotion, Some(Promotion::Knight));
    }
    #[test]
    fn test_parse_uppercase_promotion_mixed_files() {
        let m = mv("D2b3B");
        assert_eq!(m.from, D2);
        assert_eq!(m.to, B3);
        assert_eq!(m.promotion, Some(Promotion::Bishop));
        assert_eq!(m.to_string(), "d2b3b");
    }
    #[test]
    fn test_parse_rejects_bad_notation() {
        let invalid = |s: &str| s.parse::<Move>().unwrap_err().downcast::<MoveError>().unwrap();
        assert_eq!(invalid("f7f8queen"), InvalidNotation);
        assert_eq!(invalid("e2e"), InvalidNotation);
        assert_eq!(invalid("a9h5q"), InvalidNotation);
        assert_eq!(invalid("C7I2R"), InvalidNotation);
        assert_eq!(invalid("E6h4k"), InvalidPromotion('k'));
    }
    #[test]
    fn test_promotion_kind() {
        assert_eq!(Kind::from(Promotion::Queen), Kind::Queen);
        assert_eq!(mv("e7e8q").to_string(), "e7e8q");
    }
    #[test]
    fn test_alignment() {
        assert!(mv("b1g1").is_horizontal());
        assert!(mv("f6f3").is_vertical());
        assert!(mv("g3d6").is_diagonal());
        assert!(mv("a1h8").is_diagonal());
        assert!(mv("e4e4").is_aligned());
        assert!(!mv("h7g3").is_aligned());
        assert!(!mv("b1c3").is_aligned());
    }
    #[test]
    fn test_path_same_square() {
        assert_eq!(path_names("e4e4"), ["e4"]);
    }
    #[test]
    fn test_path_horizontal() {
        assert_eq!(path_names("b1g1"), ["b1", "c1", "d1", "e1", "f1", "g1"]);
    }
    #[test]
    fn test_path_vertical() {
        assert_eq!(path_names("f6f3"), ["f6", "f5", "f4", "f3"]);
    }
    #[test]
    fn test_path_diagonal() {
        assert_eq!(path_names("g3d6"), ["g3", "f4", "e5", "d6"]);
        assert_eq!(path_names("h8a1").len(), 8);
    }
    #[test]
    fn test_path_not_aligned() {
        let err = mv("h7g3").path().unwrap_err();
        assert_eq!(err.downcast_ref::<MoveError>(), Some(&NotAligned));
    }
    #[test]
    fn test_between() {
        assert_eq!(mv("a1a4").between().unwrap(), vec![A2, A3]);
        assert!(mv("a1b2").between().unwrap().is_empty());
        assert!(mv("c3c3").between().unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn prop_path_is_a_contiguous_line(a in 0..64usize, b in 0..64usize) {
            let (from, to) = (Square::from_index(a), Square::from_index(b));
            match path(from, to) {
                Ok(squares) => {
                    prop_assert!(aligned(from, to));
                    prop_assert_eq!(squares.first(), Some(&from));
                    prop_assert_eq!(squares.last(), Some(&to));
                    let offset = to - from;
                    let len = offset.rank.abs().max(offset.file.abs()) as usize + 1;
                    prop_assert_eq!(squares.len(), len);
                    for pair in squares.windows(2) {
                        let step = pair[1] - pair[0];
                        prop_assert!(step.rank.abs() <= 1 && step.file.abs() <= 1);
                        prop_assert!(step.rank != 0 || step.file != 0);
                    }
                }
                Err(_) => prop_assert!(!aligned(from, to)),
            }
        }

        #[test]
        fn prop_path_reverses(a in 0..64usize, b in 0..64usize) {
            let (from, to) = (Square::from_index(a), Square::from_index(b));
            if let (Ok(forward), Ok(mut backward)) = (path(from, to), path(to, from)) {
                backward.reverse();
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
