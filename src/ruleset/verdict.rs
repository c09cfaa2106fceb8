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

use serde::Serialize;
use std::fmt;

use crate::board::Position;

/// Detail carried by every legal verdict.
pub const LEGAL_MOVE: &str = "Legal move.";

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Legal,
    Illegal(String),
}

/// The answer a rule gives for one move.
///
/// A legal verdict carries whatever position the deciding rule attached
/// to it; nothing here applies the move. An illegal verdict carries the
/// position evaluation started from and a reason.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct Verdict {
    position: Position,
    outcome: Outcome,
}

impl Verdict {
    pub fn legal(position: Position) -> Self {
        Self {
            position,
            outcome: Outcome::Legal,
        }
    }

    pub fn illegal(position: Position, detail: impl Into<String>) -> Self {
        Self {
            position,
            outcome: Outcome::Illegal(detail.into()),
        }
    }

    #[inline]
    pub fn is_legal(&self) -> bool {
        matches!(self.outcome, Outcome::Legal)
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn detail(&self) -> &str {
        match &self.outcome {
            Outcome::Legal => LEGAL_MOVE,
            Outcome::Illegal(detail) => detail,
        }
    }

    pub fn into_position(self) -> Position {
        self.position
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Square};

    #[test]
    fn test_legal() {
        let position = Position::standard();
        let verdict = Verdict::legal(position.clone());
        assert!(verdict.is_legal());
        assert_eq!(verdict.position(), &position);
        assert_eq!(verdict.detail(), "Legal move.");
        assert_eq!(verdict.outcome(), &Outcome::Legal);
    }
    #[test]
    fn test_illegal() {
        let position = Position::standard();
        let verdict = Verdict::illegal(position.clone(), "Not a Pawn");
        assert!(!verdict.is_legal());
        assert_eq!(verdict.position(), &position);
        assert_eq!(verdict.detail(), "Not a Pawn");
        assert_eq!(verdict.to_string(), "Not a Pawn");
    }
    #[test]
    fn test_illegal_with_legal_text_is_still_illegal() {
        let verdict = Verdict::illegal(Position::empty(), LEGAL_MOVE);
        assert!(!verdict.is_legal());
        assert_ne!(verdict, Verdict::legal(Position::empty()));
    }
    #[test]
    fn test_equality_covers_position() {
        let other = Position::empty().set(Square::A1, Piece::WR);
        assert_ne!(Verdict::legal(Position::empty()), Verdict::legal(other.clone()));
        assert_eq!(Verdict::legal(other.clone()), Verdict::legal(other));
    }
    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Verdict::illegal(Position::empty(), "nope")).unwrap();
        assert_eq!(json["outcome"]["Illegal"], "nope");
        assert_eq!(json["position"].as_str().map(str::len), Some(64));
    }
}
