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
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use super::verdict::Verdict;
use crate::board::{Move, Position};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule {0:?} returned without declaring a verdict")]
    NoVerdict(String),
}

/// Token handed to a unit's body for declaring its verdict.
///
/// Both declarations consume the judge, so a body can declare at most
/// once, and the returned `Ruling` is the only thing the body can hand
/// back to the unit.
pub struct Judge {
    original: Position,
}

impl Judge {
    /// Declares the move legal. `position` is attached to the verdict as is.
    pub fn legal(self, position: &Position) -> Ruling {
        Ruling(Verdict::legal(position.clone()))
    }

    /// Declares the move illegal against the position evaluation started
    /// from.
    pub fn illegal(self, detail: impl Into<String>) -> Ruling {
        Ruling(Verdict::illegal(self.original, detail))
    }
}

/// A verdict declared through a `Judge`.
#[derive(Debug)]
pub struct Ruling(Verdict);

type Body = dyn Fn(Judge, &Position, &Move) -> Option<Ruling> + Send + Sync;

/// The smallest rule: a decision body over `(position, move)`.
///
/// The body returns the `Ruling` produced by its judge. Returning `None`
/// means no verdict was declared, which `evaluate` reports as
/// `RuleError::NoVerdict` rather than as a verdict.
#[derive(Clone)]
pub struct Unit {
    label: String,
    body: Arc<Body>,
}

impl Unit {
    pub fn new<F, R>(body: F) -> Self
    where
        F: Fn(Judge, &Position, &Move) -> R + Send + Sync + 'static,
        R: Into<Option<Ruling>>,
    {
        Self::labeled("unit", body)
    }

    /// Same as `new`, with a label used in logs and errors.
    pub fn labeled<F, R>(label: impl Into<String>, body: F) -> Self
    where
        F: Fn(Judge, &Position, &Move) -> R + Send + Sync + 'static,
        R: Into<Option<Ruling>>,
    {
        let body: Arc<Body> = Arc::new(
            move |judge: Judge, position: &Position, mv: &Move| -> Option<Ruling> {
                body(judge, position, mv).into()
            },
        );
        Self {
            label: label.into(),
            body,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the body once against `position` and `mv`.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NoVerdict` if the body declared nothing.
    pub fn evaluate(&self, position: &Position, mv: &Move) -> Result<Verdict> {
        let judge = Judge {
            original: position.clone(),
        };
        match (self.body)(judge, position, mv) {
            Some(Ruling(verdict)) => {
                #[cfg(feature = "logging")]
                log::trace!("unit {:?} on {}: {}", self.label, mv, verdict);
                Ok(verdict)
            }
            None => {
                #[cfg(feature = "logging")]
                log::warn!("unit {:?} on {} declared no verdict", self.label, mv);
                Err(RuleError::NoVerdict(self.label.clone()).into())
            }
        }
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Rank;

    fn mv(notation: &str) -> Move {
        notation.parse().unwrap()
    }

    fn to_rank_5() -> Unit {
        Unit::new(|judge, position, mv| {
            if mv.to.rank() == Rank::Rank5 {
                return judge.legal(position);
            }
            judge.illegal("The move is not to rank 5.")
        })
    }

    #[test]
    fn test_legal_move() {
        let position = Position::standard();
        let verdict = to_rank_5().evaluate(&position, &mv("e1e5")).unwrap();
        assert!(verdict.is_legal());
        assert_eq!(verdict.position(), &position);
    }
    #[test]
    fn test_illegal_move() {
        let position = Position::standard();
        let verdict = to_rank_5().evaluate(&position, &mv("a1a2")).unwrap();
        assert!(!verdict.is_legal());
        assert_eq!(verdict.detail(), "The move is not to rank 5.");
        assert_eq!(verdict.position(), &position);
    }
    #[test]
    fn test_illegal_uses_starting_position() {
        let unit = Unit::new(|judge, _position, _mv| judge.illegal("no"));
        let position = Position::empty();
        let verdict = unit.evaluate(&position, &mv("a1a2")).unwrap();
        assert_eq!(verdict.position(), &position);
    }
    #[test]
    fn test_legal_keeps_attached_position() {
        let unit = Unit::new(|judge, position, mv| {
            let piece = position.get(mv.from);
            judge.legal(&position.reset(mv.from).set(mv.to, piece))
        });
        let position = Position::standard();
        let verdict = unit.evaluate(&position, &mv("e2e4")).unwrap();
        assert!(verdict.is_legal());
        assert!(verdict.position().is_vacant(crate::board::Square::E2));
        assert!(position.is_occupied(crate::board::Square::E2));
    }
    #[test]
    fn test_no_verdict_is_an_error() {
        let unit = Unit::labeled("rank 5 only", |judge, position, mv| {
            if mv.to.rank() == Rank::Rank5 {
                return Some(judge.legal(position));
            }
            None
        });
        let position = Position::standard();
        assert!(unit.evaluate(&position, &mv("e1e5")).unwrap().is_legal());
        let err = unit.evaluate(&position, &mv("a1a2")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RuleError>(),
            Some(&RuleError::NoVerdict("rank 5 only".to_string()))
        );
    }
    #[test]
    fn test_label_and_debug() {
        let unit = Unit::labeled("pawn", |judge, _, _| judge.illegal("x"));
        assert_eq!(unit.label(), "pawn");
        assert!(format!("{:?}", unit).contains("pawn"));
        assert_eq!(to_rank_5().label(), "unit");
    }
}
