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

//! Rule trees for judging a single move
//!
//! * A `Unit` wraps a decision body that looks at a position and a move
//!   and declares exactly one `Verdict` through the `Judge` it is given.
//!
//! * `Rule` combines units with short-circuiting `and` / `or` (also
//!   spelled `&` and `|`). `a.and(b).and(c)` is left-associated. An `And`
//!   stops at the first illegal verdict, an `Or` at the first legal one;
//!   whichever verdict ends the walk is returned unchanged.
//!
//! Rules never change once built, and sub-rules are shared by reference
//! count, so the same rule can sit in any number of trees.

use anyhow::Result;
use std::ops::{BitAnd, BitOr};
use std::sync::Arc;

mod unit;
mod verdict;

pub use unit::*;
pub use verdict::*;

use crate::board::{Move, Position};

#[derive(Debug, Clone)]
pub enum Rule {
    Unit(Unit),
    And(Arc<Rule>, Arc<Rule>),
    Or(Arc<Rule>, Arc<Rule>),
}

impl Rule {
    /// Shorthand for `Rule::Unit(Unit::new(body))`.
    pub fn unit<F, R>(body: F) -> Self
    where
        F: Fn(Judge, &Position, &Move) -> R + Send + Sync + 'static,
        R: Into<Option<Ruling>>,
    {
        Self::Unit(Unit::new(body))
    }

    pub fn and(self, other: impl Into<Rule>) -> Self {
        Self::And(Arc::new(self), Arc::new(other.into()))
    }

    pub fn or(self, other: impl Into<Rule>) -> Self {
        Self::Or(Arc::new(self), Arc::new(other.into()))
    }

    /// Folds `rules` into a left-associated `And` chain. `None` if empty.
    pub fn all<I>(rules: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        rules
            .into_iter()
            .map(Into::<Rule>::into)
            .reduce(|acc, rule| acc.and(rule))
    }

    /// Folds `rules` into a left-associated `Or` chain. `None` if empty.
    pub fn any<I>(rules: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        rules
            .into_iter()
            .map(Into::<Rule>::into)
            .reduce(|acc, rule| acc.or(rule))
    }

    /// Judges `mv` against `position`.
    ///
    /// # Errors
    ///
    /// Fails if a unit on the evaluated path declares no verdict
    /// (`RuleError::NoVerdict`). Units skipped by short-circuiting are
    /// never run.
    pub fn evaluate(&self, position: &Position, mv: &Move) -> Result<Verdict> {
        match self {
            Rule::Unit(unit) => unit.evaluate(position, mv),
            Rule::And(left, right) => {
                let verdict = left.evaluate(position, mv)?;
                if !verdict.is_legal() {
                    #[cfg(feature = "logging")]
                    log::trace!("and on {}: short-circuit on illegal left", mv);
                    return Ok(verdict);
                }
                right.evaluate(position, mv)
            }
            Rule::Or(left, right) => {
                let verdict = left.evaluate(position, mv)?;
                if verdict.is_legal() {
                    #[cfg(feature = "logging")]
                    log::trace!("or on {}: short-circuit on legal left", mv);
                    return Ok(verdict);
                }
                right.evaluate(position, mv)
            }
        }
    }
}

impl From<Unit> for Rule {
    fn from(value: Unit) -> Self {
        Rule::Unit(value)
    }
}

impl<T: Into<Rule>> BitAnd<T> for Rule {
    type Output = Rule;

    fn bitand(self, rhs: T) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: Into<Rule>> BitOr<T> for Rule {
    type Output = Rule;

    fn bitor(self, rhs: T) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: Into<Rule>> BitAnd<T> for Unit {
    type Output = Rule;

    fn bitand(self, rhs: T) -> Self::Output {
        Rule::from(self).and(rhs)
    }
}

impl<T: Into<Rule>> BitOr<T> for Unit {
    type Output = Rule;

    fn bitor(self, rhs: T) -> Self::Output {
        Rule::from(self).or(rhs)
    }
}
