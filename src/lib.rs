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

//! Move legality as a tree of rules
//!
//! Build a `Rule` out of `Unit`s joined with `and` / `or`, then ask it
//! whether a `Move` is allowed in a `Position`:
//!
//! ```
//! use chess_ruleset::*;
//!
//! let rook = Rule::unit(|judge, position, mv| {
//!     if position.get(mv.from).is(Kind::Rook) {
//!         return judge.legal(position);
//!     }
//!     judge.illegal("The piece is not a rook.")
//! });
//! let straight = Rule::unit(|judge, position, mv| {
//!     if mv.is_horizontal() || mv.is_vertical() {
//!         return judge.legal(position);
//!     }
//!     judge.illegal("Rooks move along ranks and files.")
//! });
//! let clear = Rule::unit(|judge, position, mv| match position.is_path_clear(mv) {
//!     Ok(true) => judge.legal(position),
//!     _ => judge.illegal("The path is blocked."),
//! });
//! let rule = rook & straight & clear;
//!
//! let position = Position::standard().reset(Square::A2);
//! assert!(rule.evaluate(&position, &"a1a6".parse::<Move>()?)?.is_legal());
//! let verdict = rule.evaluate(&position, &"a1a8".parse::<Move>()?)?;
//! assert_eq!(verdict.detail(), "The path is blocked.");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Enable the `logging` feature (on by default) to have evaluation traced
//! through the `log` facade.

pub mod board;
pub mod game;
pub mod ruleset;

pub use board::*;
pub use game::*;
pub use ruleset::*;
