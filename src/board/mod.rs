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

//! Board values read by the rule engine
//!
//! Everything here is an immutable value:
//!
//! * A `Square` represents the coordinates for a single square
//!   on an 8-by-8 board. The 8 rows and 8 columns on a board
//!   are represented by `Rank` (`Rank1` .. `Rank8`) and `File`
//!   (`FileA` .. `FileH`) respectively. Each square is named using the
//!   letter of the file followed by the number of the rank (e.g. `A1` ..
//!   `H8`). `offset` moves by a signed number of ranks and files and
//!   returns `None` off the edge of the board.
//!
//! * A `Piece` is either empty or a `Kind` (`Pawn`, `Rook`, `Knight`,
//!   `Bishop`, `Queen`, `King`) owned by a `Color` (`White` or `Black`).
//!   Its notation is a single letter, uppercase for white and lowercase
//!   for black, with `_` for an empty square.
//!
//! * A `Position` maps each of the 64 squares to a piece. `set` and
//!   `reset` return a new position and leave the original untouched.
//!
//! * A `Move` is a source square, a destination square and an optional
//!   `Promotion`, written `e2e4` or `e7e8q`. When the squares share a
//!   rank, file or diagonal, `path` lists every square on the way.

mod moves;
mod piece;
mod position;
mod square;

pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
