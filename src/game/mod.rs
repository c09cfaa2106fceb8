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

use crate::board::{Color, Move, Position};
use crate::ruleset::{Rule, Verdict};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
}

/// Turn bookkeeping around a position. Rules only ever see the position
/// and the move; whose turn it is stays out here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    current_player: Color,
    turn_id: u32,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::custom(Position::standard(), Color::White, 0)
    }
}

impl Game {
    pub fn custom(position: Position, current_player: Color, turn_id: u32) -> Self {
        Self {
            position,
            current_player,
            turn_id,
            status: GameStatus::InProgress,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }
    pub fn current_player(&self) -> Color {
        self.current_player
    }
    pub fn turn_id(&self) -> u32 {
        self.turn_id
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Judges `mv` against the current position.
    pub fn evaluate(&self, rule: &Rule, mv: &Move) -> Result<Verdict> {
        rule.evaluate(&self.position, mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Kind, Piece, Square};

    #[test]
    fn test_default_game() {
        let game = Game::default();
        assert_eq!(game.position(), &Position::standard());
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.turn_id(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }
    #[test]
    fn test_custom_game() {
        let text = "________ ________ _p_p____ _______P _____P_K ______Pp R_____p_ _____r_k";
        let position: Position = text.parse().unwrap();
        let game = Game::custom(position.clone(), Color::Black, 5);
        assert_eq!(game.position(), &position);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.turn_id(), 5);
        assert_eq!(game.position().get(Square::H5), Piece::WK);
    }
    #[test]
    fn test_evaluate_reads_only_the_position() {
        let rule = Rule::unit(|judge, position, mv| {
            if position.get(mv.from).is(Kind::Pawn) {
                return judge.legal(position);
            }
            judge.illegal("Not a Pawn")
        });
        let white = Game::default();
        let black = Game::custom(Position::standard(), Color::Black, 7);
        let mv = "e7e5".parse().unwrap();
        assert_eq!(white.evaluate(&rule, &mv).unwrap(), black.evaluate(&rule, &mv).unwrap());
        let verdict = white.evaluate(&rule, &"g1f3".parse().unwrap()).unwrap();
        assert_eq!(verdict.detail(), "Not a Pawn");
        assert_eq!(verdict.position(), white.position());
    }
    #[test]
    fn test_serde_round_trip() {
        let game = Game::custom(Position::empty().set(Square::E1, Piece::WK), Color::Black, 3);
        let json = serde_json::to_string(&game).unwrap();
        let decoded: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, game);
    }
}
