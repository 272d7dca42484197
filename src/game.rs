use log::{debug, info};

use crate::board::{Board, Group};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::types::{CellState, Color, GameResult, GameState, Notification, Position};

/// One game of Go with capture-count scoring.
///
/// `play` and `pass` either commit fully or leave the game untouched.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_color: Color,
    score: [u32; 2],
    last_move_passed: bool,
    in_atari: bool,
    attempted_suicide: bool,
    is_game_over: bool,
    captured: Vec<Position>,
}

impl Game {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            current_color: Color::Black,
            score: [0, 0],
            last_move_passed: false,
            in_atari: false,
            attempted_suicide: false,
            is_game_over: false,
            captured: Vec::new(),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.size)
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color that moves next.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Accepts either `Position`, `(col, row)` or `[col, row]`.
    pub fn state_at(&self, pos: impl Into<Position>) -> Result<CellState> {
        self.board.get(pos.into())
    }

    /// Stones captured by `color` so far.
    pub fn score(&self, color: Color) -> u32 {
        self.score[color.index()]
    }

    /// `[black, white]` capture counts.
    pub fn scores(&self) -> [u32; 2] {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Whether the last successful play left an opponent group with one liberty.
    pub fn is_in_atari(&self) -> bool {
        self.in_atari
    }

    /// Whether the last play was rejected as suicide.
    pub fn is_attempted_suicide(&self) -> bool {
        self.attempted_suicide
    }

    pub fn last_move_passed(&self) -> bool {
        self.last_move_passed
    }

    /// Stones removed by the last successful play.
    pub fn captured(&self) -> &[Position] {
        &self.captured
    }

    /// Places a stone of the current color.
    ///
    /// Returns `Ok(false)` without changing the turn when the point is
    /// occupied or the move would be suicide.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `OutOfBounds` for an off-board point.
    pub fn play(&mut self, pos: impl Into<Position>) -> Result<bool> {
        let pos = pos.into();
        if self.is_game_over {
            return Err(GameError::GameOver);
        }

        let target = self.board.get(pos)?;

        self.attempted_suicide = false;
        self.in_atari = false;
        self.captured.clear();

        if !target.is_empty() {
            debug!("could not play in non empty position {}, {}", pos.col, pos.row);
            return Ok(false);
        }

        let color = self.current_color;
        self.board.set(pos, color.into())?;

        let mut captured_groups: Vec<Group> = Vec::new();
        let mut atari = false;

        for next in self.board.neighbors(pos) {
            if self.board[next].color() != Some(color.opponent()) {
                continue;
            }
            if captured_groups.iter().any(|group| group.contains(next)) {
                continue;
            }
            let Some(group) = self.board.group(next)? else {
                continue;
            };
            match group.liberties {
                0 => captured_groups.push(group),
                1 => atari = true,
                _ => {}
            }
        }

        if captured_groups.is_empty() {
            let own_liberties = self.board.group(pos)?.map_or(0, |group| group.liberties);
            if own_liberties == 0 {
                self.board.set(pos, CellState::Empty)?;
                self.attempted_suicide = true;
                debug!("rejected suicide at {}, {} for {:?}", pos.col, pos.row, color);
                return Ok(false);
            }
        }

        for group in captured_groups {
            for &stone in &group.stones {
                self.board.set(stone, CellState::Empty)?;
            }
            self.captured.extend(group.stones);
        }
        if !self.captured.is_empty() {
            self.score[color.index()] += self.captured.len() as u32;
            debug!("{:?} captured {} stone(s)", color, self.captured.len());
        }

        self.in_atari = atari;
        if atari {
            debug!("{:?} put an opponent group in atari", color);
        }
        self.last_move_passed = false;
        self.current_color = color.opponent();

        Ok(true)
    }

    /// Passes the turn. A second consecutive pass ends the game instead.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended.
    pub fn pass(&mut self) -> Result<&mut Self> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.last_move_passed {
            return Ok(self.end_game());
        }

        self.last_move_passed = true;
        self.captured.clear();
        self.current_color = self.current_color.opponent();

        Ok(self)
    }

    pub fn end_game(&mut self) -> &mut Self {
        if !self.is_game_over {
            info!("game over, captures black={} white={}", self.score[0], self.score[1]);
        }
        self.is_game_over = true;
        self
    }

    /// Message for the page, in priority order atari, suicide, game over.
    pub fn notification(&self) -> Option<Notification> {
        if self.in_atari {
            Some(Notification::Atari)
        } else if self.attempted_suicide {
            Some(Notification::Suicide)
        } else if self.is_game_over {
            Some(Notification::GameOver)
        } else {
            None
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            size: self.board.size(),
            board: self.board.to_array(),
            current_color: self.current_color,
            score: self.score,
            in_atari: self.in_atari,
            attempted_suicide: self.attempted_suicide,
            is_game_over: self.is_game_over,
            last_move_passed: self.last_move_passed,
            captured: self.captured.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let [black_captures, white_captures] = self.score;
        GameResult {
            winner: if black_captures > white_captures {
                Some(Color::Black)
            } else if white_captures > black_captures {
                Some(Color::White)
            } else {
                None
            },
            black_captures,
            white_captures,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_color: Color) {
        self.board = board;
        self.current_color = current_color;
        self.is_game_over = false;
        self.last_move_passed = false;
        self.captured.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut Game, moves: &[(usize, usize)]) {
        for &mv in moves {
            assert!(game.play(mv).unwrap(), "move {mv:?} was rejected");
        }
    }

    fn board_with(size: usize, black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &p in black {
            board.set(p.into(), CellState::Black).unwrap();
        }
        for &p in white {
            board.set(p.into(), CellState::White).unwrap();
        }
        board
    }

    #[test]
    fn initial_state_is_correct() {
        let game = Game::new(5).unwrap();
        let state = game.to_game_state();

        assert_eq!(state.current_color, Color::Black);
        assert_eq!(state.score, [0, 0]);
        assert!(!state.is_game_over);
        assert!(!state.last_move_passed);
        assert!(!state.in_atari);
        assert!(!state.attempted_suicide);
        assert!(state.captured.is_empty());
        assert_eq!(game.notification(), None);
    }

    #[test]
    fn occupied_point_is_rejected_without_side_effects() {
        let mut game = Game::new(5).unwrap();
        game.play((0, 0)).unwrap();
        game.pass().unwrap();
        let before = game.to_game_state();

        assert!(!game.play((0, 0)).unwrap());

        assert_eq!(game.to_game_state(), before);
        assert!(game.last_move_passed());
    }

    #[test]
    fn off_board_play_is_an_error() {
        let mut game = Game::new(5).unwrap();

        assert_eq!(
            game.play((5, 0)),
            Err(GameError::OutOfBounds { col: 5, row: 0, size: 5 })
        );
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn single_stone_capture_scores_one() {
        let mut game = Game::new(5).unwrap();
        game.set_board_for_test(
            board_with(5, &[(0, 1), (2, 1), (1, 0)], &[(1, 1)]),
            Color::Black,
        );

        assert!(game.play((1, 2)).unwrap());

        assert_eq!(game.state_at((1, 1)).unwrap(), CellState::Empty);
        assert_eq!(game.score(Color::Black), 1);
        assert_eq!(game.captured(), &[Position::new(1, 1)]);
        assert_eq!(game.current_color(), Color::White);
    }

    #[test]
    fn group_touched_twice_is_captured_once() {
        // * X O
        // X X O
        // O O .   White plays (0,0), touching the black group twice.
        let mut game = Game::new(3).unwrap();
        game.set_board_for_test(
            board_with(3, &[(1, 0), (0, 1), (1, 1)], &[(2, 0), (2, 1), (0, 2), (1, 2)]),
            Color::White,
        );

        assert!(game.play((0, 0)).unwrap());

        assert_eq!(game.score(Color::White), 3);
        assert_eq!(game.captured().len(), 3);
        assert_eq!(game.board().count(), (0, 5));
    }

    #[test]
    fn atari_flag_is_set_and_cleared() {
        let mut game = Game::new(5).unwrap();
        // Black (2,1), white (2,2), black (1,2), white (4,4), black (3,2):
        // white (2,2) is left with one liberty at (2,3).
        play_all(&mut game, &[(2, 1), (2, 2), (1, 2), (4, 4), (3, 2)]);

        assert!(game.is_in_atari());
        assert_eq!(game.notification(), Some(Notification::Atari));

        play_all(&mut game, &[(0, 4)]);
        assert!(!game.is_in_atari());
    }

    #[test]
    fn captured_group_does_not_count_as_atari() {
        let mut game = Game::new(5).unwrap();
        game.set_board_for_test(
            board_with(5, &[(0, 1), (2, 1), (1, 0)], &[(1, 1)]),
            Color::Black,
        );

        assert!(game.play((1, 2)).unwrap());
        assert!(!game.is_in_atari());
    }

    #[test]
    fn suicide_is_rejected_and_reverted() {
        let mut game = Game::new(5).unwrap();
        game.set_board_for_test(board_with(5, &[], &[(1, 0), (0, 1)]), Color::Black);
        let before = game.board().clone();

        assert!(!game.play((0, 0)).unwrap());

        assert!(game.is_attempted_suicide());
        assert_eq!(game.notification(), Some(Notification::Suicide));
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn capture_takes_precedence_over_suicide() {
        // (0,0) has no empty neighbor, but playing there takes white (1,0).
        // * O X
        // O X .
        // . . .
        let mut game = Game::new(3).unwrap();
        game.set_board_for_test(
            board_with(3, &[(2, 0), (1, 1)], &[(1, 0), (0, 1)]),
            Color::Black,
        );

        assert!(game.play((0, 0)).unwrap());

        assert!(!game.is_attempted_suicide());
        assert_eq!(game.state_at((1, 0)).unwrap(), CellState::Empty);
        assert_eq!(game.state_at((0, 0)).unwrap(), CellState::Black);
        assert_eq!(game.score(Color::Black), 1);
        // White (0,1) is down to (0,2).
        assert!(game.is_in_atari());
    }

    #[test]
    fn suicide_flag_resets_on_next_play() {
        let mut game = Game::new(5).unwrap();
        game.set_board_for_test(board_with(5, &[], &[(1, 0), (0, 1)]), Color::Black);

        assert!(!game.play((0, 0)).unwrap());
        assert!(game.play((3, 3)).unwrap());
        assert!(!game.is_attempted_suicide());
    }

    #[test]
    fn single_pass_switches_turn() {
        let mut game = Game::new(5).unwrap();
        game.pass().unwrap();

        assert_eq!(game.current_color(), Color::White);
        assert!(game.last_move_passed());
        assert!(!game.is_game_over());
    }

    #[test]
    fn pass_keeps_move_flags() {
        let mut game = Game::new(5).unwrap();
        game.set_board_for_test(board_with(5, &[], &[(1, 0), (0, 1)]), Color::Black);
        assert!(!game.play((0, 0)).unwrap());

        game.pass().unwrap();
        assert!(game.is_attempted_suicide());
    }

    #[test]
    fn both_passes_end_game() {
        let mut game = Game::new(5).unwrap();
        game.pass().unwrap().pass().unwrap();

        assert!(game.is_game_over());
        assert_eq!(game.notification(), Some(Notification::GameOver));
    }

    #[test]
    fn play_after_game_over_is_an_error() {
        let mut game = Game::new(5).unwrap();
        game.end_game();

        for _ in 0..3 {
            assert_eq!(game.play((0, 0)), Err(GameError::GameOver));
        }
        assert_eq!(game.state_at((0, 0)).unwrap(), CellState::Empty);
    }

    #[test]
    fn pass_after_game_over_is_an_error() {
        let mut game = Game::new(5).unwrap();
        game.end_game();

        assert!(matches!(game.pass(), Err(GameError::GameOver)));
        assert!(game.is_game_over());
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn game_result_picks_player_with_more_captures() {
        let mut game = Game::new(5).unwrap();
        assert_eq!(game.to_game_result().winner, None);

        game.set_board_for_test(
            board_with(5, &[(0, 1), (2, 1), (1, 0)], &[(1, 1)]),
            Color::Black,
        );
        game.play((1, 2)).unwrap();
        game.end_game();

        let result = game.to_game_result();
        assert_eq!(result.winner, Some(Color::Black));
        assert_eq!(result.black_captures, 1);
        assert_eq!(result.white_captures, 0);
    }
}
