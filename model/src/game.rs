use crate::board::Board;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// A winning tile takes precedence over a blocked board.
    pub fn of<R>(board: &Board<R>) -> Self {
        if board.has_winning_tile() {
            GameStatus::Won
        } else if board.is_game_over() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_finished(self) -> bool {
        self != GameStatus::Playing
    }
}

#[test]
fn status_of_board() {
    use crate::config::GameConfig;
    use ndarray::Array2;
    use rand::rngs::mock::StepRng;

    let status = |values: Vec<u32>| {
        let array = Array2::from_shape_vec((2, 2), values).unwrap();
        Board::from_array(array, GameConfig::default(), StepRng::new(0, 0))
            .unwrap()
            .status()
    };
    assert_eq!(status(vec![2, 0, 0, 0]), GameStatus::Playing);
    assert_eq!(status(vec![2, 2, 4, 8]), GameStatus::Playing);
    assert_eq!(status(vec![2, 4, 4, 2]), GameStatus::Lost);
    assert_eq!(status(vec![2048, 0, 0, 0]), GameStatus::Won);
    assert_eq!(status(vec![2, 4, 4, 2048]), GameStatus::Won);
    assert!(GameStatus::Lost.is_finished());
    assert!(!GameStatus::Playing.is_finished());
}
