//! End-to-end scenarios driven through the reducer.

use tictactoe_rewind::{Action, Board, Cell, GameState, GameStatus, Player};

fn play(moves: &[usize]) -> GameState {
    moves
        .iter()
        .fold(GameState::new(), |s, &i| s.apply(Action::MoveAt(i)))
}

fn marks(state: &GameState) -> Vec<Option<Player>> {
    state
        .board()
        .cells()
        .iter()
        .map(|c| match c {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(*p),
        })
        .collect()
}

#[test]
fn test_alternating_play_on_the_diagonal() {
    use Player::{O, X};

    let state = play(&[0]);
    assert_eq!(marks(&state)[0], Some(X));
    assert_eq!(state.status_line(), "Next player: O");

    let state = state.apply(Action::MoveAt(4));
    assert_eq!(marks(&state)[4], Some(O));
    assert_eq!(state.status_line(), "Next player: X");

    // Diagonal 0-4-8 is X,O,X after the third move: no winner.
    let state = state.apply(Action::MoveAt(8));
    assert_eq!(marks(&state)[8], Some(X));
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.status_line(), "Next player: O");
}

#[test]
fn test_x_wins_the_left_column() {
    // X: 0, 3, 6; O: 1, 4.
    let state = play(&[0, 1, 3, 4, 6]);

    let win = state.winner().expect("left column is complete");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, [0, 3, 6]);
    assert_eq!(state.status_line(), "Winner: X");

    // Every further move is a no-op.
    let after = state.clone().apply(Action::MoveAt(2));
    assert_eq!(state, after);
    let after = state.clone().apply(Action::MoveAt(8));
    assert_eq!(state, after);
}

#[test]
fn test_nine_moves_without_a_line_is_a_draw() {
    // Final board: X O X / O X X / O X O
    let state = play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    assert_eq!(state.step(), 9);
    assert_eq!(state.winner(), None);
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.status_line(), "Draw!");

    // The draw belongs to step 9: step 8 still reads as in progress.
    let viewed = state.apply(Action::JumpTo(8));
    assert_eq!(viewed.status(), GameStatus::InProgress);
}

#[test]
fn test_history_grows_one_record_per_move() {
    let moves = [4, 0, 8, 2, 6];
    for n in 0..=moves.len() {
        let state = play(&moves[..n]);
        assert_eq!(state.history().len(), n + 1);
        assert_eq!(state.step(), n);
    }
}

#[test]
fn test_branching_from_the_past_replays_forward() {
    let state = play(&[0, 4, 8]);
    assert_eq!(state.history().len(), 4);

    // Jump back to step 1 and play a different O move.
    let state = state.apply(Action::JumpTo(1)).apply(Action::MoveAt(2));
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.step(), 2);

    // The old future is gone; play continues from the branch.
    assert!(state.board().is_empty(4));
    assert_eq!(state.board().get(2), Some(Cell::Occupied(Player::O)));
    assert_eq!(state.next_player(), Player::X);
}

#[test]
fn test_jump_to_start_from_any_depth() {
    let state = play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]).apply(Action::JumpTo(0));
    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.status_line(), "Next player: X");
    assert_eq!(state.history().len(), 10);
}

#[test]
fn test_move_list_labels_follow_the_stored_coordinates() {
    let state = play(&[4, 0, 8]);
    let labels: Vec<String> = (0..state.history().len())
        .map(|k| state.move_label(k).unwrap())
        .collect();
    assert_eq!(
        labels,
        [
            "Go to game start",
            "Go to move #1 (2, 2)",
            "Go to move #2 (1, 1)",
            "Go to move #3 (3, 3)",
        ]
    );
}

#[test]
fn test_labels_survive_a_branch() {
    let state = play(&[0, 4]).apply(Action::JumpTo(1)).apply(Action::MoveAt(5));
    assert_eq!(state.move_label(1).unwrap(), "Go to move #1 (1, 1)");
    assert_eq!(state.move_label(2).unwrap(), "Go to move #2 (2, 3)");
    assert_eq!(state.move_label(3), None);
}
