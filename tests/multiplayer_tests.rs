use digit_duel::{
    GamePhase, GameSettings, GuessError, MultiGuessOutcome, MultiplayerGame, SetupOutcome,
};

fn settings(players: usize) -> GameSettings {
    GameSettings::new(3, 7, players).unwrap()
}

fn three_player_game() -> MultiplayerGame {
    let mut g = MultiplayerGame::new(settings(3));
    g.save_player_setup("Alice", "123");
    g.save_player_setup("Bob", "456");
    g.save_player_setup("Charlie", "789");
    g
}

#[test]
fn new_game_starts_in_setup_with_defaults() {
    let g = MultiplayerGame::new(settings(3));
    assert_eq!(g.phase(), GamePhase::Setup);
    assert_eq!(g.players().len(), 3);
    assert_eq!(g.players()[2].name(), "Player 3");
    assert_eq!(g.players()[0].secret(), "");
    assert_eq!(g.active_players(), &[0, 1, 2]);
    assert_eq!(g.current_setup_player(), 0);
    assert_eq!(g.current_guesser(), 0);
    assert!(!g.is_over());
}

#[test]
fn setup_advances_and_transitions_to_guessing() {
    let mut g = MultiplayerGame::new(settings(2));
    let out = g.save_player_setup("Alice", "123");
    assert_eq!(out, SetupOutcome::Saved { player: 0, next: 1 });
    assert_eq!(out.message(), "Player 2's turn to setup");
    assert_eq!(g.phase(), GamePhase::Setup);
    let out = g.save_player_setup("Bob", "456");
    assert_eq!(out, SetupOutcome::Complete { player: 1 });
    assert_eq!(g.phase(), GamePhase::Guessing);
    assert_eq!(g.current_guesser(), 0);
    assert_eq!(g.players()[1].secret(), "456");
}

#[test]
fn blank_name_gets_default_and_short_number_is_padded() {
    let mut g = MultiplayerGame::new(settings(2));
    g.save_player_setup("   ", "7");
    assert_eq!(g.players()[0].name(), "Player 1");
    assert_eq!(g.players()[0].secret(), "007");
}

#[test]
fn invalid_secret_keeps_same_player() {
    let mut g = MultiplayerGame::new(settings(2));
    let out = g.save_player_setup("Alice", "1234");
    assert_eq!(out, SetupOutcome::Rejected(GuessError::Range { digit_count: 3 }));
    assert_eq!(g.current_setup_player(), 0);
    assert_eq!(g.players()[0].name(), "Player 1");
    assert_eq!(g.players()[0].secret(), "");
    assert_eq!(
        g.save_player_setup("Alice", "x1").message(),
        "Please enter a valid number."
    );
    assert_eq!(g.current_setup_player(), 0);
}

#[test]
fn setup_after_guessing_started_is_ignored() {
    let mut g = three_player_game();
    assert_eq!(g.save_player_setup("Dave", "000"), SetupOutcome::Ignored);
}

#[test]
fn guess_before_setup_finishes_is_ignored() {
    let mut g = MultiplayerGame::new(settings(2));
    assert_eq!(g.submit_guess("123", 1), MultiGuessOutcome::Ignored);
}

#[test]
fn miss_records_on_target_and_passes_turn() {
    let mut g = three_player_game();
    let out = g.submit_guess("465", 1);
    match out {
        MultiGuessOutcome::Miss {
            feedback,
            next_guesser,
        } => {
            assert_eq!(feedback.correct_digits, 3);
            assert_eq!(feedback.correct_positions, 1);
            assert_eq!(next_guesser, 1);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    let record = &g.players()[1].guesses()[0];
    assert_eq!(record.guesser, 0);
    assert_eq!(record.target, 1);
    assert!(!record.correct);
    assert_eq!(g.current_guesser(), 1);
}

#[test]
fn correct_guess_eliminates_target() {
    let mut g = three_player_game();
    let out = g.submit_guess("456", 1);
    assert_eq!(out.message(), "Alice found Bob's number!");
    assert!(g.players()[1].is_eliminated());
    assert_eq!(g.active_players(), &[0, 2]);
    assert_eq!(g.phase(), GamePhase::Guessing);
    assert!(!g.is_over());
    // Bob is out, so Charlie guesses next.
    assert_eq!(g.current_guesser(), 2);
}

#[test]
fn last_elimination_finishes_without_advancing_turn() {
    let mut g = three_player_game();
    g.submit_guess("456", 1);
    // Charlie misses Alice, back to Alice.
    g.submit_guess("000", 0);
    assert_eq!(g.current_guesser(), 0);
    let out = g.submit_guess("789", 2);
    assert_eq!(out, MultiGuessOutcome::Won { winner: "Alice".into() });
    assert_eq!(out.message(), "Alice wins!");
    assert_eq!(g.phase(), GamePhase::Finished);
    assert!(g.is_over());
    assert_eq!(g.current_guesser(), 0);
    assert_eq!(g.winner().map(|p| p.name()), Some("Alice"));
    assert_eq!(g.submit_guess("123", 1), MultiGuessOutcome::Ignored);
}

#[test]
fn next_guesser_skips_eliminated_players() {
    let mut g = three_player_game();
    g.submit_guess("456", 1);
    // Charlie misses, Alice is up again.
    g.submit_guess("111", 0);
    assert_eq!(g.current_guesser(), 0);
    assert_eq!(g.next_guesser(), 2);
    assert_eq!(g.next_guesser(), 0);
}

#[test]
fn invalid_guess_changes_nothing() {
    let mut g = three_player_game();
    let before = g.clone();
    assert_eq!(
        g.submit_guess("0123", 1),
        MultiGuessOutcome::Rejected(GuessError::Length { digit_count: 3 })
    );
    assert_eq!(
        g.submit_guess("1000", 1),
        MultiGuessOutcome::Rejected(GuessError::Range { digit_count: 3 })
    );
    assert_eq!(g.submit_guess("4a6", 1), MultiGuessOutcome::Rejected(GuessError::Format));
    assert_eq!(g.submit_guess("", 1), MultiGuessOutcome::Rejected(GuessError::Empty));
    assert_eq!(g, before);
}

#[test]
fn short_guess_is_padded_and_recorded() {
    let mut g = three_player_game();
    assert!(matches!(
        g.submit_guess("12", 1),
        MultiGuessOutcome::Miss { next_guesser: 1, .. }
    ));
    assert_eq!(g.players()[1].guesses()[0].guess, "012");
    assert_eq!(g.current_guesser(), 1);
}

#[test]
fn cannot_target_self_or_eliminated_players() {
    let mut g = three_player_game();
    assert_eq!(
        g.submit_guess("123", 0),
        MultiGuessOutcome::Rejected(GuessError::InvalidTarget(0))
    );
    assert_eq!(
        g.submit_guess("123", 9),
        MultiGuessOutcome::Rejected(GuessError::InvalidTarget(9))
    );
    g.submit_guess("456", 1);
    g.submit_guess("000", 0);
    assert_eq!(
        g.submit_guess("456", 1),
        MultiGuessOutcome::Rejected(GuessError::InvalidTarget(1))
    );
    assert_eq!(g.current_guesser(), 0);
}

#[test]
fn valid_targets_exclude_guesser_and_eliminated() {
    let mut g = three_player_game();
    let ids: Vec<usize> = g.valid_targets().map(|p| p.id()).collect();
    assert_eq!(ids, vec![1, 2]);
    g.submit_guess("456", 1);
    let ids: Vec<usize> = g.valid_targets().map(|p| p.id()).collect();
    assert_eq!(ids, vec![0]);
}

#[test]
fn two_player_game_ends_on_first_correct_guess() {
    let mut g = MultiplayerGame::new(settings(2));
    g.save_player_setup("Alice", "123");
    g.save_player_setup("Bob", "456");
    assert_eq!(g.submit_guess("456", 1).message(), "Alice wins!");
    assert_eq!(g.phase(), GamePhase::Finished);
}
