//! Tests for the game controller and its round clock.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use phee::{Game, GameEvent, GuessOutcome, MAX_GUESSES, Phase, Player, Roster, SessionError};

fn roster() -> Roster {
    Roster::new(vec![
        Player::new("1", "Jon Smith", "Ravens", "QB", "AFC", "6'2", 24, "12"),
        Player::new("2", "Sam Jones", "Bears", "WR", "NFC", "5'11", 27, "81"),
        Player::new("3", "Al Brown", "Jets", "RB", "AFC", "5'10", 23, "22"),
    ])
}

fn new_game() -> (Game, mpsc::UnboundedReceiver<GameEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Game::with_rng(tx, StdRng::seed_from_u64(42)), rx)
}

/// Feeds every queued event back into the game, returning how many ticks counted.
fn drain(game: &mut Game, rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> usize {
    let mut counted = 0;
    while let Ok(event) = rx.try_recv() {
        if let GameEvent::Tick { round } = event
            && game.on_tick(round)
        {
            counted += 1;
        }
    }
    counted
}

fn target_name(game: &Game) -> String {
    game.session()
        .target()
        .as_ref()
        .map(|p| p.name().clone())
        .expect("target selected")
}

fn wrong_names(game: &Game) -> Vec<String> {
    let target = target_name(game);
    game.roster()
        .players()
        .iter()
        .map(|p| p.name().clone())
        .filter(|n| *n != target)
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_clock_counts_seconds_while_active() {
    let (mut game, mut rx) = new_game();
    game.load_roster(roster()).expect("roster has players");
    assert!(game.timer_running());

    sleep(Duration::from_millis(3_500)).await;
    assert_eq!(drain(&mut game, &mut rx), 3);
    assert_eq!(*game.session().elapsed(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_win_stops_clock() {
    let (mut game, mut rx) = new_game();
    game.load_roster(roster()).expect("roster has players");

    sleep(Duration::from_millis(2_500)).await;
    drain(&mut game, &mut rx);

    let name = target_name(&game).to_uppercase();
    let outcome = game.submit_guess(&name);
    assert!(matches!(outcome, GuessOutcome::Correct { .. }));
    assert!(!game.timer_running());

    sleep(Duration::from_secs(5)).await;
    assert_eq!(drain(&mut game, &mut rx), 0);
    assert_eq!(*game.session().elapsed(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_stops_clock() {
    let (mut game, mut rx) = new_game();
    game.load_roster(roster()).expect("roster has players");
    let wrong = wrong_names(&game);

    for i in 0..usize::from(MAX_GUESSES) {
        let outcome = game.submit_guess(&wrong[i % wrong.len()]);
        if i + 1 < usize::from(MAX_GUESSES) {
            assert!(game.timer_running(), "clock stopped after guess {}", i + 1);
            assert!(!outcome.is_terminal());
        } else {
            assert!(matches!(outcome, GuessOutcome::GameOver { .. }));
        }
    }
    assert!(!game.timer_running());
    assert_eq!(*game.session().phase(), Phase::Lost);

    sleep(Duration::from_secs(3)).await;
    assert_eq!(drain(&mut game, &mut rx), 0);
}

#[tokio::test(start_paused = true)]
async fn test_play_again_resets_and_discards_old_ticks() {
    let (mut game, mut rx) = new_game();
    game.load_roster(roster()).expect("roster has players");
    let first_round = game.round();

    sleep(Duration::from_millis(1_500)).await;
    let wrong = wrong_names(&game);
    game.submit_guess(&wrong[0]);

    // Ticks from the first round are still queued when the new round starts.
    game.play_again().expect("roster has players");
    assert_eq!(game.round(), first_round + 1);
    assert_eq!(drain(&mut game, &mut rx), 0);
    assert!(!game.on_tick(first_round));

    assert_eq!(*game.session().guesses_left(), MAX_GUESSES);
    assert!(game.session().history().is_empty());
    assert_eq!(*game.session().elapsed(), 0);
    assert!(game.timer_running());

    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(drain(&mut game, &mut rx), 2);
    assert_eq!(*game.session().elapsed(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_play_again_after_terminal_keeps_roster() {
    let (mut game, _rx) = new_game();
    game.load_roster(roster()).expect("roster has players");
    let name = target_name(&game);
    game.submit_guess(&name);
    assert!(game.session().is_terminal());

    game.play_again().expect("roster has players");
    assert_eq!(game.roster().len(), 3);
    assert_eq!(*game.session().phase(), Phase::Active);
    let target = game.session().target().as_ref().expect("target selected");
    assert!(game.roster().contains(target.id()));
}

#[tokio::test(start_paused = true)]
async fn test_custom_tick_period() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut game =
        Game::with_rng(tx, StdRng::seed_from_u64(42)).with_tick_period(Duration::from_millis(10));
    game.load_roster(roster()).expect("roster has players");

    sleep(Duration::from_millis(35)).await;
    assert_eq!(drain(&mut game, &mut rx), 3);
    assert_eq!(*game.session().elapsed(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_empty_reload_abandons_running_round() {
    let (mut game, mut rx) = new_game();
    game.load_roster(roster()).expect("roster has players");
    sleep(Duration::from_millis(1_500)).await;

    let result = game.load_roster(Roster::default());
    assert_eq!(result, Err(SessionError::EmptyRoster));
    assert!(!game.timer_running());
    assert_eq!(*game.session().phase(), Phase::Idle);
    assert!(game.session().target().is_none());
    assert_eq!(game.submit_guess("Jon Smith"), GuessOutcome::Ignored);

    // The tick queued before the reload belongs to a dead round.
    sleep(Duration::from_secs(2)).await;
    assert_eq!(drain(&mut game, &mut rx), 0);
    assert_eq!(*game.session().elapsed(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_empty_roster_leaves_game_idle() {
    let (mut game, _rx) = new_game();
    let result = game.handle_event(GameEvent::RosterLoaded(Roster::default()));

    assert_eq!(result, Err(SessionError::EmptyRoster));
    assert!(!game.timer_running());
    assert_eq!(game.submit_guess("Jon Smith"), GuessOutcome::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_game_stops_timer_task() {
    let (mut game, mut rx) = new_game();
    game.load_roster(roster()).expect("roster has players");
    drop(game);

    sleep(Duration::from_secs(3)).await;
    // The only sender was owned by the game, so the channel closes once the
    // timer task is gone.
    assert!(rx.recv().await.is_none());
}
