//! Whole-game runs against the scripted IO system.

use std::path::{Path, PathBuf};

use trivia_roguelite::{
    assets::Assets,
    audio::{Playlist, SilentJukebox, Track},
    constants::graphics::TARGET_SIZE,
    engine::Runner,
    io::{
        press, press_char,
        sys::scripted::{Frames, ScriptedSystem, Step},
        Action, Key,
    },
    metronome::Metronome,
    trivia::QuestionBank,
    GameState, TriviaRoguelite,
};

fn assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn play(script: Vec<Step>) -> (TriviaRoguelite, Frames, Playlist) {
    let assets = Assets::load(assets_dir()).unwrap();
    let bank = QuestionBank::load(&assets_dir().join("questions.json")).unwrap();
    let jukebox = SilentJukebox::new();
    let playlist = jukebox.playlist();
    let game = TriviaRoguelite::new(assets, bank, Box::new(jukebox), 1234);

    let (sys, run, frames) = ScriptedSystem::new(TARGET_SIZE, script).unwrap();
    let game = Runner::new(game)
        .input_tick(0.001)
        .fps(1000)
        .spawn(Metronome::new())
        .run(sys, run);
    (game, frames, playlist)
}

fn idle() -> Step {
    Step::Idle(30)
}

#[test]
fn menu_to_corridor() {
    let (game, frames, playlist) = play(vec![idle(), press(Key::Enter).into(), idle()]);
    assert_eq!(game.state(), GameState::MidLevel);
    assert!(frames.any_contains("> Play <"));
    assert!(frames.any_contains("Pick a door."));
    assert!(frames.last().unwrap()[0].contains("Lives"));
    assert_eq!(playlist.now_playing(), Some(Track::MidLevel));
}

#[test]
fn q_quits_before_the_script_ends() {
    let (game, frames, _) = play(vec![
        idle(),
        press_char('q').into(),
        press(Key::Enter).into(),
        idle(),
    ]);
    assert_eq!(game.state(), GameState::Menu);
    assert!(!frames.is_empty());
    assert!(!frames.any_contains("Pick a door."));
}

#[test]
fn ctrl_c_quits() {
    let (game, _, _) = play(vec![
        press(Key::Enter).into(),
        idle(),
        press(Key::LeftCtrl).into(),
        press_char('c').into(),
        press_char('l').into(),
        idle(),
    ]);
    assert_eq!(game.state(), GameState::MidLevel);
}

#[test]
fn into_a_trivia_room_and_out_via_lose() {
    let (game, frames, playlist) = play(vec![
        press(Key::Enter).into(),
        idle(),
        press(Key::Enter).into(),
        idle(),
        press_char('l').into(),
        idle(),
        press(Key::Enter).into(),
        idle(),
    ]);
    assert!(frames.any_contains("question 1 of 3"));
    assert!(frames.any_contains("You lose"));
    assert_eq!(game.state(), GameState::Menu);
    assert!(game.trivia().is_none());
    let history = playlist.history();
    assert!(history.contains(&Some(Track::TriviaRoom)));
    assert!(history.contains(&Some(Track::LoseScreen)));
    assert_eq!(playlist.now_playing(), Some(Track::MainMenu));
}

#[test]
fn inventory_overlays_without_music() {
    let (game, frames, playlist) = play(vec![
        press(Key::Enter).into(),
        idle(),
        press_char('i').into(),
        idle(),
    ]);
    assert_eq!(game.state(), GameState::Inventory);
    assert!(frames.any_contains("Red Potion"));
    assert_eq!(playlist.now_playing(), Some(Track::MidLevel));
}

#[test]
fn closing_the_window_stops_the_game() {
    let (game, _, _) = play(vec![Action::Closed.into(), press(Key::Enter).into()]);
    assert_eq!(game.state(), GameState::Menu);
}
