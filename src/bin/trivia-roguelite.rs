use std::process::ExitCode;

use clap::Parser;

use trivia_roguelite::{
    assets::Assets,
    audio::{Jukebox, SilentJukebox},
    config::{Args, Config},
    engine::Runner,
    logging,
    metronome::Metronome,
    trivia::QuestionBank,
    TriviaRoguelite,
};

fn jukebox(config: &Config) -> Box<dyn Jukebox> {
    if config.mute {
        return Box::new(SilentJukebox::new());
    }
    #[cfg(feature = "audio_rodio")]
    {
        match trivia_roguelite::audio::RodioJukebox::new(config.assets.clone()) {
            Ok(jb) => return Box::new(jb),
            Err(e) => tracing::warn!(error = %e, "no music this time"),
        }
    }
    Box::new(SilentJukebox::new())
}

fn run(config: Config) -> trivia_roguelite::Result<()> {
    let assets = Assets::load(&config.assets)?;
    let bank = QuestionBank::load(&config.questions)?;
    let game = TriviaRoguelite::new(assets, bank, jukebox(&config), config.seed);

    let game = Runner::new(game)
        .input_tick(config.input_tick())
        .fps(config.fps)
        .spawn(Metronome::new())
        .load_run()?;
    tracing::info!(score = game.player().score, state = %game.state(), "game over");
    Ok(())
}

fn main() -> ExitCode {
    let config = Args::parse().resolve();
    if let Err(e) = logging::init(&config.log_file) {
        eprintln!("warning: {}", e);
    }
    tracing::info!(?config, "starting");

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("trivia-roguelite: {}", e);
            ExitCode::FAILURE
        }
    }
}
