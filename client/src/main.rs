mod audio;
mod bridge;
mod config;
mod sprites;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use snake_common::config::Validate;
use snake_common::games::SessionRng;
use snake_common::games::snake::{SnakeGameState, SnakeSession};
use snake_common::logger::init_logger;
use snake_common::{log, log_warn};
use tokio::sync::mpsc;

use audio::ClientAudioPlayer;
use bridge::{ChannelInputSource, FrameRenderer, log_session_event};
use config::get_config_manager;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser, Debug)]
#[command(name = "snake_client", version, about = "Classic Snake")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the configured tick interval
    #[arg(long)]
    tick_interval_ms: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(Some("snake".to_string()));

    let mut config = get_config_manager(args.config.as_deref()).get_or_create_config()?;
    if let Some(tick_interval_ms) = args.tick_interval_ms {
        config.game.tick_interval_ms = tick_interval_ms;
        config.game.validate()?;
    }

    let field_size = config.game.field_size();
    let shared_state = SharedState::new();
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let game_state = SnakeGameState::new(config.game.clone());
    let rng = SessionRng::from_optional_seed(args.seed);
    let audio_config = config.audio.clone();
    let resources_dir = PathBuf::from(&config.display.resources_dir);
    let session_shared_state = shared_state.clone();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log_warn!("Failed to start game runtime: {}", e);
                session_shared_state.set_should_close();
                return;
            }
        };

        let session = SnakeSession::new(
            game_state,
            rng,
            ChannelInputSource::new(input_rx),
            FrameRenderer::new(session_shared_state.clone()),
            ClientAudioPlayer::new(session_shared_state.clone(), audio_config, resources_dir),
        );
        let event_shared_state = session_shared_state.clone();
        let session =
            session.with_event_hook(move |event| log_session_event(&event_shared_state, event));
        let summary = runtime.block_on(session.run());
        log!("Best score this session: {}", summary.best_score);
        session_shared_state.set_should_close();
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(SnakeApp::window_size(&config.display, &field_size))
            .with_resizable(false)
            .with_title("Snake"),
        ..Default::default()
    };

    let display = config.display.clone();
    eframe::run_native(
        "Snake",
        options,
        Box::new(move |cc| {
            Ok(Box::new(SnakeApp::new(
                cc,
                shared_state,
                input_tx,
                display,
                field_size,
            )))
        }),
    )?;

    Ok(())
}
