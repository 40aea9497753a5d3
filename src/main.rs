use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::File,
    io::{stdout, Stdout},
    thread,
    time::Duration,
};

use blockfall::audio::Speaker;
use blockfall::config::Args;
use blockfall::constants::MAX_EVENTS_PER_TICK;
use blockfall::game::{Game, TickOutcome};
use blockfall::input::{apply_actions, map_key_event, Input, KeyAction};
use blockfall::ui::{ui, UiOptions};

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut game = match args.seed {
        Some(seed) => Game::seeded(seed),
        None => Game::from_entropy(),
    };
    let mut speaker = Speaker::open(args.mute);
    let options = UiOptions {
        classic_colors: args.classic_colors,
        hold_on_game_over: args.hold_on_game_over,
    };
    log::info!(
        "starting: tick {:?}, seed {:?}, sound {}",
        args.tick_interval(),
        args.seed,
        if speaker.is_silent() { "off" } else { "on" }
    );

    // Setup terminal
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = terminal::disable_raw_mode();
        return Err(err).context("failed to enter the alternate screen");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
            return Err(err).context("failed to set up the terminal");
        }
    };

    let result = run(&mut terminal, &mut game, &mut speaker, &args, &options);

    // Cleanup, even when the loop failed
    let restored = restore_terminal(&mut terminal);

    // the loop error wins over a cleanup error
    if let Err(err) = result {
        log::error!("game loop failed: {err:#}");
        if let Err(cleanup) = restored {
            log::error!("failed to restore the terminal: {cleanup:#}");
        }
        return Err(err);
    }
    restored
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    terminal::disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave the alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let mut builder = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        // stderr would draw over the game, so stay quiet unless asked
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };

    builder.try_init().context("failed to initialize logging")
}

fn run(
    terminal: &mut Tui,
    game: &mut Game,
    speaker: &mut Speaker,
    args: &Args,
    options: &UiOptions,
) -> Result<()> {
    let tick = args.tick_interval();

    loop {
        drain_events(game)?;

        match game.tick(speaker) {
            TickOutcome::Continue => {}
            TickOutcome::Quit => {
                log::info!("quit requested");
                return Ok(());
            }
            TickOutcome::GameOver => {
                terminal.draw(|f| ui(f, &game.snapshot(), options))?;
                if !options.hold_on_game_over || !wait_for_restart()? {
                    return Ok(());
                }
                game.reset();
            }
        }

        terminal.draw(|f| ui(f, &game.snapshot(), options))?;
        thread::sleep(tick);
    }
}

/// Reads whatever input is already waiting, without blocking, and applies
/// it to the game in arrival order.
fn drain_events(game: &mut Game) -> Result<()> {
    let mut actions = Vec::new();

    for _ in 0..MAX_EVENTS_PER_TICK {
        if !event::poll(Duration::ZERO)? {
            break;
        }
        if let Event::Key(key) = event::read()? {
            actions.extend(map_key_event(key));
        }
    }

    apply_actions(game, actions);
    Ok(())
}

/// Blocks on the game-over screen. True means restart, false means quit.
fn wait_for_restart() -> Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            match map_key_event(key) {
                Some(KeyAction::Restart) => return Ok(true),
                Some(KeyAction::Game(Input::Quit)) => return Ok(false),
                _ => {}
            }
        }
    }
}
