//! Terminal ray caster (default binary).
//!
//! Renders the level as two pixels per character cell and presents it with a
//! diff-based crossterm renderer. WASD moves, the mouse or arrow keys turn,
//! Esc or Ctrl-C quits.
//!
//! Usage: `tui-raycaster [--config <settings.json>] [--print-config]`

use std::path::PathBuf;
use std::process::ExitCode;

use tui_raycaster::core::ColumnRenderer;
use tui_raycaster::engine::{FrameLoop, Settings, StartupError, SystemClock};
use tui_raycaster::input::{InputConfig, TerminalInput};
use tui_raycaster::term::TerminalDisplay;

const USAGE: &str = "usage: tui-raycaster [--config <settings.json>] [--print-config]";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Cli {
    config: Option<PathBuf>,
    print_config: bool,
}

impl Cli {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut cli = Cli::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| format!("{} needs a path", arg))?;
                    cli.config = Some(PathBuf::from(path));
                }
                "--print-config" => cli.print_config = true,
                other => return Err(format!("unexpected argument '{}'", other)),
            }
        }
        Ok(cli)
    }
}

fn main() -> ExitCode {
    // The display owns stdout; logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            return ExitCode::from(2);
        }
    };

    if cli.print_config {
        println!("{}", Settings::example_json());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<StartupError>() {
                Some(startup) => startup.exit_code(),
                None => 1,
            };
            log::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path).map_err(StartupError::from)?,
        None => Settings::default(),
    };
    let world = settings.build_world().map_err(StartupError::from)?;

    let mut display = TerminalDisplay::from_terminal(settings.show_fps)
        .map_err(|e| StartupError::collaborator("display", e))?;
    if let Err(e) = display.enter() {
        let _ = display.exit();
        return Err(StartupError::collaborator("display", e).into());
    }

    let mut input = TerminalInput::new(InputConfig {
        key_release_timeout_ms: settings.key_release_timeout_ms,
        pointer_cell_scale: settings.pointer_cell_scale,
        key_turn_rate: settings.key_turn_rate,
    });
    if let Err(e) = input.enable() {
        let _ = input.disable();
        let _ = display.exit();
        return Err(StartupError::collaborator("input", e).into());
    }

    let mut frame_loop = FrameLoop::new(
        world,
        ColumnRenderer::default(),
        display,
        input,
        SystemClock::new(),
    )
    .with_frame_cap_ms(settings.frame_cap_ms());

    let result = frame_loop.run();

    // Always try to restore terminal state.
    let _ = frame_loop.input_mut().disable();
    let _ = frame_loop.display_mut().exit();

    let summary = result?;
    log::info!(
        "exited after {} frames (last FPS {})",
        summary.frames,
        summary.last_fps
    );
    Ok(())
}
