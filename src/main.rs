//! rotqr main — parse, load settings, dispatch, map failures to exit codes.
use clap::Parser; // trait import enables RotqrCli::parse()
use colored::Colorize;

use rotqr::cli::{Command, RotqrCli};
use rotqr::commands::{self, QrOpts};
use rotqr::config::Settings;
use rotqr::core::wire::ErrorBody;
use rotqr::core::{Direction, MatrixError};
use rotqr::debug_log;

fn main() {
    let args = RotqrCli::parse();
    if args.debug {
        rotqr::core::debug::force_enable();
    }
    let json_errors = args.json_errors;

    if let Err(err) = dispatch(args) {
        let fault = err.downcast_ref::<MatrixError>();
        if json_errors {
            let body = ErrorBody {
                error: format!("{err:#}"),
                kind: fault.map(|e| e.kind().to_string()),
            };
            eprintln!("{}", serde_json::to_string(&body).unwrap_or_else(|_| format!("{err:#}")));
        } else {
            eprintln!("{} {err:#}", "error:".red().bold());
        }
        // 2 = caller fault (bad payload/shape), 1 = internal
        let code = match fault {
            Some(e) if e.is_input_fault() => 2,
            Some(_) => 1,
            None if err.downcast_ref::<serde_json::Error>().is_some() => 2,
            None => 1,
        };
        std::process::exit(code);
    }
}

fn dispatch(args: RotqrCli) -> anyhow::Result<()> {
    let settings = Settings::load(&args.config)?;
    debug_log!("settings: {settings:?}");

    match args.cmd {
        Command::Qr { input, out, pretty, verify, stats, no_rotate, clockwise } => {
            let direction = direction_of(clockwise);
            commands::qr_main(
                QrOpts { input, out, pretty, verify, stats, no_rotate, direction },
                &settings,
            )
        }
        Command::Rotate { input, out, pretty, clockwise } => {
            commands::rotate_main(input, out, pretty, direction_of(clockwise), &settings)
        }
        Command::Stats { input, pretty } => commands::stats_main(input, pretty, &settings),
    }
}

fn direction_of(clockwise: bool) -> Direction {
    if clockwise {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    }
}
