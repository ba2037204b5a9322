//! lissajous - interactive Lissajous curves in the terminal.
//!
//! Keys: `A`/`a`, `B`/`b` change the frequencies, `+`/`-` the phase,
//! `q` quits. Takes no arguments; settings come from
//! `$CONFIG_DIR/lissajous/config.yaml`.

use lissajous_viz::app::App;
use lissajous_viz::config::Config;
use lissajous_viz::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    debug::init_from_env();

    let config = Config::default_path().map(Config::load_or_default).unwrap_or_default();

    match App::new(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        // Startup failures exit silently: nothing has been drawn.
        Err(e) if e.is_fatal_startup() => {
            lissajous_viz::error!("main", "{e}");
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
