use std::io;
use std::process::ExitCode;

use gordle::cli::{CliInterface, parse_cli};
use gordle::game_state::{GameInterface, game_loop};
use gordle::logging::{self, LogTarget};
use gordle::tui::TuiInterface;
use gordle::wordbank::resolve_wordbank;
use gordle::{debug_log, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(if cli.tui {
        LogTarget::File
    } else {
        LogTarget::Stderr
    });

    let (wordbank, source) = match resolve_wordbank(cli.dictionary.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Failed to load dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };
    info_log!("Loaded {} words from {}", wordbank.len(), source);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let settings = cli.settings();
    debug_log!("Settings: {:?}", settings);

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let cli_interface = CliInterface::new(io::stdin().lock(), io::stdout());
        Box::new(cli_interface.with_glyphs(cli.glyphs.glyphs()))
    };

    let result = game_loop(&wordbank, &settings, &mut rng, interface.as_mut());
    // Restore the terminal before printing anything else.
    drop(interface);

    match result {
        Ok(outcomes) => {
            info_log!("Session finished after {} rounds", outcomes.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
