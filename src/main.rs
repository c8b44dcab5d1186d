//   ____ _       _               ____
//  / ___(_)_ __ | |__   ___ _ __/ ___| ___ _ __
// | |   | | '_ \| '_ \ / _ \ '__| |  _ / _ \ '_ \
// | |___| | |_) | | | |  __/ |  | |_| |  __/ | | |
//  \____|_| .__/|_| |_|\___|_|   \____|\___|_| |_|
//         |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure password generator written in Rust.

use anyhow::{Context, Result};
use clap::Parser;

use ciphergen::cli::Cli;
use ciphergen::commands::{config, password_gen, testpass};
use ciphergen::configtool::ConfigFile;
use ciphergen::{logging, setclip};

fn main() -> Result<()> {
    logging::init();

    // Re-invoked by `copy_to_clipboard` to hold or wipe the clipboard.
    if setclip::is_daemon() {
        return setclip::run_daemon().context("Clipboard daemon failed");
    }

    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => {
            let config = ConfigFile::load().context("Failed to load config")?;
            password_gen::generate_random(args, &config)
        }
        Cli::Score(args) => {
            let config = ConfigFile::load().context("Failed to load config")?;
            password_gen::show_score(args, &config)
        }
        Cli::Testpass(args) => testpass::test_password(&args.password),
        Cli::Config(command) => config::run(command),
    }
}
