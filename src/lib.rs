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

pub mod cli;
pub mod commands;
pub mod configtool;
pub mod logging;
pub mod passgen;
pub mod setclip;
pub mod strength;

pub use passgen::{
    CharacterClass, CharacterClassSelection, CharacterPool, GeneratedPassword, PassGenError,
    generate,
};
pub use strength::{StrengthScore, score};
