use clap::{Args, Parser, Subcommand};

use crate::passgen::{CharacterClass, CharacterClassSelection, MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Parser)]
#[command(name = "ciphergen")]
#[command(about = "Generate secure random passwords", long_about = None)]
pub enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Show the strength score a set of options would get
    Score(ScoreArgs),

    /// Test password strength of an existing password
    Testpass(TestpassArgs),

    /// Manage default options
    #[command(subcommand)]
    Config(ConfigCommand),
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid length", s))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(format!(
            "length must be between {} and {}",
            MIN_LENGTH, MAX_LENGTH
        ));
    }
    Ok(length)
}

#[derive(Debug, Clone, Default, Args)]
pub struct ClassArgs {
    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    pub no_special: bool,
}

impl ClassArgs {
    /// Switches off whatever the flags exclude from `base`.
    pub fn apply(&self, base: CharacterClassSelection) -> CharacterClassSelection {
        let mut selection = base;
        for (class, excluded) in [
            (CharacterClass::Uppercase, self.no_uppercase),
            (CharacterClass::Lowercase, self.no_lowercase),
            (CharacterClass::Digits, self.no_numbers),
            (CharacterClass::Symbols, self.no_special),
        ] {
            if excluded {
                selection = selection.with(class, false);
            }
        }
        selection
    }
}

#[derive(Debug, Args)]
pub struct GenArgs {
    /// Length of the password (8-64, default from config)
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    #[command(flatten)]
    pub classes: ClassArgs,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    pub copy: bool,

    /// Seconds before the clipboard is cleared, 0 to keep it
    #[arg(long)]
    pub clear_after: Option<u64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Length of the password (8-64, default from config)
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    #[command(flatten)]
    pub classes: ClassArgs,
}

#[derive(Debug, Args)]
pub struct TestpassArgs {
    /// Password to test
    pub password: String,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gen_flags() {
        let cli = Cli::try_parse_from(["ciphergen", "gen", "-l", "24", "--no-lowercase", "-c"])
            .unwrap();
        let Cli::Gen(args) = cli else {
            panic!("expected gen command");
        };
        assert_eq!(args.length, Some(24));
        assert!(args.copy);
        assert_eq!(
            args.classes.apply(CharacterClassSelection::all()),
            CharacterClassSelection::all().with(CharacterClass::Lowercase, false)
        );
    }

    #[test]
    fn test_length_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["ciphergen", "gen", "-l", "7"]).is_err());
        assert!(Cli::try_parse_from(["ciphergen", "gen", "-l", "65"]).is_err());
        assert!(Cli::try_parse_from(["ciphergen", "gen", "-l", "-3"]).is_err());
        assert!(Cli::try_parse_from(["ciphergen", "score", "-l", "64"]).is_ok());
    }

    #[test]
    fn test_flags_only_remove_classes() {
        let flags = ClassArgs {
            no_uppercase: true,
            no_special: true,
            ..Default::default()
        };
        let base = CharacterClassSelection::only(CharacterClass::Digits);
        assert_eq!(flags.apply(base), base);
        assert_eq!(
            flags.apply(CharacterClassSelection::all()),
            CharacterClassSelection::none()
                .with(CharacterClass::Lowercase, true)
                .with(CharacterClass::Digits, true)
        );
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["ciphergen", "config", "init", "--force"]).unwrap();
        assert!(matches!(cli, Cli::Config(ConfigCommand::Init { force: true })));
    }
}
