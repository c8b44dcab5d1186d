use anyhow::{Context, Result, anyhow};
use console::{Style, style};

use crate::cli::{ClassArgs, GenArgs, ScoreArgs};
use crate::configtool::ConfigFile;
use crate::passgen::{self, CharacterClassSelection, PassGenError};
use crate::setclip;
use crate::strength::{self, StrengthScore};

const BAR_WIDTH: usize = 20;

/// Snapshots the command-line options over the configured defaults.
pub fn resolve_options(
    length: Option<usize>,
    classes: &ClassArgs,
    config: &ConfigFile,
) -> (CharacterClassSelection, usize) {
    let selection = classes.apply(config.classes);
    let length = length.unwrap_or(config.length);
    (selection, length)
}

/// Plain strength bar, `#` for filled cells and `-` for the rest.
pub fn strength_bar(score: StrengthScore, width: usize) -> String {
    let filled = (score.fraction() * width as f32).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

fn score_style(score: StrengthScore) -> Style {
    match score.value() {
        1 => Style::new().red(),
        2 => Style::new().color256(208),
        3 => Style::new().yellow(),
        _ => Style::new().green(),
    }
}

fn print_strength(score: StrengthScore) {
    let style = score_style(score);
    println!(
        "Strength: [{}] {}",
        style.apply_to(strength_bar(score, BAR_WIDTH)),
        style.apply_to(score)
    );
}

pub fn generate_random(args: GenArgs, config: &ConfigFile) -> Result<()> {
    let (selection, length) = resolve_options(args.length, &args.classes, config);

    let password = match passgen::generate(&selection, length) {
        Ok(password) => password,
        Err(PassGenError::EmptyPool) => {
            tracing::warn!("generation requested with no character classes");
            return Err(anyhow!("Please select at least one character type."));
        }
        Err(e) => return Err(anyhow!("Failed to generate password: {}", e)),
    };
    let score = strength::score(&selection, length);

    if args.json {
        let output = serde_json::json!({
            "password": password.as_str(),
            "length": password.len(),
            "score": score,
            "label": score.label(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Generated password: {}", style(&password).bold());
        print_strength(score);
    }

    if args.copy {
        let clear_after = args.clear_after.unwrap_or(config.clipboard_clear_secs);
        setclip::copy_to_clipboard(password.as_str(), clear_after)
            .context("Failed to copy password to clipboard")?;
        if clear_after > 0 {
            eprintln!("Password copied to clipboard, clearing in {}s.", clear_after);
        } else {
            eprintln!("Password copied to clipboard.");
        }
    }
    Ok(())
}

pub fn show_score(args: ScoreArgs, config: &ConfigFile) -> Result<()> {
    let (selection, length) = resolve_options(args.length, &args.classes, config);
    if selection.is_empty() {
        return Err(anyhow!("Please select at least one character type."));
    }

    let classes: Vec<_> = selection.enabled_classes().map(|c| c.name()).collect();
    println!("Length: {}, classes: {}", length, classes.join(", "));
    print_strength(strength::score(&selection, length));
    Ok(())
}
