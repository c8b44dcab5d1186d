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
// Clipboard handler

use std::io::{self, Read, Write};
use std::time::Duration;
use std::{env, process};

use arboard::Clipboard;
use thiserror::Error;

const DAEMON_VAR: &str = "CIPHERGEN_CLIPBOARD_DAEMON";
const DELAY_VAR: &str = "CIPHERGEN_CLIPBOARD_DELAY";

/// On X11 and Wayland the clipboard lives only as long as the process that
/// set it, so the daemon has to keep serving it.
pub const OWNS_SELECTION: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("Failed to start clipboard daemon: {0}")]
    Spawn(#[from] io::Error),
    #[error("Clipboard daemon missing environment variable {0}")]
    Env(&'static str),
    #[error("Clipboard daemon received no secret")]
    MissingSecret,
}

/// How long the daemon keeps the password around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hold {
    /// Keep it until another application takes the clipboard.
    UntilReplaced,
    /// Wipe it after the delay if still unchanged.
    For(Duration),
}

impl Hold {
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Hold::UntilReplaced
        } else {
            Hold::For(Duration::from_secs(secs))
        }
    }
}

/// True when this process was started to serve or clear the clipboard.
pub fn is_daemon() -> bool {
    env::var_os(DAEMON_VAR).is_some()
}

/// The clipboard is only wiped if it still holds what we put there.
pub fn should_clear(current: &str, secret: &str) -> bool {
    current == secret
}

/// Whether copying needs a detached helper process.
pub fn needs_daemon(clear_after_secs: u64) -> bool {
    clear_after_secs > 0 || OWNS_SELECTION
}

/// Reads the secret handed over on the daemon's stdin.
pub fn read_secret<R: Read>(mut reader: R) -> Result<String, ClipboardError> {
    let mut secret = String::new();
    reader.read_to_string(&mut secret)?;
    if secret.is_empty() {
        return Err(ClipboardError::MissingSecret);
    }
    Ok(secret)
}

fn spawn_daemon(secret: &str, delay_secs: u64) -> Result<(), ClipboardError> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_VAR, "1")
        .env(DELAY_VAR, delay_secs.to_string())
        .stdin(process::Stdio::piped())
        .stdout(process::Stdio::null())
        .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    let mut child = cmd.spawn()?;
    // Dropping the handle closes the pipe so the daemon sees EOF.
    let mut stdin = child.stdin.take().ok_or(ClipboardError::MissingSecret)?;
    stdin.write_all(secret.as_bytes())?;
    drop(stdin);

    tracing::debug!(delay_secs, "clipboard daemon started");
    Ok(())
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn serve(ctx: &mut Clipboard, secret: &str, hold: Hold) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    match hold {
        Hold::UntilReplaced => ctx.set().wait().text(secret)?,
        Hold::For(delay) => ctx
            .set()
            .wait_until(Instant::now() + delay)
            .text(secret)?,
    }
    Ok(())
}

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn serve(_ctx: &mut Clipboard, _secret: &str, hold: Hold) -> Result<(), ClipboardError> {
    // The parent already set the text and the system keeps it.
    if let Hold::For(delay) = hold {
        std::thread::sleep(delay);
    }
    Ok(())
}

/// Entry point for the detached process.
pub fn run_daemon() -> Result<(), ClipboardError> {
    let secret = read_secret(io::stdin().lock())?;
    let delay_secs = env::var(DELAY_VAR)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .ok_or(ClipboardError::Env(DELAY_VAR))?;
    let hold = Hold::from_secs(delay_secs);

    let mut ctx = Clipboard::new()?;
    serve(&mut ctx, &secret, hold)?;

    if hold == Hold::UntilReplaced {
        tracing::debug!("clipboard taken over by another application");
        return Ok(());
    }

    let current = ctx.get_text().unwrap_or_default();
    if should_clear(&current, &secret) {
        ctx.set_text("")?;
        tracing::debug!("clipboard unchanged, cleared");
    } else {
        tracing::debug!("clipboard changed, left alone");
    }
    Ok(())
}

/// Copies `secret` to the clipboard and, if `clear_after_secs` is non-zero,
/// schedules it to be wiped. `Clipboard::new` runs up front so a missing
/// display is reported here rather than in the detached process.
pub fn copy_to_clipboard(secret: &str, clear_after_secs: u64) -> Result<(), ClipboardError> {
    let mut ctx = Clipboard::new()?;
    if !OWNS_SELECTION {
        ctx.set_text(secret)?;
    }

    if needs_daemon(clear_after_secs) {
        spawn_daemon(secret, clear_after_secs)?;
    }
    Ok(())
}
