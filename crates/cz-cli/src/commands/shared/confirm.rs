use std::io::{BufRead, Write};

use crate::cli::GlobalFlags;
use crate::ui;

/// Ask before a destructive action. `--yes` skips the prompt; without a
/// terminal to ask on, the action is refused.
pub fn confirm(prompt: &str, flags: &GlobalFlags) -> anyhow::Result<bool> {
    if flags.yes {
        return Ok(true);
    }
    if !ui::prefs().interactive {
        anyhow::bail!("{prompt} Re-run with --yes to confirm.");
    }
    let stdin = std::io::stdin();
    ask(prompt, &mut stdin.lock(), &mut std::io::stderr())
}

fn ask<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> anyhow::Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::ask;

    fn answer(text: &str) -> bool {
        let mut out = Vec::new();
        ask("Are you sure?", &mut Cursor::new(text.as_bytes()), &mut out).expect("prompt")
    }

    #[test]
    fn yes_answers_confirm() {
        assert!(answer("y\n"));
        assert!(answer("YES\n"));
    }

    #[test]
    fn anything_else_declines() {
        assert!(!answer("\n"));
        assert!(!answer("no\n"));
        assert!(!answer(""));
    }

    #[test]
    fn prompt_shows_default() {
        let mut out = Vec::new();
        ask("Delete?", &mut Cursor::new(&b"n\n"[..]), &mut out).expect("prompt");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Delete? [y/N] ");
    }
}
