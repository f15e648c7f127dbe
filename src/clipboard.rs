//! Puts the composed install command on the system clipboard.
//!
//! The native clipboard (arboard) is tried first. When that fails, for
//! example on a headless session or a stripped-down window manager, the text
//! is piped through the first external clipboard tool that works.

use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

/// How the text ended up on the clipboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CopyMethod {
    Native,
    Tool(&'static str),
}

impl fmt::Display for CopyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "system clipboard"),
            Self::Tool(name) => write!(f, "{name}"),
        }
    }
}

const FALLBACK_TOOLS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
];

pub fn copy_to_clipboard(text: &str) -> Result<CopyMethod> {
    match native_copy(text) {
        Ok(()) => return Ok(CopyMethod::Native),
        Err(e) => eprintln!("Native clipboard unavailable, trying fallback tools: {e:#}"),
    }
    fallback_copy(FALLBACK_TOOLS, text)
}

fn fallback_copy(tools: &[&'static [&'static str]], text: &str) -> Result<CopyMethod> {
    for argv in tools {
        if pipe_through_tool(argv, text).is_ok() {
            return Ok(CopyMethod::Tool(argv[0]));
        }
    }
    Err(anyhow!(
        "No clipboard tool succeeded (tried {})",
        tools
            .iter()
            .map(|argv| argv[0])
            .collect::<Vec<_>>()
            .join(", ")
    ))
}

fn native_copy(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("Could not open the system clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Could not write to the system clipboard")
}

fn pipe_through_tool(argv: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(argv[0])
        .args(&argv[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Could not start {}", argv[0]))?;
    // The write result is checked after wait() so the child is always reaped.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child
        .wait()
        .with_context(|| format!("Could not wait for {}", argv[0]))?;
    written.with_context(|| format!("Could not write to {}", argv[0]))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("{} exited with {status}", argv[0]))
    }
}
