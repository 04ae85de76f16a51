//! Citation copy button and the clipboards it writes to.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use base64::Engine;
use thiserror::Error;

use crate::page::Page;

pub const BUTTON_SELECTOR: &str = "#copyBibtexBtn";
pub const CODE_SELECTOR: &str = "#bibtexCode";

pub const COPIED_LABEL: &str = "Copied!";

/// How long the "Copied!" feedback stays before the label reverts.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Clipboard programs tried in order, with the arguments that make them
/// read the clipboard contents from stdin.
const PROGRAMS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("pbcopy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Errors that can occur while writing to a clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard program found (tried {0})")]
    Unavailable(String),

    #[error("{program} exited with {status}")]
    Failed { program: String, status: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something text can be copied to.
pub trait Clipboard {
    fn name(&self) -> &str;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, through whichever clipboard program is on `PATH`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: Option<(PathBuf, &'static [&'static str])>,
}

impl CommandClipboard {
    /// Look up the first available clipboard program.
    pub fn detect() -> Self {
        let program = PROGRAMS.iter().find_map(|(name, args)| {
            which::which(name).ok().map(|path| (path, *args))
        });
        if let Some((path, _)) = &program {
            tracing::debug!("Using clipboard program {}", path.display());
        }
        Self { program }
    }

    pub fn is_available(&self) -> bool {
        self.program.is_some()
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        match &self.program {
            Some((path, _)) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("clipboard"),
            None => "clipboard",
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let Some((path, args)) = &self.program else {
            let tried: Vec<&str> = PROGRAMS.iter().map(|(name, _)| *name).collect();
            return Err(ClipboardError::Unavailable(tried.join(", ")));
        };

        let mut child = Command::new(path)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed {
                program: path.display().to_string(),
                status: status.to_string(),
            })
        }
    }
}

/// Copies by emitting an OSC 52 escape sequence, which most terminal
/// emulators forward to the system clipboard.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{}\x07", encoded)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Which clipboard a click ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    Failed,
}

/// The citation copy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButton {
    text: String,
    original_label: String,
    label: String,
    copied: bool,
}

impl CopyButton {
    /// Bind to the page's citation block, if it has both the button and
    /// the code element.
    pub fn bind(page: &Page) -> Option<Self> {
        let text = page.text(CODE_SELECTOR)?;
        let label = page.text(BUTTON_SELECTOR)?.trim().to_string();
        Some(Self {
            text,
            original_label: label.clone(),
            label,
            copied: false,
        })
    }

    /// The text a click copies.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Copy the citation, trying `primary` then `fallback`.
    ///
    /// On success the label reads "Copied!" until [`CopyButton::restore`]
    /// is called, [`FEEDBACK_DURATION`] later. When both clipboards fail
    /// the label is left as it was.
    pub fn click(
        &mut self,
        primary: &mut dyn Clipboard,
        fallback: &mut dyn Clipboard,
    ) -> CopyOutcome {
        match primary.write_text(&self.text) {
            Ok(()) => {
                self.label = COPIED_LABEL.to_string();
                self.copied = true;
                return CopyOutcome::Primary;
            }
            Err(e) => tracing::error!("Failed to copy text via {}: {}", primary.name(), e),
        }

        match fallback.write_text(&self.text) {
            Ok(()) => {
                self.label = COPIED_LABEL.to_string();
                CopyOutcome::Fallback
            }
            Err(e) => {
                tracing::error!("Fallback copy via {} failed: {}", fallback.name(), e);
                CopyOutcome::Failed
            }
        }
    }

    /// Revert the feedback label and copied state.
    pub fn restore(&mut self) {
        self.label = self.original_label.clone();
        self.copied = false;
    }
}
