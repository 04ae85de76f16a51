//! Citation copy command.

use std::time::Duration;

use console::Term;

use crate::cli::icons::success;
use crate::config::Settings;
use crate::page::{host_html, Page};
use crate::ui::clipboard::FEEDBACK_DURATION;
use crate::ui::{Clipboard, CommandClipboard, CopyButton, CopyOutcome, Osc52Clipboard};

/// Copy the host page's citation, falling back to OSC 52 when no
/// clipboard program works.
pub async fn cmd_copy_citation(settings: &Settings) -> anyhow::Result<()> {
    let host = host_html(settings.page.as_deref(), settings.layout, &settings.shell).await?;

    let Some(mut button) = CopyButton::bind(&Page::parse(&host)) else {
        anyhow::bail!("Page has no citation block (#copyBibtexBtn and #bibtexCode)");
    };

    let mut primary = CommandClipboard::detect();
    let mut fallback = Osc52Clipboard::stdout();

    let via = match button.click(&mut primary, &mut fallback) {
        CopyOutcome::Primary => primary.name().to_string(),
        CopyOutcome::Fallback => "terminal".to_string(),
        CopyOutcome::Failed => anyhow::bail!("Failed to copy citation"),
    };

    show_feedback(&mut button, &via, &Term::stderr(), FEEDBACK_DURATION).await?;
    Ok(())
}

/// Print the button's feedback label, then revert it. On a terminal the
/// label is held for `hold` first, the way the page keeps "Copied!" up.
async fn show_feedback(
    button: &mut CopyButton,
    via: &str,
    term: &Term,
    hold: Duration,
) -> std::io::Result<()> {
    term.write_line(&format!("{} {} (via {})", success(), button.label(), via))?;
    if term.is_term() {
        tokio::time::sleep(hold).await;
    }
    button.restore();
    tracing::debug!("Copy button label restored to {:?}", button.label());
    Ok(())
}
