//! Render command.

use std::io::Write;

use crate::cli::icons::{success, warn};
use crate::config::Settings;
use crate::loaders::load_page;
use crate::page::host_html;

/// Fetch every section, render the page, and write it out.
pub async fn cmd_render(settings: &Settings) -> anyhow::Result<()> {
    let source = settings.content_source()?;
    let host = host_html(settings.page.as_deref(), settings.layout, &settings.shell).await?;

    let (html, report) =
        load_page(source.as_ref(), settings.layout, &settings.resources, &host).await;

    if report.sections_rendered() == 0 {
        eprintln!(
            "{} No sections rendered from {}",
            warn(),
            source.location()
        );
    }

    match settings.output {
        Some(ref path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, html).await?;
            eprintln!(
                "{} Rendered {} sections to {}",
                success(),
                report.sections_rendered(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
