//! Inspect command.

use console::style;

use crate::cli::icons::{error, success, warn};
use crate::config::Settings;
use crate::inspect::inspect;
use crate::page::{host_html, Page};

/// Report what the host page binds under the configured layout.
pub async fn cmd_inspect(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let host = host_html(settings.page.as_deref(), settings.layout, &settings.shell).await?;
    let report = inspect(&Page::parse(&host), settings.layout);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let page_name = settings
        .page
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in page".to_string());
    println!(
        "{} ({} layout)",
        style(page_name).bold(),
        report.layout
    );

    println!("\n{}", style("Containers").bold());
    for container in &report.containers {
        let icon = if container.present { success() } else { error() };
        println!(
            "  {} {:<14} {}",
            icon,
            container.section,
            style(container.selector).dim()
        );
    }

    println!("\n{}", style("Behaviors").bold());
    match report.nav_links {
        Some(links) => println!("  {} nav menu ({} links)", success(), links),
        None => println!("  {} nav menu", warn()),
    }
    let flag = |present: bool| if present { success() } else { warn() };
    println!("  {} back to top", flag(report.back_to_top));
    println!(
        "  {} scroll animations ({} elements)",
        flag(report.animated_elements > 0),
        report.animated_elements
    );
    println!("  {} citation copy", flag(report.citation));

    Ok(())
}
