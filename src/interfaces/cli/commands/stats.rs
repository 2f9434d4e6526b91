//! Stats command

use colored::Colorize;

use super::output::print_rows;
use crate::interfaces::cli::CliError;
use crate::manager::LinkManager;

pub async fn show_stats(manager: &mut LinkManager) -> Result<(), CliError> {
    manager.refresh_stats().await;

    let Some(stats) = manager.stats() else {
        let reason = manager.stats_error().unwrap_or("no response");
        return Err(CliError::RequestError(format!(
            "Failed to load stats: {}",
            reason
        )));
    };

    println!("{}", "Link statistics".bold().green());
    println!("  {}:   {}", "Total links".cyan(), stats.total_links);
    println!("  {}:  {}", "Total clicks".cyan(), stats.total_clicks);
    println!("  {}:  {}", "Clicks today".cyan(), stats.today_clicks);

    if !stats.top_links.is_empty() {
        println!();
        println!("{}", "Top links".bold());
        print_rows(&stats.top_links);
    }
    Ok(())
}
