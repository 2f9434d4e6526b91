//! List links command

use colored::Colorize;

use super::output::{pagination_line, print_rows};
use crate::interfaces::cli::CliError;
use crate::manager::LinkManager;
use crate::view::{NO_DATA, TableView};

pub async fn list_links(
    manager: &mut LinkManager,
    page: u32,
    search: Option<&str>,
) -> Result<(), CliError> {
    if let Some(query) = search {
        manager.set_query(query);
    }
    manager.load(page).await;

    let heading = match manager.session().mode().query() {
        Some(q) => format!("Search results for \"{}\":", q),
        None => "Short link list:".to_string(),
    };

    match manager.table() {
        TableView::Error(msg) => return Err(CliError::RequestError(msg.clone())),
        TableView::Loading => {
            return Err(CliError::CommandError("list request did not finish".into()));
        }
        TableView::Empty => {
            println!("{} {}", "ℹ".bold().blue(), NO_DATA);
        }
        TableView::Rows(rows) => {
            println!("{}", heading.bold().green());
            println!();
            print_rows(rows);
        }
    }

    println!();
    if let Some(line) = pagination_line(manager.pagination()) {
        println!("{}", line);
    }
    println!(
        "{} Page {} of {}, {} links in total",
        "ℹ".bold().blue(),
        manager.current_page(),
        manager.total_pages().max(1),
        manager.total().to_string().green()
    );
    Ok(())
}
