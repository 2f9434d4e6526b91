//! Token store commands

use colored::Colorize;

use crate::cli::TokenCommands;
use crate::interfaces::cli::CliError;
use crate::session::TokenStore;

/// First four characters followed by asterisks
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "*".repeat(token.chars().count())
    } else {
        format!("{}****", visible)
    }
}

pub fn token_command(store: &TokenStore, action: TokenCommands) -> Result<(), CliError> {
    match action {
        TokenCommands::Set { token } => {
            let token = token.trim();
            if token.is_empty() {
                return Err(CliError::CommandError("token must not be empty".into()));
            }
            store.save(token)?;
            println!(
                "{} Token saved to {}",
                "✓".bold().green(),
                store.path().display().to_string().blue()
            );
        }
        TokenCommands::Clear => {
            if store.clear()? {
                println!("{} Token removed", "✓".bold().green());
            } else {
                println!("{} No token stored", "ℹ".bold().blue());
            }
        }
        TokenCommands::Show => {
            println!(
                "  {}: {}",
                "Store".cyan(),
                store.path().display().to_string().blue()
            );
            match store.load()? {
                Some(token) => println!("  {}: {}", "Token".cyan(), mask_token(&token)),
                None => println!("  {}: {}", "Token".cyan(), "(none)".dimmed()),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abcdefgh"), "abcd****");
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token(""), "");
    }

    #[test]
    fn test_set_and_clear() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("credentials.json"));

        token_command(&store, TokenCommands::Set { token: " t0k ".into() }).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("t0k"));

        token_command(&store, TokenCommands::Clear).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_set_rejects_blank() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("credentials.json"));
        assert!(token_command(&store, TokenCommands::Set { token: "  ".into() }).is_err());
    }
}
