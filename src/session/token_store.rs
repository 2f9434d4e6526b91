//! Bearer token persistence
//!
//! The store is a small JSON object file; the token lives under
//! [`TOKEN_KEY`]. Unknown keys already in the file are preserved on save.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::{LinkdeckError, Result};

/// Key of the token inside the store file
pub const TOKEN_KEY: &str = "api_token";

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, serde_json::Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            LinkdeckError::token_store(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            LinkdeckError::token_store(format!("cannot parse {}: {}", self.path.display(), e))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, serde_json::Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LinkdeckError::token_store(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| LinkdeckError::token_store(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            LinkdeckError::token_store(format!("cannot write {}: {}", self.path.display(), e))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                warn!("Failed to restrict token file permissions: {}", e);
            }
        }
        Ok(())
    }

    /// Stored token, `None` when absent or empty
    pub fn load(&self) -> Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map
            .get(TOKEN_KEY)
            .and_then(|v| v.as_str())
            .filter(|t| !t.is_empty())
            .map(str::to_string))
    }

    pub fn save(&self, token: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(TOKEN_KEY.to_string(), serde_json::Value::from(token));
        self.write_map(&map)?;
        debug!("Token saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the token. Returns whether one was stored.
    pub fn clear(&self) -> Result<bool> {
        let mut map = self.read_map()?;
        let removed = map.remove(TOKEN_KEY).is_some();
        if removed {
            self.write_map(&map)?;
            info!("Token removed from {}", self.path.display());
        }
        Ok(removed)
    }
}

/// Where the session token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` flag or `LINKDECK_TOKEN`
    Explicit,
    Prompt,
    Store,
    /// Nothing anywhere; requests go out with an empty bearer
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub token: String,
    pub source: TokenSource,
}

/// Pick the session token.
///
/// Order: explicit value, then `prompt` (called with the stored token, if
/// any; `Ok(None)` or a blank answer keeps the stored one), then the store.
/// A token from the first two sources is written back when it differs from
/// the stored one. A failing write is logged, not fatal.
pub fn resolve_token<P>(
    explicit: Option<&str>,
    store: &TokenStore,
    prompt: P,
) -> Result<ResolvedToken>
where
    P: FnOnce(Option<&str>) -> Result<Option<String>>,
{
    let stored = match store.load() {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Ignoring unreadable token store: {}", e);
            None
        }
    };

    let fresh = match explicit.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => Some((token.to_string(), TokenSource::Explicit)),
        None => prompt(stored.as_deref())?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(|t| (t, TokenSource::Prompt)),
    };

    let resolved = match (fresh, stored) {
        (Some((token, source)), stored) => {
            if stored.as_deref() != Some(token.as_str())
                && let Err(e) = store.save(&token)
            {
                warn!("Failed to persist token: {}", e);
            }
            ResolvedToken { token, source }
        }
        (None, Some(token)) => ResolvedToken {
            token,
            source: TokenSource::Store,
        },
        (None, None) => ResolvedToken {
            token: String::new(),
            source: TokenSource::Missing,
        },
    };

    debug!("Using token from {:?}", resolved.source);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TokenStore {
        TokenStore::new(dir.path().join("nested").join("credentials.json"))
    }

    fn no_prompt(_: Option<&str>) -> Result<Option<String>> {
        Ok(None)
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("secret").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("secret"));

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"api_token\""));
    }

    #[test]
    fn test_save_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("credentials.json"));
        fs::write(store.path(), r#"{"theme":"dark"}"#).unwrap();
        store.save("secret").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("theme"));
        assert!(raw.contains("secret"));
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.clear().unwrap());
        store.save("secret").unwrap();
        assert!(store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_token_store_error() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("credentials.json"));
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(LinkdeckError::TokenStore(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("secret").unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_explicit_wins_and_is_persisted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("old").unwrap();

        let resolved = resolve_token(Some("new"), &store, |_| {
            panic!("prompt must not run when a token is given")
        })
        .unwrap();
        assert_eq!(resolved.token, "new");
        assert_eq!(resolved.source, TokenSource::Explicit);
        assert_eq!(store.load().unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_blank_prompt_keeps_stored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("kept").unwrap();

        let resolved = resolve_token(None, &store, |stored| {
            assert_eq!(stored, Some("kept"));
            Ok(Some("   ".to_string()))
        })
        .unwrap();
        assert_eq!(resolved.token, "kept");
        assert_eq!(resolved.source, TokenSource::Store);
    }

    #[test]
    fn test_prompt_answer_is_persisted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let resolved = resolve_token(None, &store, |_| Ok(Some("typed".into()))).unwrap();
        assert_eq!(resolved.source, TokenSource::Prompt);
        assert_eq!(store.load().unwrap().as_deref(), Some("typed"));
    }

    #[test]
    fn test_nothing_anywhere() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_token(None, &store_in(&dir), no_prompt).unwrap();
        assert_eq!(resolved.source, TokenSource::Missing);
        assert!(resolved.token.is_empty());
    }
}
