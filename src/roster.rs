//! Persisted player roster.
//!
//! The roster is a whole-list JSON snapshot in the XDG data directory
//! (`$XDG_DATA_HOME/touchline/players.json`), rewritten on every mutation.
//! Loading never fails: a missing file is an empty roster, and a corrupt
//! file is logged, overwritten with `[]` and treated as empty.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;
use xdg::BaseDirectories;

pub use crate::game::SKIP_PLAYER_ID;

const ROSTER_FILE: &str = "players.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Decimal-string id, assigned as max existing numeric id + 1.
    pub id: String,
    pub name: String,
}

/// Next id for a new player: max numeric id + 1 as a decimal string,
/// independent of list order. Non-numeric ids count as 0, so the result
/// never collides with the `"0"` skip sentinel.
pub fn next_id(players: &[Player]) -> String {
    let max = players
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Handle on the roster file.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: Option<PathBuf>,
}

impl RosterStore {
    /// Store at the XDG data location for this program.
    pub fn open() -> Self {
        let dirs = BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"));
        let path = dirs.get_data_home().map(|home| home.join(ROSTER_FILE));
        Self { path }
    }

    /// Store at an explicit path (tests, mostly).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the roster. Fails open: any problem yields an empty list, and a
    /// corrupt file is repaired by writing `[]` back.
    pub fn load(&self) -> Vec<Player> {
        let path = match &self.path {
            Some(path) => path,
            None => return Vec::new(),
        };
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&content) {
            Ok(players) => players,
            Err(err) => {
                warn!(path = %path.display(), %err, "corrupt roster file, resetting to empty");
                if let Err(err) = self.save(&[]) {
                    warn!(%err, "failed to repair roster file");
                }
                Vec::new()
            }
        }
    }

    /// Overwrite the stored roster with `players`. Idempotent full snapshot.
    pub fn save(&self, players: &[Player]) -> anyhow::Result<()> {
        let path = self
            .path
            .as_ref()
            .context("no writable data directory for the roster")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string(players).context("encoding roster")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
