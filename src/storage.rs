use crate::error::AppResult;
use crate::model::{BulletinBlock, BulletinBoard, LeagueDoc, Ledger, Suggestion};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use std::path::PathBuf;
use tokio::fs;

const LEAGUE_FILE: &str = "league.json";
const SUGGESTIONS_FILE: &str = "suggestions.json";
const BULLETIN_FILE: &str = "bulletin.json";
const LEDGER_FILE: &str = "ledger.json";

/// Whole-file JSON snapshots under one data directory. Reads of missing or
/// unparseable files yield the documented defaults; writes replace the file.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DocumentStore { dir: dir.into() }
    }

    pub async fn league(&self) -> LeagueDoc {
        self.read_json(LEAGUE_FILE).await.unwrap_or_default()
    }

    /// # Errors
    ///
    /// Will return `Err` if the snapshot cannot be written.
    pub async fn write_league(&self, doc: &LeagueDoc) -> AppResult<()> {
        self.write_json(LEAGUE_FILE, doc).await
    }

    pub async fn suggestions(&self) -> Vec<Suggestion> {
        self.read_json(SUGGESTIONS_FILE).await.unwrap_or_default()
    }

    /// # Errors
    ///
    /// Will return `Err` if the snapshot cannot be written.
    pub async fn write_suggestions(&self, list: &[Suggestion]) -> AppResult<()> {
        self.write_json(SUGGESTIONS_FILE, &list).await
    }

    pub async fn bulletin(&self) -> BulletinBoard {
        let file: BulletinFile = self.read_json(BULLETIN_FILE).await.unwrap_or_default();
        let order = file
            .order
            .unwrap_or_else(|| file.blocks.iter().map(|b| b.id.clone()).collect());
        BulletinBoard {
            blocks: file.blocks,
            order,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the snapshot cannot be written.
    pub async fn write_bulletin(&self, board: &BulletinBoard) -> AppResult<()> {
        self.write_json(BULLETIN_FILE, board).await
    }

    pub async fn ledger(&self) -> Ledger {
        self.read_json(LEDGER_FILE).await.unwrap_or_default()
    }

    /// # Errors
    ///
    /// Will return `Err` if the snapshot cannot be written.
    pub async fn write_ledger(&self, ledger: &Ledger) -> AppResult<()> {
        self.write_json(LEDGER_FILE, ledger).await
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let raw = fs::read(self.dir.join(file)).await.ok()?;
        match serde_json::from_slice(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("unreadable document {file}, serving defaults: {e}");
                None
            }
        }
    }

    async fn write_json<T: Serialize>(&self, file: &str, value: &T) -> AppResult<()> {
        fs::create_dir_all(&self.dir).await?;
        let body = serde_json::to_vec_pretty(value)?;
        fs::write(self.dir.join(file), body).await?;
        Ok(())
    }
}

/// On-disk bulletin shape. A file without an `order` array gets one rebuilt
/// from block insertion order.
#[derive(Debug, Default, Deserialize)]
struct BulletinFile {
    #[serde(default)]
    blocks: Vec<BulletinBlock>,
    #[serde(default)]
    order: Option<Vec<String>>,
}
