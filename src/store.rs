use crate::models::insight::AIInsight;
use crate::models::repository::Repository;
use crate::models::score::{Dimensions, DimensionsRecord, ProfileScore};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const DB_SCHEMA_VERSION: i64 = 2;

/// One persisted analysis run, newest-first in `score_history` listings.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub id: i64,
    /// Unrounded weighted sum, the basis for improvement deltas.
    pub overall: f64,
    /// `None` when the row was written by an unknown future dimension schema.
    pub dimensions: Option<Dimensions>,
    pub improvement: Option<f64>,
    pub analysis_id: String,
    pub created_at: i64,
}

/// SQLite-backed score history. Constructed explicitly and injected wherever
/// persistence is needed; the connection closes when the store drops.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Append one history row. Rows are never updated; corrections require a
    /// new analysis run.
    pub fn append_score(
        &self,
        user_id: &str,
        overall_raw: f64,
        score: &ProfileScore,
    ) -> rusqlite::Result<()> {
        let dimensions_json =
            serde_json::to_string(&DimensionsRecord::new(score.dimensions.clone()))
                .unwrap_or_else(|_| "{}".to_string());

        self.conn.execute(
            "INSERT INTO score_history (user_id, overall_score, dimensions_json, improvement, analysis_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user_id,
                overall_raw,
                dimensions_json,
                score.improvement,
                score.analysis_id,
                score.last_analyzed_at.timestamp(),
            ],
        )?;

        Ok(())
    }

    /// Unrounded overall score of the single most recently created row for
    /// this user. The autoincrement id is the creation-order authority, not
    /// the timestamp column.
    pub fn most_recent_overall(&self, user_id: &str) -> rusqlite::Result<Option<f64>> {
        self.conn
            .query_row(
                "SELECT overall_score FROM score_history WHERE user_id = ?1 ORDER BY id DESC LIMIT 1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()
    }

    /// Newest-first history for trend rendering.
    pub fn score_history(&self, user_id: &str, limit: u32) -> rusqlite::Result<Vec<ScoreRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, overall_score, dimensions_json, improvement, analysis_id, created_at
             FROM score_history WHERE user_id = ?1 ORDER BY id DESC LIMIT ?2",
        )?;

        let records = stmt
            .query_map(params![user_id, limit], |row| {
                let dimensions_json: String = row.get(2)?;
                Ok(ScoreRecord {
                    id: row.get(0)?,
                    overall: row.get(1)?,
                    dimensions: parse_dimensions(&dimensions_json),
                    improvement: row.get(3)?,
                    analysis_id: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(records)
    }

    /// Refresh the per-user repository snapshot, one row per repo name.
    pub fn upsert_repositories(
        &self,
        user_id: &str,
        repositories: &[Repository],
        refreshed_at: i64,
    ) -> rusqlite::Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for repo in repositories {
            let topics_json =
                serde_json::to_string(&repo.topics).unwrap_or_else(|_| "[]".to_string());
            tx.execute(
                "INSERT INTO repositories (user_id, repo_name, description, url, stars, language, updated_at, topics_json, forks, refreshed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                 ON CONFLICT(user_id, repo_name) DO UPDATE SET
                    description = excluded.description,
                    url = excluded.url,
                    stars = excluded.stars,
                    language = excluded.language,
                    updated_at = excluded.updated_at,
                    topics_json = excluded.topics_json,
                    forks = excluded.forks,
                    refreshed_at = excluded.refreshed_at",
                params![
                    user_id,
                    repo.name,
                    repo.description,
                    repo.url,
                    repo.stars,
                    repo.language,
                    repo.updated_at.timestamp(),
                    topics_json,
                    repo.forks,
                    refreshed_at,
                ],
            )?;
        }
        tx.commit()
    }

    pub fn repository_count(&self, user_id: &str) -> rusqlite::Result<u32> {
        self.conn.query_row(
            "SELECT COUNT(*) FROM repositories WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
    }

    pub fn save_insight(
        &self,
        user_id: &str,
        analysis_id: &str,
        insight: &AIInsight,
        created_at: i64,
    ) -> rusqlite::Result<()> {
        let insight_json = serde_json::to_string(insight).unwrap_or_else(|_| "{}".to_string());
        self.conn.execute(
            "INSERT INTO ai_recommendations (user_id, analysis_id, insight_json, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![user_id, analysis_id, insight_json, created_at],
        )?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn raw_conn(&self) -> &Connection {
        &self.conn
    }

    pub fn latest_insight(&self, user_id: &str) -> rusqlite::Result<Option<AIInsight>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT insight_json FROM ai_recommendations WHERE user_id = ?1 ORDER BY id DESC LIMIT 1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw.and_then(|json| serde_json::from_str(&json).ok()))
    }
}

fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;

    let mut version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version < 1 {
        apply_migration_1(conn)?;
        version = 1;
        conn.pragma_update(None, "user_version", version)?;
    }

    if version < 2 {
        apply_migration_2(conn)?;
        version = 2;
        conn.pragma_update(None, "user_version", version)?;
    }

    if version > DB_SCHEMA_VERSION {
        // Future schema; do not fail reads/writes for forward-compatible changes.
        conn.pragma_update(None, "user_version", version)?;
    }

    Ok(())
}

fn apply_migration_1(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS score_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            overall_score REAL NOT NULL,
            dimensions_json TEXT NOT NULL DEFAULT '{}',
            improvement REAL,
            analysis_id TEXT NOT NULL DEFAULT '',
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS repositories (
            user_id TEXT NOT NULL,
            repo_name TEXT NOT NULL,
            description TEXT,
            url TEXT NOT NULL DEFAULT '',
            stars INTEGER NOT NULL DEFAULT 0,
            language TEXT,
            updated_at INTEGER NOT NULL DEFAULT 0,
            topics_json TEXT NOT NULL DEFAULT '[]',
            forks INTEGER NOT NULL DEFAULT 0,
            refreshed_at INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (user_id, repo_name)
        );

        CREATE TABLE IF NOT EXISTS ai_recommendations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            analysis_id TEXT NOT NULL,
            insight_json TEXT NOT NULL DEFAULT '{}',
            created_at INTEGER NOT NULL
        );
        ",
    )
}

fn apply_migration_2(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_score_history_user ON score_history(user_id, id);
        CREATE INDEX IF NOT EXISTS idx_ai_recommendations_user ON ai_recommendations(user_id, id);
        ",
    )
}

fn parse_dimensions(raw: &str) -> Option<Dimensions> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;

    // Version gate first: a row written by a newer schema is expected to have
    // a shape this build cannot parse, and that is not an error worth logging
    // as corruption.
    let version = value
        .get("schema_version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);
    if version > u64::from(crate::models::score::DIMENSIONS_SCHEMA_VERSION) {
        log::warn!("history row written by newer dimensions schema v{version}, skipping payload");
        return None;
    }

    match serde_json::from_value::<DimensionsRecord>(value) {
        Ok(record) => Some(record.dimensions),
        Err(err) => {
            log::warn!("unparseable dimensions payload in history row: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::score::{DimensionKey, ScoreDimension};
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn sample_score(overall: u32, analysis_id: &str) -> ProfileScore {
        let dim = |key| ScoreDimension::new(key, f64::from(overall), "fixture");
        ProfileScore {
            overall,
            dimensions: Dimensions {
                repository_quality: dim(DimensionKey::RepositoryQuality),
                documentation: dim(DimensionKey::Documentation),
                contribution_activity: dim(DimensionKey::ContributionActivity),
                code_quality: dim(DimensionKey::CodeQuality),
                project_impact: dim(DimensionKey::ProjectImpact),
                engineering_practices: dim(DimensionKey::EngineeringPractices),
                tech_diversity: dim(DimensionKey::TechDiversity),
                collaboration: dim(DimensionKey::Collaboration),
                profile_presentation: dim(DimensionKey::ProfilePresentation),
            },
            improvement: None,
            last_analyzed_at: Utc::now(),
            analysis_id: analysis_id.to_string(),
        }
    }

    #[test]
    fn schema_initializes_with_expected_version() {
        let store = HistoryStore::open_in_memory().expect("in-memory store");
        let version: i64 = store
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .expect("schema version");
        assert_eq!(version, DB_SCHEMA_VERSION);
    }

    #[test]
    fn most_recent_reflects_creation_order() {
        let store = HistoryStore::open_in_memory().expect("in-memory store");

        assert_eq!(store.most_recent_overall("u1").expect("read"), None);

        store
            .append_score("u1", 60.0, &sample_score(60, "a1"))
            .expect("append first");
        store
            .append_score("u1", 75.0, &sample_score(75, "a2"))
            .expect("append second");
        store
            .append_score("u2", 10.0, &sample_score(10, "b1"))
            .expect("append other user");

        let latest = store.most_recent_overall("u1").expect("read").expect("some");
        assert!((latest - 75.0).abs() < 1e-9);
    }

    #[test]
    fn history_round_trips_versioned_dimensions() {
        let store = HistoryStore::open_in_memory().expect("in-memory store");
        store
            .append_score("u1", 42.5, &sample_score(43, "a1"))
            .expect("append");

        let history = store.score_history("u1", 10).expect("history");
        assert_eq!(history.len(), 1);

        let dimensions = history[0].dimensions.as_ref().expect("dimensions parse");
        assert_eq!(dimensions.repository_quality.score, 43.0);
        assert_eq!(history[0].analysis_id, "a1");
    }

    #[test]
    fn unknown_future_dimension_schema_degrades_to_none() {
        let store = HistoryStore::open_in_memory().expect("in-memory store");
        store
            .conn
            .execute(
                "INSERT INTO score_history (user_id, overall_score, dimensions_json, improvement, analysis_id, created_at)
                 VALUES ('u1', 50.0, '{\"schema_version\": 99, \"dimensions\": {}}', NULL, 'a1', 0)",
                [],
            )
            .expect("insert future row");

        let history = store.score_history("u1", 10).expect("history");
        assert_eq!(history.len(), 1);
        assert!(history[0].dimensions.is_none());
        assert!((history[0].overall - 50.0).abs() < 1e-9);
    }

    #[test]
    fn repository_upsert_replaces_by_name() {
        let store = HistoryStore::open_in_memory().expect("in-memory store");
        let mut repo = Repository {
            id: "r1".to_string(),
            name: "widget".to_string(),
            description: Some("v1".to_string()),
            url: "https://example.com/widget".to_string(),
            stars: 1,
            language: Some("Rust".to_string()),
            updated_at: Utc::now(),
            topics: BTreeSet::new(),
            forks: 0,
        };

        store
            .upsert_repositories("u1", std::slice::from_ref(&repo), 100)
            .expect("first upsert");

        repo.stars = 5;
        repo.description = Some("v2".to_string());
        store
            .upsert_repositories("u1", std::slice::from_ref(&repo), 200)
            .expect("second upsert");

        assert_eq!(store.repository_count("u1").expect("count"), 1);
        let (stars, description): (u32, String) = store
            .conn
            .query_row(
                "SELECT stars, description FROM repositories WHERE user_id = 'u1' AND repo_name = 'widget'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("read repo row");
        assert_eq!(stars, 5);
        assert_eq!(description, "v2");
    }

    #[test]
    fn insight_save_and_latest_round_trip() {
        let store = HistoryStore::open_in_memory().expect("in-memory store");
        assert!(store.latest_insight("u1").expect("read").is_none());

        let insight = AIInsight {
            summary: "first".to_string(),
            strengths: vec!["s".to_string()],
            improvements: vec!["i".to_string()],
            recommendations: Vec::new(),
        };
        store
            .save_insight("u1", "a1", &insight, 100)
            .expect("save first");

        let newer = AIInsight {
            summary: "second".to_string(),
            ..insight
        };
        store
            .save_insight("u1", "a2", &newer, 200)
            .expect("save second");

        let latest = store.latest_insight("u1").expect("read").expect("some");
        assert_eq!(latest.summary, "second");
    }
}
