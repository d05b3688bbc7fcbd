//! SQLite persistence gateway (embedded, no external dependencies)
//!
//! Every method runs a single statement against the pool. Constraint checks
//! (required columns, enum labels, unique email) are left to the store.

use anyhow::{Context, Result};
use confdesk_types::{
    Article, Conference, Id, NewArticle, NewConference, NewUser, UnknownVariant, User,
    DEFAULT_ARTICLE_VERSION,
};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        info!("Opening SQLite database at: {}", database_path);

        if let Some(parent) = Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        info!("Connection has been established successfully");

        Self::from_pool(pool).await
    }

    /// Private in-memory store.
    ///
    /// Holds exactly one connection that never expires, since each SQLite
    /// memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        Self::run_migrations(&pool)
            .await
            .context("Failed to create database schema")?;
        info!("Database schema synchronized");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Reference columns are plain integers: no foreign keys, no cascade.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL CHECK (length(username) > 0),
                email TEXT NOT NULL UNIQUE CHECK (length(email) > 0),
                user_type TEXT NOT NULL
                    CHECK (user_type IN ('organizer', 'author', 'reviewer'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Conferences (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                organizer_id INTEGER NOT NULL,
                name TEXT NOT NULL CHECK (length(name) > 0)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                author_id INTEGER NOT NULL,
                conference_id INTEGER NOT NULL,
                title TEXT NOT NULL CHECK (length(title) > 0),
                content TEXT NOT NULL CHECK (length(content) > 0),
                version INTEGER NOT NULL DEFAULT 1,
                status TEXT NOT NULL DEFAULT 'pending'
                    CHECK (status IN ('pending', 'approved', 'rejected'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    // User operations
    pub async fn create_user(&self, user: &NewUser) -> Result<Id> {
        let result = sqlx::query(
            r#"
            INSERT INTO Users (username, email, user_type)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.user_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| insert_failed("Users", e))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_user(&self, id: Id) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, user_type FROM Users WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::try_from).transpose()?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, user_type FROM Users WHERE email = ?1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::try_from).transpose()?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, user_type FROM Users ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<_, _>>()?)
    }

    // Conference operations
    pub async fn create_conference(&self, conference: &NewConference) -> Result<Id> {
        let result = sqlx::query(
            r#"
            INSERT INTO Conferences (organizer_id, name) VALUES (?1, ?2)
            "#,
        )
        .bind(conference.organizer_id)
        .bind(&conference.name)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_failed("Conferences", e))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn list_conferences(&self) -> Result<Vec<Conference>> {
        let rows: Vec<ConferenceRow> = sqlx::query_as(
            r#"
            SELECT id, organizer_id, name FROM Conferences ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Conference::from).collect())
    }

    /// Returns `false` when no conference had this id.
    ///
    /// Articles that reference the conference are left in place.
    pub async fn delete_conference(&self, id: Id) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM Conferences WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // Article operations
    pub async fn create_article(&self, article: &NewArticle) -> Result<Id> {
        let version = article.version.unwrap_or(DEFAULT_ARTICLE_VERSION);
        let status = article.status.unwrap_or_default();

        let result = sqlx::query(
            r#"
            INSERT INTO Articles (author_id, conference_id, title, content, version, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(article.author_id)
        .bind(article.conference_id)
        .bind(&article.title)
        .bind(&article.content)
        .bind(version)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| insert_failed("Articles", e))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_article(&self, id: Id) -> Result<Option<Article>> {
        let row: Option<ArticleRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, conference_id, title, content, version, status
            FROM Articles WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Article::try_from).transpose()?)
    }

    pub async fn list_articles_by_conference(&self, conference_id: Id) -> Result<Vec<Article>> {
        let rows: Vec<ArticleRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, conference_id, title, content, version, status
            FROM Articles WHERE conference_id = ?1
            ORDER BY id
            "#,
        )
        .bind(conference_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<_, _>>()?)
    }
}

fn insert_failed(table: &'static str, err: sqlx::Error) -> anyhow::Error {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            warn!(table, "Unique constraint violated: {}", db_err.message());
        }
    }
    anyhow::Error::new(err).context(format!("Failed to insert into {}", table))
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Id,
    username: String,
    email: String,
    user_type: String,
}

impl TryFrom<UserRow> for User {
    type Error = UnknownVariant;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: r.id,
            username: r.username,
            email: r.email,
            user_type: r.user_type.parse()?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ConferenceRow {
    id: Id,
    organizer_id: Id,
    name: String,
}

impl From<ConferenceRow> for Conference {
    fn from(r: ConferenceRow) -> Self {
        Conference {
            id: r.id,
            organizer_id: r.organizer_id,
            name: r.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: Id,
    author_id: Id,
    conference_id: Id,
    title: String,
    content: String,
    version: i64,
    status: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = UnknownVariant;

    fn try_from(r: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: r.id,
            author_id: r.author_id,
            conference_id: r.conference_id,
            title: r.title,
            content: r.content,
            version: r.version,
            status: r.status.parse()?,
        })
    }
}
