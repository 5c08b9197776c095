use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySqlPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{MatchRecord, Message, NewUser, PartnerProfile};

/// Errors that can occur when interacting with MySQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// MySQL client owning the shared connection pool
///
/// Holds every query the service issues: the partner catalog, user
/// registration, the match-score log and messages. Handlers receive it
/// as an explicitly shared dependency, never through a module-level
/// singleton, so the scoring pipeline stays testable in isolation.
pub struct MySqlClient {
    pool: MySqlPool,
}

impl MySqlClient {
    /// Create a new MySQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new MySQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to MySQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// All partner profiles still flagged active
    ///
    /// `hobbies` and `personality` are stored as comma-joined columns and
    /// split into lists here, preserving their stored order.
    pub async fn fetch_partners(&self) -> Result<Vec<PartnerProfile>, StoreError> {
        let query = r#"
            SELECT id, name, age, city, hobbies, personality, description, image_url, is_active
            FROM partners
            WHERE is_active = TRUE
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let partners: Vec<PartnerProfile> = rows
            .iter()
            .map(|row| PartnerProfile {
                id: row.get("id"),
                name: row.get("name"),
                age: row.get("age"),
                city: row.get("city"),
                hobbies: split_list(row.get("hobbies")),
                personality: split_list(row.get("personality")),
                description: row.get("description"),
                image: row.get("image_url"),
                is_active: row.get("is_active"),
            })
            .collect();

        tracing::debug!("Fetched {} active partners", partners.len());

        Ok(partners)
    }

    /// Insert a new user and return the assigned identifier
    pub async fn register_user(&self, user: &NewUser) -> Result<u64, StoreError> {
        let query = r#"
            INSERT INTO users (name, age, city, personality_traits, hobbies, description, email, password)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(user.age)
            .bind(&user.city)
            .bind(join_list(&user.personality_traits))
            .bind(join_list(&user.hobbies))
            .bind(&user.description)
            .bind(&user.email)
            .bind(&user.password)
            .execute(&self.pool)
            .await?;

        let user_id = result.last_insert_id();
        tracing::debug!("Registered user {} ({})", user_id, user.name);

        Ok(user_id)
    }

    /// Log one computed compatibility score as match history
    ///
    /// Insert-only; scores in this table are an audit trail, never read
    /// back as authoritative partner state.
    pub async fn record_match(
        &self,
        user_id: u64,
        partner_id: u64,
        compatibility_score: u8,
    ) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO matches (user_id, partner_id, compatibility_score)
            VALUES (?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user_id)
            .bind(partner_id)
            .bind(compatibility_score)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Match history for a user, joined with partner display data,
    /// best score first
    pub async fn get_user_matches(&self, user_id: u64) -> Result<Vec<MatchRecord>, StoreError> {
        let query = r#"
            SELECT m.id, m.user_id, m.partner_id, m.compatibility_score, m.created_at,
                   p.name AS partner_name, p.image_url
            FROM matches m
            JOIN partners p ON m.partner_id = p.id
            WHERE m.user_id = ?
            ORDER BY m.compatibility_score DESC
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        let records = rows
            .iter()
            .map(|row| MatchRecord {
                id: row.get("id"),
                user_id: row.get("user_id"),
                partner_id: row.get("partner_id"),
                compatibility_score: row.get("compatibility_score"),
                partner_name: row.get("partner_name"),
                image_url: row.get("image_url"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(records)
    }

    /// Store a message and return its identifier
    pub async fn send_message(
        &self,
        match_id: u64,
        sender_id: u64,
        content: &str,
    ) -> Result<u64, StoreError> {
        let query = r#"
            INSERT INTO messages (match_id, sender_id, content)
            VALUES (?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(match_id)
            .bind(sender_id)
            .bind(content)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    /// Messages of a match, oldest first
    pub async fn get_messages(&self, match_id: u64) -> Result<Vec<Message>, StoreError> {
        let query = r#"
            SELECT id, match_id, sender_id, content, created_at
            FROM messages
            WHERE match_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query).bind(match_id).fetch_all(&self.pool).await?;

        let messages = rows
            .iter()
            .map(|row| Message {
                id: row.get("id"),
                match_id: row.get("match_id"),
                sender_id: row.get("sender_id"),
                content: row.get("content"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(messages)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Split a comma-joined column into a list, dropping empty entries
pub fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|joined| {
        joined
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Join a list into the comma-joined column form
pub fn join_list(items: &[String]) -> String {
    items.join(",")
}
