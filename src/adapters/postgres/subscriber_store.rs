use crate::domain::subscriber::Subscriber;
use crate::domain::value_objects::SubscriberId;
use crate::ports::subscriber_store::{Result, SubscriberStore as SubscriberStoreTrait};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Map a PostgreSQL row to a Subscriber
///
/// Loaded subscribers always start with an empty borrowed list; loan
/// state is session-local and never stored.
fn map_row_to_subscriber(row: &PgRow) -> Result<Subscriber> {
    let subscriber_id_i32: i32 = row.get("subscriber_id");
    let subscriber_id: u32 = subscriber_id_i32.try_into().map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("subscriber_id out of range: {}", subscriber_id_i32),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Subscriber::new(
        SubscriberId::new(subscriber_id),
        row.get("name"),
    ))
}

/// PostgreSQL implementation of SubscriberStore
///
/// Persists subscriber identity only (id and name).
pub struct SubscriberStore {
    pool: PgPool,
}

impl SubscriberStore {
    /// Create a new SubscriberStore with a PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberStoreTrait for SubscriberStore {
    /// Create the subscribers table if it does not exist yet
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS subscribers (
                subscriber_id INT PRIMARY KEY,
                name VARCHAR(100) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load all subscribers ordered by id
    async fn load_all(&self) -> Result<Vec<Subscriber>> {
        let rows = sqlx::query(
            r#"
            SELECT subscriber_id, name
            FROM subscribers
            ORDER BY subscriber_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_subscriber).collect()
    }

    /// Insert a single subscriber row
    async fn insert(&self, subscriber: &Subscriber) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO subscribers (subscriber_id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(subscriber.id().value() as i32)
        .bind(subscriber.name())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
