use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::Role;
use crate::domain::identity::ports::CredentialStore;
use crate::identity::errors::StoreError;

pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_identity(row: &PgRow) -> Result<Identity, StoreError> {
        let email: String = row.get("email");
        let role: String = row.get("role");

        Ok(Identity {
            id: IdentityId(row.get::<Uuid, _>("id")),
            email: EmailAddress::new(email).map_err(|e| StoreError::Database(e.to_string()))?,
            password_hash: row.get("password_hash"),
            role: role
                .parse::<Role>()
                .map_err(|e| StoreError::Database(e.to_string()))?,
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
        })
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, role, created_at
            FROM identities
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(row) => Ok(Some(Self::row_to_identity(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM identities WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn save(&self, identity: Identity) -> Result<Identity, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO identities (id, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(identity.id.0)
        .bind(identity.email.as_str())
        .bind(&identity.password_hash)
        .bind(identity.role.as_str())
        .bind(identity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("identities_email_key")
                {
                    return StoreError::DuplicateEmail(identity.email.as_str().to_string());
                }
            }
            StoreError::Database(e.to_string())
        })?;

        Ok(identity)
    }
}
