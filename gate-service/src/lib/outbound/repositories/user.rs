use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::models::User;
use crate::domain::user::models::UserUri;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

#[derive(Debug, FromRow)]
struct UserRow {
    uri: String,
    email: String,
    first_name: String,
    last_name: String,
    admin: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            uri: UserUri::parse(&row.uri)?,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            admin: row.admin,
            created_at: row.created_at,
        })
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_uri(&self, uri: &UserUri) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT uri, email, first_name, last_name, admin, created_at
            FROM users
            WHERE uri = $1
            "#,
        )
        .bind(uri.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }
}
