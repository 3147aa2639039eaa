use crate::{
    abstract_trait::UserRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let users = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, address, phone
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to list users: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, address, phone
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch user {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(user)
    }

    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (name, email, address, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, address, phone
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(req.address.as_deref())
        .bind(req.phone.as_deref())
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user '{}': {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user ID {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET name    = COALESCE($2, name),
                email   = COALESCE($3, email),
                address = COALESCE($4, address),
                phone   = COALESCE($5, phone)
            WHERE id = $1
            RETURNING id, name, email, address, phone
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.email.as_deref())
        .bind(req.address.as_deref())
        .bind(req.phone.as_deref())
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if user.is_some() {
            info!("🔄 Updated user {}", id);
        }
        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let deleted = sqlx::query_scalar::<_, i32>(
            r#"
            DELETE FROM users WHERE id = $1 RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete user {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if deleted.is_some() {
            info!("🗑️ Deleted user {}", id);
        }
        Ok(deleted.is_some())
    }
}
