//! Operator account repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::{write_error, UniqueColumns};
use common::{AppError, AppResult};
use domain::User;

const UNIQUE_COLUMNS: UniqueColumns = &[("users_email_key", "User")];

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert; a taken email surfaces as `Conflict("User")`
    async fn create(&self, user: User) -> AppResult<User>;
}

pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::from))
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let model = ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "User", UNIQUE_COLUMNS))?;
        Ok(User::from(model))
    }
}
