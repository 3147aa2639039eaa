use crate::{
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError>;
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<Option<UserModel>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<UserResponse, ServiceError>;
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError>;
    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError>;
    async fn delete_user(&self, id: i32) -> Result<(), ServiceError>;
}
