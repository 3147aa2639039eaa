use crate::{
    abstract_trait::{DynUserRepository, UserServiceTrait},
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct UserService {
    repository: DynUserRepository,
}

impl UserService {
    pub fn new(repository: DynUserRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<UserResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("User {id} not found")))
    }

    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError> {
        let user = self.repository.create(req).await?;
        Ok(UserResponse::from(user))
    }

    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError> {
        if req.is_empty() {
            return Err(ServiceError::Validation(
                "no valid fields to update".into(),
            ));
        }

        self.repository
            .update(id, req)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("User {id} not found")))
    }

    async fn delete_user(&self, id: i32) -> Result<(), ServiceError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("User {id} not found")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::UserRepositoryTrait;
    use crate::errors::RepositoryError;
    use crate::model::User as UserModel;
    use std::sync::Arc;

    #[derive(Default)]
    struct MockUserRepository {
        missing: bool,
    }

    fn user_row(id: i32) -> UserModel {
        UserModel {
            id,
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            address: None,
            phone: None,
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
            Ok(vec![user_row(1)])
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
            Ok((!self.missing).then(|| user_row(id)))
        }

        async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
            Ok(UserModel {
                id: 1,
                name: req.name.clone(),
                email: req.email.clone(),
                address: req.address.clone(),
                phone: req.phone.clone(),
            })
        }

        async fn update(
            &self,
            id: i32,
            req: &UpdateUserRequest,
        ) -> Result<Option<UserModel>, RepositoryError> {
            if self.missing {
                return Ok(None);
            }
            let mut row = user_row(id);
            if let Some(name) = &req.name {
                row.name = name.clone();
            }
            Ok(Some(row))
        }

        async fn delete(&self, _id: i32) -> Result<bool, RepositoryError> {
            Ok(!self.missing)
        }
    }

    #[tokio::test]
    async fn create_user_echoes_optional_fields() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        let req = CreateUserRequest {
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            address: Some("Main St 1".into()),
            phone: None,
        };

        let response = service.create_user(&req).await.unwrap();
        assert_eq!(response.address.as_deref(), Some("Main St 1"));
        assert!(response.phone.is_none());
    }

    #[tokio::test]
    async fn empty_update_is_a_validation_error() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        let err = service
            .update_user(1, &UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_user_maps_to_not_found() {
        let service = UserService::new(Arc::new(MockUserRepository { missing: true }));
        assert!(matches!(
            service.find_by_id(99).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            service.delete_user(99).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
