use anyhow::{Context, anyhow};

use roster_core::AppError;
use roster_models::{User, UserDto};
use roster_store::UserStore;

use crate::validator::validate_payload;

pub struct UserService;

impl UserService {
    pub fn get_users(store: &UserStore) -> Vec<User> {
        store.list()
    }

    pub fn get_user(store: &UserStore, id: i32) -> Result<User, AppError> {
        store
            .get(id)
            .ok_or_else(|| AppError::not_found(anyhow!("User with id {}, was not found!", id)))
    }

    /// `dto` must already be validated.
    pub fn create_user(store: &UserStore, dto: UserDto) -> Result<User, AppError> {
        let user = store
            .insert(dto)
            .context("Failed to insert user")
            .map_err(AppError::internal)?;

        Ok(user)
    }

    /// Existence is checked before validation: an unknown id is a 404 even
    /// when the body is invalid.
    pub fn update_user(store: &UserStore, id: i32, dto: UserDto) -> Result<User, AppError> {
        if !store.contains(id) {
            return Err(AppError::not_found_empty());
        }

        validate_payload(&dto)?;

        // A concurrent delete can land between the check and the write.
        store.update(id, dto).ok_or_else(AppError::not_found_empty)
    }

    pub fn delete_user(store: &UserStore, id: i32) -> Result<User, AppError> {
        store.remove(id).ok_or_else(AppError::not_found_empty)
    }
}
