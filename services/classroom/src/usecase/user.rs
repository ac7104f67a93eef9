use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use campus_domain::role::Role;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, validate_email};
use crate::error::ClassroomServiceError;

/// SHA-256 hex digest of the password, matching the stored format.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, ClassroomServiceError> {
        if !validate_email(&input.email) {
            return Err(ClassroomServiceError::MissingData);
        }
        if input.password.is_empty() || input.full_name.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        // Role is a closed set and immutable after this point.
        let role =
            Role::from_str_opt(&input.role).ok_or(ClassroomServiceError::InvalidRole)?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            password_hash: hash_password(&input.password),
            full_name: input.full_name,
            role,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<User, ClassroomServiceError> {
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(ClassroomServiceError::InvalidCredentials)?;
        if user.password_hash != hash_password(&input.password) {
            return Err(ClassroomServiceError::InvalidCredentials);
        }
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ClassroomServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ClassroomServiceError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    /// Only the display name is mutable; role and email are fixed at
    /// registration.
    pub async fn execute(
        &self,
        user_id: Uuid,
        full_name: String,
    ) -> Result<(), ClassroomServiceError> {
        if full_name.is_empty() {
            return Err(ClassroomServiceError::MissingData);
        }
        if self.repo.find_by_id(user_id).await?.is_none() {
            return Err(ClassroomServiceError::UserNotFound);
        }
        self.repo.update_full_name(user_id, &full_name).await
    }
}
