//! User operations with audited writes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use daylog_auth::password::{PasswordHasher, PasswordValidator};
use daylog_core::error::{AppError, FieldErrors};
use daylog_core::result::AppResult;
use daylog_core::types::UserId;
use daylog_database::UserStore;
use daylog_entity::audit::AuditEntry;
use daylog_entity::user::{NewUser, User};

use crate::audit::Auditor;
use crate::context::RequestContext;

/// Registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Name as entered.
    pub name: String,
    /// Plaintext password.
    pub password: String,
}

/// Profile changes; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New name.
    pub name: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Handles user registration and self-service.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    password_rules: PasswordValidator,
    auditor: Auditor,
}

fn check_name(name: &str, errors: &mut FieldErrors) {
    if name.trim().is_empty() {
        errors.add("name", "required", "The name field is required.");
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        password_rules: PasswordValidator,
    ) -> Self {
        Self {
            users,
            hasher,
            password_rules,
            auditor: Auditor::new(),
        }
    }

    /// Create a user. The password is hashed before it reaches the store,
    /// and the `created` audit entries are written with the user.
    pub async fn register(&self, req: &RegisterUser) -> AppResult<User> {
        let mut errors = FieldErrors::new();
        check_name(&req.name, &mut errors);
        self.password_rules.check("password", &req.password, &mut errors);
        errors.into_result()?;

        let new_user = NewUser {
            id: UserId::new(),
            name: req.name.clone(),
            password_hash: self.hasher.hash_password(&req.password)?,
        };
        let audits = vec![self.auditor.registration(&new_user, None)];

        let user = self.users.create_user(&new_user, audits).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// The acting user.
    pub async fn get(&self, ctx: &RequestContext) -> AppResult<User> {
        self.find(ctx.user_id()).await
    }

    /// Change a user's name and/or password.
    ///
    /// Only changed attributes are audited; a password that verifies
    /// against the stored hash counts as unchanged and is not re-hashed.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
        changes: &UpdateUser,
    ) -> AppResult<User> {
        if user_id != ctx.user_id() {
            return Err(AppError::forbidden("You may only update your own profile"));
        }

        let mut errors = FieldErrors::new();
        if let Some(name) = &changes.name {
            check_name(name, &mut errors);
        }
        if let Some(password) = &changes.password {
            self.password_rules.check("password", password, &mut errors);
        }
        errors.into_result()?;

        let before = self.find(user_id).await?;
        let mut after = before.clone();

        if let Some(name) = &changes.name {
            after.name = name.clone();
        }
        if let Some(password) = &changes.password {
            if !self.hasher.verify_password(password, &before.password_hash)? {
                after.password_hash = self.hasher.hash_password(password)?;
            }
        }

        let audits = self.auditor.changes(&before, &after, Some(ctx.user_id()));
        if audits.is_empty() {
            return Ok(before);
        }

        let count = audits.len();
        let user = self.users.update_user(&after, audits).await?;
        info!(user_id = %user.id, audits = count, "User updated");
        Ok(user)
    }

    /// Update the acting user.
    pub async fn update_self(&self, ctx: &RequestContext, changes: &UpdateUser) -> AppResult<User> {
        self.update(ctx, ctx.user_id(), changes).await
    }

    /// A user's audit trail, oldest first. Users may only read their own.
    pub async fn audits(&self, ctx: &RequestContext, user_id: UserId) -> AppResult<Vec<AuditEntry>> {
        if user_id != ctx.user_id() {
            return Err(AppError::forbidden("You may only read your own audit trail"));
        }
        self.users.audits_for(user_id).await
    }

    async fn find(&self, user_id: UserId) -> AppResult<User> {
        self.users
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}
