//! Session store owning the current user identity and favorite set.
//!
//! This is the single writer of the persisted session slot. The store is
//! meant to be constructed once at startup and passed down explicitly; every
//! mutation re-persists the identity so a restart resumes the same session.
//!
//! Login and register accept any credentials. They are placeholders behind a
//! stable contract, to be swapped for a real credential verifier without
//! changing callers.

use uuid::Uuid;

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::User;

/// Owner of the current identity, `anonymous` or `authenticated`.
pub struct SessionStore {
    repo: Repository,
    user: Option<User>,
}

impl SessionStore {
    /// Open the store, resuming a persisted session when one exists.
    pub async fn open(repo: Repository) -> Result<Self, AppError> {
        let user = repo.load_user().await?;

        if let Some(ref user) = user {
            tracing::info!("Resumed session for {}", user.email);
        }

        Ok(Self { repo, user })
    }

    /// Current user snapshot, `None` when anonymous.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Log in with the given credentials.
    ///
    /// The display name is the local part of the email address. The password
    /// is accepted unchecked.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<User, AppError> {
        let name = email.split('@').next().unwrap_or(email).to_string();
        self.start_session(email, &name).await
    }

    /// Register a new account with an explicit display name.
    pub async fn register(
        &mut self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> Result<User, AppError> {
        self.start_session(email, name).await
    }

    /// Log out, clearing the in-memory identity and the persisted slot.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        if let Some(user) = self.user.take() {
            tracing::info!("Logged out {}", user.email);
        }
        self.repo.clear_user().await
    }

    /// Toggle a recipe in the favorite set: removed when present, appended
    /// when absent. No-op while anonymous.
    pub async fn toggle_favorite(&mut self, recipe_id: i64) -> Result<(), AppError> {
        let Some(user) = self.user.as_mut() else {
            tracing::debug!("Ignoring favorite toggle without an active session");
            return Ok(());
        };

        if let Some(pos) = user.favorite_recipes.iter().position(|&id| id == recipe_id) {
            user.favorite_recipes.remove(pos);
        } else {
            user.favorite_recipes.push(recipe_id);
        }

        self.repo.save_user(user).await
    }

    async fn start_session(&mut self, email: &str, name: &str) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            favorite_recipes: Vec::new(),
        };

        self.repo.save_user(&user).await?;
        tracing::info!("Started session for {}", user.email);

        self.user = Some(user.clone());
        Ok(user)
    }
}
