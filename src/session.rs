//! Placeholder session handling: a fixed roster of users and a process-wide
//! current actor. Switching is a local selection; there is no credential
//! check anywhere.

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Role, User},
};

pub struct Session {
    users: Vec<User>,
    current: RwLock<Option<i64>>,
}

impl Session {
    pub fn with_default_roster() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "Admin Geral".to_string(),
                role: Role::Admin,
                avatar: "https://i.pravatar.cc/150?u=admin".to_string(),
            },
            User {
                id: 2,
                name: "Atendente 1".to_string(),
                role: Role::Atendente,
                avatar: "https://i.pravatar.cc/150?u=atendente1".to_string(),
            },
            User {
                id: 3,
                name: "Atendente 2".to_string(),
                role: Role::Atendente,
                avatar: "https://i.pravatar.cc/150?u=atendente2".to_string(),
            },
        ];
        let current = RwLock::new(users.first().map(|u| u.id));
        Self { users, current }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub async fn current_user(&self) -> Option<User> {
        let current = *self.current.read().await;
        current.and_then(|id| self.users.iter().find(|u| u.id == id).cloned())
    }

    pub async fn switch(&self, user_id: i64) -> AppResult<User> {
        let user = self
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(AppError::NotFound)?;
        *self.current.write().await = Some(user.id);
        Ok(user)
    }

    pub async fn logout(&self) {
        *self.current.write().await = None;
    }

    /// Product mutations are admin-only; everything else is open to the
    /// whole roster.
    pub async fn require_admin(&self) -> AppResult<User> {
        match self.current_user().await {
            Some(user) if user.role == Role::Admin => Ok(user),
            _ => Err(AppError::Forbidden),
        }
    }
}
