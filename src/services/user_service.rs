use serde_json::Value;
use uuid::Uuid;

use crate::domain::{User, UserDraft};
use crate::errors::CashflowError;
use crate::store::Repository;

/// Active-user resolution and user persistence.
pub struct UserService;

impl UserService {
    /// Returns the single active user, or `None` when zero or several
    /// users are marked active. Callers treat `None` as "no setup yet"
    /// and skip dependent computation.
    pub fn active_user(users: &impl Repository<User>) -> Result<Option<User>, CashflowError> {
        let mut active = users.find(&|user: &User| user.active)?;
        if active.len() != 1 {
            tracing::debug!(count = active.len(), "active user query did not resolve");
            return Ok(None);
        }
        Ok(active.pop())
    }

    pub fn active_user_id(users: &impl Repository<User>) -> Result<Option<Uuid>, CashflowError> {
        Ok(Self::active_user(users)?.map(|user| user.id))
    }

    /// Reads one named setting from the active user.
    pub fn active_user_setting(
        users: &impl Repository<User>,
        name: &str,
    ) -> Result<Option<Value>, CashflowError> {
        Ok(Self::active_user(users)?.and_then(|user| user.setting(name).cloned()))
    }

    pub fn create(
        users: &mut impl Repository<User>,
        draft: UserDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        if !draft.is_valid() {
            tracing::debug!("rejected user draft: missing name");
            return Ok(None);
        }
        let mut user = User::new(draft.name.unwrap_or_default());
        user.active = draft.active;
        user.settings = draft.settings;
        users.save(user).map(Some)
    }

    pub fn update(
        users: &mut impl Repository<User>,
        id: Uuid,
        draft: UserDraft,
    ) -> Result<Option<Uuid>, CashflowError> {
        if !draft.is_valid() {
            tracing::debug!(%id, "rejected user update: missing name");
            return Ok(None);
        }
        let Some(mut user) = users.find_one(id)? else {
            return Ok(None);
        };
        user.name = draft.name.unwrap_or_default();
        user.active = draft.active;
        user.settings = draft.settings;
        users.update(id, user)?;
        Ok(Some(id))
    }
}
