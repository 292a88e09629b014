use std::sync::Arc;

use async_trait::async_trait;
use models::{activity::validate_email, errors::ModelError, seed::seed_roster, ActivityRecord, Roster};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::ServiceError;
use crate::roster::store::{RosterChange, RosterStore};

/// Process-wide roster kept in memory only; restarts begin from the seed.
///
/// Each transition holds the write lock across its check and its mutation,
/// so two requests for the same email cannot both pass the duplicate check.
#[derive(Clone, Default)]
pub struct InMemoryRoster {
    inner: Arc<RwLock<Roster>>,
}

impl InMemoryRoster {
    /// Build a roster from already-typed records, validating each one.
    pub fn new(roster: Roster) -> Result<Arc<Self>, ServiceError> {
        for rec in roster.values() {
            rec.validate()?;
        }
        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(roster)) }))
    }

    /// Roster populated with the fixed seed activities.
    pub fn seeded() -> Result<Arc<Self>, ServiceError> {
        let roster = seed_roster()?;
        info!(activities = roster.len(), "roster seeded");
        Self::new(roster)
    }

    /// 列出全部活动（快照）
    pub async fn list(&self) -> Roster {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, activity: &str) -> Result<ActivityRecord, ServiceError> {
        let map = self.inner.read().await;
        map.get(activity).cloned().ok_or_else(|| ServiceError::not_found("activity"))
    }

    /// Append `email` to the activity's participants.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<RosterChange, ServiceError> {
        let mut map = self.inner.write().await;
        let rec = map.get_mut(activity).ok_or_else(|| ServiceError::not_found("activity"))?;
        check_email(email)?;
        if rec.is_registered(email) {
            warn!(%activity, %email, event = "signup_rejected", "already signed up");
            return Err(ServiceError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        // 不校验 max_participants，容量仅用于展示
        rec.participants.push(email.to_string());
        debug!(%activity, participants = rec.participants.len(), "participant appended");
        info!(%activity, %email, event = "signup", "student signed up");
        Ok(RosterChange::SignedUp { activity: activity.to_string(), email: email.to_string() })
    }

    /// Remove the single matching entry, keeping everyone else in order.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<RosterChange, ServiceError> {
        let mut map = self.inner.write().await;
        let rec = map.get_mut(activity).ok_or_else(|| ServiceError::not_found("activity"))?;
        check_email(email)?;
        let Some(pos) = rec.participants.iter().position(|p| p == email) else {
            warn!(%activity, %email, event = "unregister_rejected", "not registered");
            return Err(ServiceError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };
        rec.participants.remove(pos);
        debug!(%activity, participants = rec.participants.len(), "participant removed");
        info!(%activity, %email, event = "unregister", "student unregistered");
        Ok(RosterChange::Unregistered { activity: activity.to_string(), email: email.to_string() })
    }
}

fn check_email(email: &str) -> Result<(), ServiceError> {
    validate_email(email).map_err(|ModelError::Validation(msg)| ServiceError::Validation(msg))
}

#[async_trait]
impl RosterStore for InMemoryRoster {
    async fn list(&self) -> Roster { self.list().await }
    async fn get(&self, activity: &str) -> Result<ActivityRecord, ServiceError> { self.get(activity).await }
    async fn signup(&self, activity: &str, email: &str) -> Result<RosterChange, ServiceError> { self.signup(activity, email).await }
    async fn unregister(&self, activity: &str, email: &str) -> Result<RosterChange, ServiceError> { self.unregister(activity, email).await }
}
