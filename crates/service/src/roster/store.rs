use async_trait::async_trait;
use models::{ActivityRecord, Roster};

use crate::errors::ServiceError;

/// Confirmation of a successful roster transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterChange {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
}

impl RosterChange {
    /// Human-readable confirmation returned to the caller.
    pub fn message(&self) -> String {
        match self {
            Self::SignedUp { activity, email } => format!("Signed up {email} for {activity}"),
            Self::Unregistered { activity, email } => format!("Unregistered {email} from {activity}"),
        }
    }
}

/// Trait abstraction for the activity roster.
///
/// Per activity and email the state is either registered or not; `signup`
/// and `unregister` each fail when called from the wrong state instead of
/// silently succeeding.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Owned snapshot of every activity; mutating it never touches the store.
    async fn list(&self) -> Roster;
    async fn get(&self, activity: &str) -> Result<ActivityRecord, ServiceError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<RosterChange, ServiceError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<RosterChange, ServiceError>;
}
