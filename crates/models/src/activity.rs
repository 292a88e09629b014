use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One extracurricular activity and its sign-up list.
///
/// `participants` keeps signup order. Uniqueness is enforced by the roster
/// operations rejecting duplicates, not by the container type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new<I, S>(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: I,
    ) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rec = Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.into_iter().map(Into::into).collect(),
        };
        rec.validate()?;
        Ok(rec)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.max_participants == 0 {
            return Err(ModelError::Validation("max_participants must be positive".into()));
        }
        for (i, email) in self.participants.iter().enumerate() {
            validate_email(email)?;
            if self.participants[..i].contains(email) {
                return Err(ModelError::Validation(format!("duplicate participant {email}")));
            }
        }
        Ok(())
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Emails are opaque identifiers; only presence is checked, so `" "` passes.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.is_empty() {
        return Err(ModelError::Validation("email required".into()));
    }
    Ok(())
}
