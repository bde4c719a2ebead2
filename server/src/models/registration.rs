use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Confirmed => "Confirmed",
            RegistrationStatus::Cancelled => "Cancelled",
        }
    }
}

/// Registration joined with the registered student's name and email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RegistrationEntry {
    pub reg_id: i64,
    pub event_id: i64,
    pub student_id: i64,
    pub status: String,
    pub s_name: String,
    pub email: String,
}

/// Body of `POST /api/registrations`. Ids may arrive as numbers or as
/// numeric strings straight from form inputs.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRegistration {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub event_id: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
}
