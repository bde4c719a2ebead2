pub mod event;
pub mod feedback;
pub mod registration;
pub mod revenue;
pub mod student;

pub use event::{EventDetail, EventStats, EventSummary};
pub use feedback::NewFeedback;
pub use registration::{NewRegistration, RegistrationEntry, RegistrationStatus};
pub use revenue::RevenueEntry;
pub use student::Student;
