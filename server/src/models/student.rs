use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub s_name: String,
    pub email: String,
}
