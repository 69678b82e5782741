use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub id: i32,
    pub course_name: String,
    pub training_mode: String,
    pub duration: String,
    pub custom_duration: Option<i32>,
    pub requirements: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub education: Option<String>,
    pub location: Option<String>,
    pub preferred_days: Option<String>,
    pub time_slot: Option<String>,
    pub custom_time: Option<String>,
    pub created_at: NaiveDateTime,
}
