use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct StudentRecord {
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub receive_updates: bool,
    pub dateofbirth: Option<String>,
    pub address: Option<String>,
    pub ssc: Option<String>,
    pub intermediate: Option<String>,
    pub ug: Option<String>,
    pub pg: Option<String>,
    pub experience: Option<String>,
    pub profile: Option<String>,
    pub resume: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub receive_updates: bool,
    pub dateofbirth: Option<String>,
    pub address: Option<String>,
    pub ssc: Option<String>,
    pub intermediate: Option<String>,
    pub ug: Option<String>,
    pub pg: Option<String>,
    pub experience: Option<String>,
    pub profile: Option<String>,
    pub resume: Option<String>,
}

impl From<StudentRecord> for StudentProfile {
    fn from(record: StudentRecord) -> Self {
        StudentProfile {
            student_id: record.student_id,
            full_name: record.full_name,
            email: record.email,
            phone: record.phone,
            receive_updates: record.receive_updates,
            dateofbirth: record.dateofbirth,
            address: record.address,
            ssc: record.ssc,
            intermediate: record.intermediate,
            ug: record.ug,
            pg: record.pg,
            experience: record.experience,
            profile: record.profile,
            resume: record.resume,
        }
    }
}
