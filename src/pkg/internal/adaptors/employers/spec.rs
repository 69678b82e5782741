use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct EmployerRecord {
    pub id: i32,
    pub company_name: String,
    pub employer_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub username: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub designation: Option<String>,
    pub experience: Option<String>,
    pub companytype: Option<String>,
    pub summary: Option<String>,
    pub aboutus: Option<String>,
    pub created_at: NaiveDateTime,
}

// profile view never carries the credential hash
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    pub id: i32,
    pub user_name: Option<String>,
    pub employer_name: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub designation: Option<String>,
    pub experience: Option<String>,
    pub company_type: Option<String>,
    pub summary: Option<String>,
    pub about_us: Option<String>,
    pub email: String,
    pub phone: String,
}

impl From<EmployerRecord> for EmployerProfile {
    fn from(record: EmployerRecord) -> Self {
        EmployerProfile {
            id: record.id,
            user_name: record.username,
            employer_name: record.employer_name,
            company_name: record.company_name,
            industry: record.industry,
            location: record.location,
            designation: record.designation,
            experience: record.experience,
            company_type: record.companytype,
            summary: record.summary,
            about_us: record.aboutus,
            email: record.email,
            phone: record.phone,
        }
    }
}
