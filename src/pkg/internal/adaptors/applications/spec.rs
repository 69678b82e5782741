use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub percentage: String,
    pub start_year: String,
    pub end_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub job_title: String,
    pub job_description: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRecord {
    pub id: i32,
    pub job_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub naukri_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub highest_education: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub total_experience: f64,
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
    pub agree_terms: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i32,
    pub job_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub naukri_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub highest_education: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub total_experience: f64,
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
    pub agree_terms: bool,
    pub created_at: NaiveDateTime,
}

// same rule as job tag-sets: a corrupt serialized history decodes to empty
// rather than failing the listing
fn decode_history<T: for<'de> Deserialize<'de>>(raw: Option<&str>) -> Vec<T> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

impl From<ApplicationRecord> for Application {
    fn from(record: ApplicationRecord) -> Self {
        Application {
            id: record.id,
            job_id: record.job_id,
            full_name: record.full_name,
            email: record.email,
            phone: record.phone,
            dob: record.dob,
            gender: record.gender,
            location: record.location,
            linkedin_url: record.linkedin_url,
            naukri_url: record.naukri_url,
            portfolio_url: record.portfolio_url,
            highest_education: record.highest_education,
            education: decode_history(record.education.as_deref()),
            experience: decode_history(record.experience.as_deref()),
            total_experience: record.total_experience,
            cover_letter: record.cover_letter,
            resume_path: record.resume_path,
            agree_terms: record.agree_terms,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_education_history() {
        let raw = r#"[{"institution":"IIT","degree":"BTech","fieldOfStudy":"CS","percentage":"82","startYear":"2018","endYear":"2022"}]"#;
        let decoded: Vec<EducationEntry> = decode_history(Some(raw));
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].institution, "IIT");
        assert_eq!(decoded[0].field_of_study, "CS");
    }

    #[test]
    fn test_decode_malformed_history_yields_empty() {
        let decoded: Vec<ExperienceEntry> = decode_history(Some("{{nope"));
        assert!(decoded.is_empty());
        let decoded: Vec<ExperienceEntry> = decode_history(None);
        assert!(decoded.is_empty());
    }
}
