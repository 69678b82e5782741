use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct JobRecord {
    pub id: i32,
    pub job_title: String,
    pub company_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub posted_by: String,
    pub experience: String,
    pub salary: String,
    pub work_mode: Option<String>,
    pub education: Option<String>,
    pub job_type: Option<String>,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// API shape of a job: tag-set columns decoded from their serialized form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub job_title: String,
    pub company_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub posted_by: String,
    pub experience: String,
    pub salary: String,
    pub work_mode: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub job_type: BTreeSet<String>,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// a corrupt serialized payload decodes to the empty set; one bad record must
// never fail the whole batch
pub fn decode_tags(raw: Option<&str>) -> BTreeSet<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        Job {
            id: record.id,
            job_title: record.job_title,
            company_name: record.company_name,
            country: record.country,
            state: record.state,
            city: record.city,
            posted_by: record.posted_by,
            experience: record.experience,
            salary: record.salary,
            work_mode: decode_tags(record.work_mode.as_deref()),
            education: decode_tags(record.education.as_deref()),
            job_type: decode_tags(record.job_type.as_deref()),
            description: record.description,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_tags() {
        let decoded = decode_tags(Some(r#"["Remote","Hybrid"]"#));
        assert_eq!(decoded.len(), 2);
        assert!(decoded.contains("Remote"));
        assert!(decoded.contains("Hybrid"));
    }

    #[test]
    fn test_decode_malformed_tags_yields_empty_set() {
        assert!(decode_tags(Some("not json")).is_empty());
        assert!(decode_tags(Some(r#"{"Remote": true}"#)).is_empty());
        assert!(decode_tags(Some("[\"Remote\"")).is_empty());
    }

    #[test]
    fn test_decode_absent_tags_yields_empty_set() {
        assert!(decode_tags(None).is_empty());
    }
}
