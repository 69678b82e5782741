use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Multipart, Path, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::applications::{
                mutators::ApplicationMutator,
                selectors::ApplicationSelector,
                spec::{Application, EducationEntry, ExperienceEntry},
            },
            auth::Claims,
            email::{SendEmail, application::ApplicationReceived},
            storage,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

const RESUME_MAX_BYTES: usize = 10 * 1024 * 1024;
const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

pub struct NewApplication {
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
}

pub async fn apply(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    let mut job_id_str = String::new();
    let mut full_name = String::new();
    let mut email = String::new();
    let mut phone = String::new();
    let mut dob = None;
    let mut gender = None;
    let mut location = None;
    let mut linkedin_url = None;
    let mut naukri_url = None;
    let mut portfolio_url = None;
    let mut highest_education = None;
    let mut education_raw = String::new();
    let mut experience_raw = String::new();
    let mut total_experience_str = String::new();
    let mut cover_letter = None;
    let mut agree_terms = false;
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_part)? {
        match field.name().unwrap_or("") {
            "jobId" => job_id_str = field.text().await.map_err(bad_part)?,
            "applicantName" => full_name = field.text().await.map_err(bad_part)?,
            "applicantEmail" => email = field.text().await.map_err(bad_part)?,
            "applicantPhone" => phone = field.text().await.map_err(bad_part)?,
            "applicantDOB" => dob = Some(field.text().await.map_err(bad_part)?),
            "applicantGender" => gender = Some(field.text().await.map_err(bad_part)?),
            "applicantLocation" => location = Some(field.text().await.map_err(bad_part)?),
            "applicantLinkedIn" => linkedin_url = Some(field.text().await.map_err(bad_part)?),
            "applicantNaukri" => naukri_url = Some(field.text().await.map_err(bad_part)?),
            "applicantPortfolio" => portfolio_url = Some(field.text().await.map_err(bad_part)?),
            "applicantHighestEducation" => {
                highest_education = Some(field.text().await.map_err(bad_part)?)
            }
            "totalExperience" => total_experience_str = field.text().await.map_err(bad_part)?,
            "applicantCoverLetter" => cover_letter = Some(field.text().await.map_err(bad_part)?),
            "agreeTerms" => {
                let text = field.text().await.map_err(bad_part)?;
                agree_terms = matches!(text.trim(), "true" | "on" | "1");
            }
            "education" => education_raw = field.text().await.map_err(bad_part)?,
            "experience" => experience_raw = field.text().await.map_err(bad_part)?,
            "applicantResume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let data = field.bytes().await.map_err(bad_part)?;
                resume = Some((file_name, data));
            }
            _ => {
                let _ = field.bytes().await.map_err(bad_part)?;
            }
        }
    }

    let job_id: i32 = job_id_str
        .trim()
        .parse()
        .map_err(|_| Error::Validation("Invalid job ID".into()))?;
    let full_name = non_empty(full_name, "applicantName")?;
    let email = non_empty(email, "applicantEmail")?;
    let phone = non_empty(phone, "applicantPhone")?;
    let education = parse_history::<EducationEntry>(&education_raw, "education")?;
    let experience = parse_history::<ExperienceEntry>(&experience_raw, "experience")?;
    let total_experience: f64 = total_experience_str.trim().parse().unwrap_or(0.0);

    // no attachment is fine, the stored reference is simply null
    let resume_path = match &resume {
        Some((file_name, data)) => {
            check_resume(file_name, data)?;
            Some(storage::save_resume(&settings.upload_dir, file_name, data).await?)
        }
        None => None,
    };

    let application = NewApplication {
        job_id,
        full_name,
        email,
        phone,
        dob,
        gender,
        location,
        linkedin_url,
        naukri_url,
        portfolio_url,
        highest_education,
        education,
        experience,
        total_experience,
        cover_letter,
        resume_path,
        agree_terms,
    };

    let mut conn = state.db_pool.acquire().await?;
    let record = ApplicationMutator::new(&mut conn).create(&application).await?;

    let template = ApplicationReceived {
        name: &record.full_name,
        job_id: record.job_id,
        email: &record.email,
        phone: &record.phone,
        location: record.location.as_deref().unwrap_or("-"),
    };
    let message = match template.send(&record.email).await {
        Ok(()) => "Application submitted successfully. Confirmation email sent.",
        Err(e) => {
            tracing::error!("confirmation email failed: {}", e);
            "Application submitted, but confirmation email failed."
        }
    };

    Ok(Json(json!({
        "message": message,
        "applicationId": record.id,
        "resumePath": record.resume_path,
    })))
}

pub async fn list_for_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Path(job_id): Path<i32>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let records = ApplicationSelector::new(&mut conn).get_by_job(job_id).await?;
    let applications: Vec<Application> = records.into_iter().map(Application::from).collect();
    tracing::debug!(
        "{} applications for job {} fetched by {}",
        applications.len(),
        job_id,
        &claims.email
    );
    Ok(Json(json!({"applications": applications})))
}

pub async fn resume(
    Extension(claims): Extension<Arc<Claims>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse> {
    // stored references are bare sanitized filenames; refuse anything
    // path-like
    if filename.contains('/') || filename.contains("..") {
        return Err(Error::Validation("invalid resume reference".into()));
    }
    let path = storage::resume_disk_path(&settings.upload_dir, &filename);
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| Error::NotFound("Resume not found".into()))?;
    tracing::debug!("resume {} fetched by {}", &filename, &claims.email);
    Ok(([(CONTENT_TYPE, resume_content_type(&filename))], data))
}

fn resume_content_type(filename: &str) -> &'static str {
    match FsPath::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
    {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

fn bad_part(e: axum::extract::multipart::MultipartError) -> Error {
    Error::Validation(format!("invalid multipart payload: {}", e))
}

fn non_empty(value: String, name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{} is required", name)));
    }
    Ok(trimmed.to_string())
}

fn parse_history<T: DeserializeOwned>(raw: &str, name: &str) -> Result<Vec<T>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|_| Error::Validation(format!("invalid {} payload", name)))
}

fn check_resume(file_name: &str, data: &[u8]) -> Result<()> {
    let extension = FsPath::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !RESUME_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::Validation(
            "Invalid file type. Only PDF, DOC, DOCX files are allowed".into(),
        ));
    }
    if data.len() > RESUME_MAX_BYTES {
        return Err(Error::Validation(
            "File too large. Maximum size is 10MB".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_defaults_to_empty() -> Result<()> {
        let parsed: Vec<EducationEntry> = parse_history("", "education")?;
        assert!(parsed.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_history_rejects_malformed_submission() {
        let parsed: Result<Vec<EducationEntry>> = parse_history("[{", "education");
        assert!(matches!(parsed, Err(Error::Validation(_))));
    }

    #[test]
    fn test_parse_history_reads_entries() -> Result<()> {
        let raw = r#"[{"company":"Acme","jobTitle":"Dev","jobDescription":"apis","startDate":"2021-01","endDate":"2023-06"}]"#;
        let parsed: Vec<ExperienceEntry> = parse_history(raw, "experience")?;
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].company, "Acme");
        Ok(())
    }

    #[test]
    fn test_resume_content_type_by_extension() {
        assert_eq!(resume_content_type("a.pdf"), "application/pdf");
        assert_eq!(resume_content_type("a.doc"), "application/msword");
        assert_eq!(resume_content_type("a.bin"), "application/octet-stream");
    }

    #[test]
    fn test_resume_extension_gate() {
        assert!(check_resume("cv.pdf", b"x").is_ok());
        assert!(check_resume("cv.docx", b"x").is_ok());
        assert!(matches!(
            check_resume("cv.exe", b"x"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(check_resume("cv", b"x"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_resume_size_gate() {
        let oversized = vec![0u8; RESUME_MAX_BYTES + 1];
        assert!(matches!(
            check_resume("cv.pdf", &oversized),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_non_empty_guard() {
        assert!(matches!(
            non_empty("  ".into(), "applicantName"),
            Err(Error::Validation(_))
        ));
        assert_eq!(non_empty(" Asha ".into(), "applicantName").unwrap(), "Asha");
    }
}
