use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::{adaptors::jobs::mutators::JobMutator, auth::Claims},
        server::{handlers::require, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub posted_by: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    #[serde(default)]
    pub work_mode: Vec<String>,
    pub education: Option<Vec<String>>,
    pub job_type: Option<Vec<String>>,
    pub description: Option<String>,
}

/// Fully validated job payload; tag lists are serialized by the mutator.
pub struct NewJob {
    pub job_title: String,
    pub company_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub posted_by: String,
    pub experience: String,
    pub salary: String,
    pub work_mode: Vec<String>,
    pub education: Vec<String>,
    pub job_type: Vec<String>,
    pub description: String,
}

impl JobInput {
    fn into_new_job(self) -> Result<NewJob> {
        let job_title = require(&self.job_title, "jobTitle")?.to_string();
        let company_name = require(&self.company_name, "companyName")?.to_string();
        let country = require(&self.country, "country")?.to_string();
        let state = require(&self.state, "state")?.to_string();
        let city = require(&self.city, "city")?.to_string();
        let posted_by = require(&self.posted_by, "postedBy")?.to_string();
        let experience = require(&self.experience, "experience")?.to_string();
        let salary = require(&self.salary, "salary")?.to_string();
        let description = require(&self.description, "description")?.to_string();
        let education = self
            .education
            .ok_or_else(|| Error::Validation("education is required".into()))?;
        let job_type = self
            .job_type
            .ok_or_else(|| Error::Validation("jobType is required".into()))?;
        Ok(NewJob {
            job_title,
            company_name,
            country,
            state,
            city,
            posted_by,
            experience,
            salary,
            work_mode: self.work_mode,
            education,
            job_type,
            description,
        })
    }
}

pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Json(input): Json<JobInput>,
) -> Result<(StatusCode, Json<Value>)> {
    let job = input.into_new_job()?;
    let mut conn = state.db_pool.acquire().await?;
    let record = JobMutator::new(&mut conn).create(&job).await?;
    tracing::info!("job {} posted by {}", record.id, &claims.email);
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Job posted successfully", "jobId": record.id})),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Path(id): Path<i32>,
    Json(input): Json<JobInput>,
) -> Result<Json<Value>> {
    let job = input.into_new_job()?;
    let mut conn = state.db_pool.acquire().await?;
    match JobMutator::new(&mut conn).update(id, &job).await? {
        Some(record) => {
            tracing::info!("job {} updated by {}", record.id, &claims.email);
            Ok(Json(json!({"message": "Job updated successfully"})))
        }
        None => Err(Error::NotFound("Job not found".into())),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    if JobMutator::new(&mut conn).delete(id).await? {
        tracing::info!("job {} deleted by {}", id, &claims.email);
        Ok(Json(json!({"message": "Job deleted successfully"})))
    } else {
        Err(Error::NotFound("Job not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> JobInput {
        JobInput {
            job_title: Some("Backend Engineer".into()),
            company_name: Some("Acme".into()),
            country: Some("India".into()),
            state: Some("Telangana".into()),
            city: Some("Hyderabad".into()),
            posted_by: Some("hr@acme.example".into()),
            experience: Some("3+ years".into()),
            salary: Some("12 LPA".into()),
            work_mode: vec!["Remote".into()],
            education: Some(vec!["BTech".into()]),
            job_type: Some(vec!["PartTime".into()]),
            description: Some("Build services".into()),
        }
    }

    #[test]
    fn test_full_input_validates() -> Result<()> {
        let job = full_input().into_new_job()?;
        assert_eq!(job.job_title, "Backend Engineer");
        assert_eq!(job.work_mode, vec!["Remote".to_string()]);
        Ok(())
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut input = full_input();
        input.job_title = None;
        assert!(matches!(
            input.into_new_job(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_missing_tag_lists_rejected() {
        let mut input = full_input();
        input.education = None;
        assert!(matches!(input.into_new_job(), Err(Error::Validation(_))));

        let mut input = full_input();
        input.job_type = None;
        assert!(matches!(input.into_new_job(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_work_mode_defaults_to_empty() -> Result<()> {
        let mut input = full_input();
        input.work_mode = Vec::new();
        let job = input.into_new_job()?;
        assert!(job.work_mode.is_empty());
        Ok(())
    }
}
