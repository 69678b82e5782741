use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::adaptors::jobs::{filters::JobSearchFilter, selectors::JobSelector, spec::Job},
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub title: Option<String>,
    pub skills: Option<String>,
    pub company: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub work_mode: Option<String>,
    pub job_type: Option<String>,
    pub education: Option<String>,
    #[serde(default)]
    pub exact_match: bool,
}

impl From<SearchParams> for JobSearchFilter {
    fn from(params: SearchParams) -> Self {
        JobSearchFilter {
            title: params.title,
            skills: params.skills,
            company: params.company,
            country: params.country,
            state: params.state,
            city: params.city,
            work_mode: params.work_mode,
            job_type: params.job_type,
            education: params.education,
            exact: params.exact_match,
        }
    }
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>> {
    list_jobs(&state, JobSearchFilter::from(params)).await
}

pub async fn all(State(state): State<AppState>) -> Result<Json<Value>> {
    list_jobs(&state, JobSearchFilter::default()).await
}

pub async fn wfh(State(state): State<AppState>) -> Result<Json<Value>> {
    list_jobs(
        &state,
        JobSearchFilter {
            job_type: Some("WFH".into()),
            ..Default::default()
        },
    )
    .await
}

pub async fn part_time(State(state): State<AppState>) -> Result<Json<Value>> {
    list_jobs(
        &state,
        JobSearchFilter {
            job_type: Some("PartTime".into()),
            ..Default::default()
        },
    )
    .await
}

pub async fn by_state(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>> {
    list_jobs(
        &state,
        JobSearchFilter {
            state: Some(name),
            ..Default::default()
        },
    )
    .await
}

pub async fn by_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>> {
    list_jobs(
        &state,
        JobSearchFilter {
            city: Some(name),
            ..Default::default()
        },
    )
    .await
}

async fn list_jobs(state: &AppState, filter: JobSearchFilter) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let records = JobSelector::new(&mut conn).search(&filter).await?;
    let jobs: Vec<Job> = records.into_iter().map(Job::from).collect();
    tracing::debug!("search returned {} jobs", jobs.len());
    Ok(Json(json!({"message": "Jobs fetched successfully", "jobs": jobs})))
}
