use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::{
            adaptors::enrollments::mutators::EnrollmentMutator,
            email::{SendEmail, enrollment::EnrollmentConfirmation},
        },
        server::{handlers::require, state::AppState},
    },
    prelude::Result,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentInput {
    pub course_name: Option<String>,
    pub training_mode: Option<String>,
    pub duration: Option<String>,
    pub custom_duration: Option<i32>,
    pub requirements: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub preferred_days: Vec<String>,
    pub time_slot: Option<String>,
    pub custom_time: Option<String>,
}

pub struct NewEnrollment {
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
}

pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<EnrollmentInput>,
) -> Result<Json<Value>> {
    let preferred_days_line = input.preferred_days.join(", ");
    let enrollment = NewEnrollment {
        course_name: require(&input.course_name, "courseName")?.to_string(),
        training_mode: require(&input.training_mode, "trainingMode")?.to_string(),
        duration: require(&input.duration, "duration")?.to_string(),
        custom_duration: input.custom_duration,
        requirements: input.requirements,
        first_name: require(&input.first_name, "firstName")?.to_string(),
        last_name: require(&input.last_name, "lastName")?.to_string(),
        email: require(&input.email, "email")?.to_string(),
        phone: require(&input.phone, "phone")?.to_string(),
        education: input.education,
        location: input.location,
        preferred_days: if input.preferred_days.is_empty() {
            None
        } else {
            Some(input.preferred_days.join(","))
        },
        time_slot: input.time_slot,
        custom_time: input.custom_time,
    };

    let mut conn = state.db_pool.acquire().await?;
    let record = EnrollmentMutator::new(&mut conn).create(&enrollment).await?;
    tracing::info!("enrollment {} stored", record.id);

    let template = EnrollmentConfirmation {
        first_name: &record.first_name,
        course_name: &record.course_name,
        training_mode: &record.training_mode,
        duration: &record.duration,
        custom_duration: record.custom_duration,
        preferred_days: &preferred_days_line,
        time_slot: record.time_slot.as_deref().unwrap_or("-"),
        custom_time: record.custom_time.as_deref(),
    };
    let message = match template.send(&record.email).await {
        Ok(()) => "Enrollment submitted and email sent!",
        Err(e) => {
            tracing::error!("enrollment confirmation email failed: {}", e);
            "Enrollment submitted, but failed to send email."
        }
    };

    Ok(Json(json!({"message": message, "enrollmentId": record.id})))
}
