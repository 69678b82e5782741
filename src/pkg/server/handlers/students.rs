use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::students::{
                mutators::StudentMutator, selectors::StudentSelector, spec::StudentProfile,
            },
            auth::{
                Claims, Role, generate_student_id, hash_password, issue_token, verify_password,
            },
            email::{SendEmail, welcome::StudentWelcome},
        },
        server::{handlers::require, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Deserialize, Validate)]
pub struct RegisterStudentInput {
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub receive_updates: bool,
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStudentInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub receive_updates: bool,
    pub dateofbirth: Option<String>,
    pub address: Option<String>,
    // education snapshots arrive as structured objects and are stored in
    // their serialized form
    pub ssc: Option<Value>,
    pub intermediate: Option<Value>,
    pub ug: Option<String>,
    pub pg: Option<String>,
    pub experience: Option<String>,
    pub profile: Option<String>,
    pub resume: Option<String>,
}

/// Validated registration payload; the credential is already hashed.
pub struct NewStudent {
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub receive_updates: bool,
}

/// Validated update payload; a present password is already hashed.
pub struct UpdateStudent {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub receive_updates: bool,
    pub password: Option<String>,
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

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterStudentInput>,
) -> Result<(StatusCode, Json<Value>)> {
    input
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;
    let student = NewStudent {
        student_id: generate_student_id(),
        full_name: require(&input.full_name, "full_name")?.to_string(),
        email: require(&input.email, "email")?.to_string(),
        phone: require(&input.phone, "phone")?.to_string(),
        password: hash_password(require(&input.password, "password")?)?,
        receive_updates: input.receive_updates,
    };

    let mut tx = state.db_pool.begin().await?;
    if StudentSelector::new(&mut tx)
        .get_by_email(&student.email)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("Email already registered".into()));
    }
    let record = StudentMutator::new(&mut tx).create(&student).await?;
    tx.commit().await?;
    tracing::info!("student {} registered", &record.student_id);

    let email_sent = match (StudentWelcome {
        name: &record.full_name,
    })
    .send(&record.email)
    .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("welcome email failed: {}", e);
            false
        }
    };
    let message = if email_sent {
        "Registration successful. Email sent!"
    } else {
        "Registration successful, but email failed"
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": message,
            "student_id": record.student_id,
            "email_sent": email_sent,
        })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<Value>> {
    let email = require(&input.email, "email")?.to_string();
    let password = require(&input.password, "password")?.to_string();

    let mut conn = state.db_pool.acquire().await?;
    let student = StudentSelector::new(&mut conn)
        .get_by_email(&email)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid email or password".into()))?;
    if !verify_password(&password, &student.password)? {
        return Err(Error::Unauthorized("Invalid email or password".into()));
    }

    let token = issue_token(
        &student.student_id,
        &student.full_name,
        &student.email,
        Role::Student,
        &settings.jwt_secret,
    )?;
    tracing::info!("student {} logged in", &student.student_id);

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "token": token,
        "student": {
            "student_id": student.student_id,
            "full_name": student.full_name,
            "email": student.email,
            "phone": student.phone,
        },
    })))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
) -> Result<Json<Value>> {
    if claims.role != Role::Student {
        return Err(Error::Forbidden("student account required".into()));
    }
    let mut conn = state.db_pool.acquire().await?;
    let record = StudentSelector::new(&mut conn)
        .get_by_id(&claims.sub)
        .await?
        .ok_or_else(|| Error::NotFound("Student not found".into()))?;
    Ok(Json(json!({
        "success": true,
        "message": "Authenticated",
        "student": StudentProfile::from(record),
    })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(input): Json<UpdateStudentInput>,
) -> Result<Json<Value>> {
    let password = match input
        .password
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        Some(plain) => Some(hash_password(plain)?),
        None => None,
    };
    let student = UpdateStudent {
        full_name: require(&input.full_name, "full_name")?.to_string(),
        email: require(&input.email, "email")?.to_string(),
        phone: require(&input.phone, "phone")?.to_string(),
        receive_updates: input.receive_updates,
        password,
        dateofbirth: input.dateofbirth,
        address: input.address,
        ssc: input.ssc.map(serialize_snapshot),
        intermediate: input.intermediate.map(serialize_snapshot),
        ug: input.ug,
        pg: input.pg,
        experience: input.experience,
        profile: input.profile,
        resume: input.resume,
    };

    let mut conn = state.db_pool.acquire().await?;
    match StudentMutator::new(&mut conn)
        .update(&student_id, &student)
        .await?
    {
        Some(_) => Ok(Json(
            json!({"success": true, "message": "Profile updated successfully"}),
        )),
        None => Err(Error::NotFound("Student not found".into())),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    if StudentMutator::new(&mut conn).delete(&student_id).await? {
        Ok(Json(
            json!({"success": true, "message": "Student deleted successfully"}),
        ))
    } else {
        Err(Error::NotFound("Student not found".into()))
    }
}

fn serialize_snapshot(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_objects_are_serialized() {
        let value = json!({"school": "XYZ", "percentage": "88"});
        let stored = serialize_snapshot(value);
        assert!(stored.contains("\"school\""));
    }

    #[test]
    fn test_snapshot_strings_stay_plain() {
        assert_eq!(serialize_snapshot(json!("already text")), "already text");
    }
}
