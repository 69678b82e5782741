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
            adaptors::employers::{
                mutators::EmployerMutator, selectors::EmployerSelector, spec::EmployerProfile,
            },
            auth::{Claims, Role, hash_password, issue_token, verify_password},
        },
        server::{handlers::require, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Deserialize, Validate)]
pub struct RegisterEmployerInput {
    pub company_name: Option<String>,
    pub employer_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEmployerInput {
    pub company_name: Option<String>,
    pub employer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub designation: Option<String>,
    pub experience: Option<String>,
    pub companytype: Option<String>,
    pub summary: Option<String>,
    pub aboutus: Option<String>,
}

/// Validated registration payload; the credential is already hashed.
pub struct NewEmployer {
    pub company_name: String,
    pub employer_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Validated update payload; a present password is already hashed.
pub struct UpdateEmployer {
    pub company_name: String,
    pub employer_name: String,
    pub email: String,
    pub phone: String,
    pub password: Option<String>,
    pub username: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub designation: Option<String>,
    pub experience: Option<String>,
    pub companytype: Option<String>,
    pub summary: Option<String>,
    pub aboutus: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterEmployerInput>,
) -> Result<(StatusCode, Json<Value>)> {
    input
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;
    let employer = NewEmployer {
        company_name: require(&input.company_name, "company_name")?.to_string(),
        employer_name: require(&input.employer_name, "employer_name")?.to_string(),
        email: require(&input.email, "email")?.to_string(),
        phone: require(&input.phone, "phone")?.to_string(),
        password: hash_password(require(&input.password, "password")?)?,
    };

    let mut tx = state.db_pool.begin().await?;
    if EmployerSelector::new(&mut tx)
        .get_by_email(&employer.email)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("Email address already registered".into()));
    }
    let record = EmployerMutator::new(&mut tx).create(&employer).await?;
    tx.commit().await?;
    tracing::info!("employer {} registered", record.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "message": "Registration successful"})),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<Value>> {
    let email = require(&input.email, "email")?.to_string();
    let password = require(&input.password, "password")?.to_string();

    let mut conn = state.db_pool.acquire().await?;
    let employer = EmployerSelector::new(&mut conn)
        .get_by_email(&email)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid email or password".into()))?;
    if !verify_password(&password, &employer.password)? {
        return Err(Error::Unauthorized("Invalid email or password".into()));
    }

    let token = issue_token(
        &employer.id.to_string(),
        &employer.employer_name,
        &employer.email,
        Role::Employer,
        &settings.jwt_secret,
    )?;
    tracing::info!("employer {} logged in", employer.id);

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "token": token,
        "user": {
            "id": employer.id,
            "company_name": employer.company_name,
            "employer_name": employer.employer_name,
            "email": employer.email,
        },
    })))
}

// identity comes straight from the verified token, no storage round trip
pub async fn profile(Extension(claims): Extension<Arc<Claims>>) -> Result<Json<Value>> {
    if claims.role != Role::Employer {
        return Err(Error::Forbidden("employer account required".into()));
    }
    Ok(Json(json!({
        "success": true,
        "message": "Authenticated",
        "user": {"id": claims.sub, "name": claims.name, "email": claims.email},
    })))
}

pub async fn profile_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let record = EmployerSelector::new(&mut conn)
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Employer not found".into()))?;
    Ok(Json(
        json!({"success": true, "profile": EmployerProfile::from(record)}),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateEmployerInput>,
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
    let employer = UpdateEmployer {
        company_name: require(&input.company_name, "company_name")?.to_string(),
        employer_name: require(&input.employer_name, "employer_name")?.to_string(),
        email: require(&input.email, "email")?.to_string(),
        phone: require(&input.phone, "phone")?.to_string(),
        password,
        username: input.username,
        industry: input.industry,
        location: input.location,
        designation: input.designation,
        experience: input.experience,
        companytype: input.companytype,
        summary: input.summary,
        aboutus: input.aboutus,
    };

    let mut conn = state.db_pool.acquire().await?;
    match EmployerMutator::new(&mut conn).update(id, &employer).await? {
        Some(_) => Ok(Json(
            json!({"success": true, "message": "Employer profile updated successfully"}),
        )),
        None => Err(Error::NotFound("Employer not found".into())),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    if EmployerMutator::new(&mut conn).delete(id).await? {
        Ok(Json(
            json!({"success": true, "message": "Employer deleted successfully"}),
        ))
    } else {
        Err(Error::NotFound("Employer not found".into()))
    }
}
