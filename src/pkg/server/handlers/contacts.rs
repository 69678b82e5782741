use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::{
            adaptors::contacts::mutators::ContactMutator,
            email::{SendEmail, contact::ContactAck},
        },
        server::{handlers::require, state::AppState},
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Value>> {
    let name = require(&input.name, "name")?.to_string();
    let email = require(&input.email, "email")?.to_string();

    let mut conn = state.db_pool.acquire().await?;
    let contact = ContactMutator::new(&mut conn).create(&name, &email).await?;
    tracing::info!("contact {} stored", contact.id);

    let email_sent = match (ContactAck {
        name: &contact.name,
    })
    .send(&contact.email)
    .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("contact ack email failed: {}", e);
            false
        }
    };

    Ok(Json(json!({
        "message": "Contact stored successfully!",
        "email_sent": email_sent,
    })))
}
