use std::fmt::Display;

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod application;
pub mod contact;
pub mod enrollment;
pub mod welcome;

use crate::{
    conf::settings,
    prelude::{Error, Result},
};

// delivery is best-effort: callers log a failure and report it as a secondary
// flag, the primary write has already succeeded
pub trait SendEmail: Display {
    fn subject(&self) -> String;

    fn is_html(&self) -> bool {
        true
    }

    async fn send(&self, email: &str) -> Result<()> {
        send_email(email, &self.subject(), &self.to_string(), self.is_html()).await
    }
}

pub async fn send_email(email: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
    let (name, _) = email.split_once('@').unwrap_or(("unknown", ""));
    let name = name.to_string();
    let email = email.to_string();
    let subject = subject.to_string();
    let body = body.to_string();
    tracing::debug!("sending email to {}", &email);
    tokio::task::spawn_blocking(move || -> Result<()> {
        let content_type = if is_html {
            ContentType::TEXT_HTML
        } else {
            ContentType::TEXT_PLAIN
        };

        let message = Message::builder()
            .from(
                format!("{} <{}>", &settings.service_name, &settings.from_email)
                    .parse::<Mailbox>()
                    .map_err(|e| Error::Email(e.to_string()))?,
            )
            .to(format!("{} <{}>", &name, &email)
                .parse::<Mailbox>()
                .map_err(|e| Error::Email(e.to_string()))?)
            .subject(subject)
            .header(content_type)
            .body(body)
            .map_err(|e| Error::Email(e.to_string()))?;

        let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());

        let mailer = SmtpTransport::relay(&settings.smtp_server)
            .map_err(|e| Error::Email(e.to_string()))?
            .port(settings.smtp_port)
            .credentials(creds)
            .build();

        mailer.send(&message).map_err(|e| Error::Email(e.to_string()))?;
        Ok(())
    })
    .await
    .map_err(|e| Error::Email(e.to_string()))?
}
