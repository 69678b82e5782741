use std::fmt::{self, Display};

use super::SendEmail;
use crate::conf::settings;

pub struct ApplicationReceived<'a> {
    pub name: &'a str,
    pub job_id: i32,
    pub email: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
}

impl<'a> Display for ApplicationReceived<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
            <p>Dear {},</p>
            <p>Thank you for applying to the job (ID: {}) at {}.</p>
            <p>We have successfully received your application and our team will review it shortly.</p>
            <br>
            <p><strong>Your Submitted Info:</strong></p>
            <ul>
              <li>Email: {}</li>
              <li>Phone: {}</li>
              <li>Location: {}</li>
            </ul>
            <br>
            <p>Regards,<br>{} Hiring Team</p>
            "#,
            self.name,
            self.job_id,
            &settings.service_name,
            self.email,
            self.phone,
            self.location,
            &settings.service_name
        )
    }
}

impl<'a> SendEmail for ApplicationReceived<'a> {
    fn subject(&self) -> String {
        format!("Application Received - {}", &settings.service_name)
    }
}
