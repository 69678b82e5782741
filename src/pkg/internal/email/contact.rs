use std::fmt::{self, Display};

use super::SendEmail;
use crate::conf::settings;

pub struct ContactAck<'a> {
    pub name: &'a str,
}

impl<'a> Display for ContactAck<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"
            <p>Hi {},</p>
            <p>We received your message and will get back to you shortly.</p>
            <p>Regards,<br>{} Team</p>
            "#,
            self.name,
            &settings.service_name
        )
    }
}

impl<'a> SendEmail for ContactAck<'a> {
    fn subject(&self) -> String {
        format!("We received your message - {}", &settings.service_name)
    }
}
