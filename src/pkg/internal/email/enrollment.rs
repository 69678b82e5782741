use std::fmt::{self, Display};

use super::SendEmail;
use crate::conf::settings;

pub struct EnrollmentConfirmation<'a> {
    pub first_name: &'a str,
    pub course_name: &'a str,
    pub training_mode: &'a str,
    pub duration: &'a str,
    pub custom_duration: Option<i32>,
    pub preferred_days: &'a str,
    pub time_slot: &'a str,
    pub custom_time: Option<&'a str>,
}

impl<'a> Display for EnrollmentConfirmation<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = match self.custom_duration {
            Some(weeks) => format!("{} ({} weeks)", self.duration, weeks),
            None => self.duration.to_string(),
        };
        let time_slot = match self.custom_time {
            Some(custom) if !custom.is_empty() => format!("{} ({})", self.time_slot, custom),
            _ => self.time_slot.to_string(),
        };
        write!(
            f,
            r#"
            <h3>Hi {},</h3>
            <p>Thank you for enrolling in our <strong>{}</strong> training program.</p>
            <p><strong>Mode:</strong> {}<br>
            <strong>Duration:</strong> {}<br>
            <strong>Preferred Days:</strong> {}<br>
            <strong>Time Slot:</strong> {}</p>
            <p>We will contact you soon to finalize the schedule.</p>
            <br><p>Best Regards,<br><strong>{} Team</strong></p>
            "#,
            self.first_name,
            self.course_name,
            self.training_mode,
            duration,
            self.preferred_days,
            time_slot,
            &settings.service_name
        )
    }
}

impl<'a> SendEmail for EnrollmentConfirmation<'a> {
    fn subject(&self) -> String {
        "Enrollment Confirmation".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::init_env;

    fn template() -> EnrollmentConfirmation<'static> {
        EnrollmentConfirmation {
            first_name: "Ravi",
            course_name: "Rust Bootcamp",
            training_mode: "Online",
            duration: "8 weeks",
            custom_duration: None,
            preferred_days: "Mon, Wed",
            time_slot: "Evening",
            custom_time: None,
        }
    }

    #[test]
    fn test_template_interpolates_submission() {
        init_env();
        let body = template().to_string();
        assert!(body.contains("Hi Ravi"));
        assert!(body.contains("Rust Bootcamp"));
        assert!(body.contains("Mon, Wed"));
        assert!(body.contains("Evening"));
    }

    #[test]
    fn test_custom_duration_and_time_are_appended() {
        init_env();
        let mut tpl = template();
        tpl.custom_duration = Some(12);
        tpl.custom_time = Some("7pm-9pm");
        let body = tpl.to_string();
        assert!(body.contains("8 weeks (12 weeks)"));
        assert!(body.contains("Evening (7pm-9pm)"));
    }
}
