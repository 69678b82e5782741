use std::fmt::{self, Display};

use super::SendEmail;
use crate::conf::settings;

pub struct StudentWelcome<'a> {
    pub name: &'a str,
}

impl<'a> Display for StudentWelcome<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dear {},\n\nThank you for registering with {}.\n\nBest regards,\n{} Team",
            self.name, &settings.service_name, &settings.service_name
        )
    }
}

impl<'a> SendEmail for StudentWelcome<'a> {
    fn subject(&self) -> String {
        format!("Registration Successful - {}", &settings.service_name)
    }

    fn is_html(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::init_env;

    #[test]
    fn test_template_greets_the_student() {
        init_env();
        let tpl = StudentWelcome { name: "Priya" };
        assert!(tpl.to_string().starts_with("Dear Priya,"));
        assert!(!tpl.is_html());
        assert!(tpl.subject().starts_with("Registration Successful"));
    }
}
