const JOB_COLUMNS: &str = "id, job_title, company_name, country, state, city, posted_by, experience, salary, work_mode, education, job_type, description, created_at, updated_at";

/// Optional search criteria over the job collection. Absent criteria impose
/// no constraint; present criteria are combined with AND.
///
/// Scalar text fields honour the `exact` switch: equality when set, otherwise
/// case-insensitive substring containment. Tag-set fields always match on
/// containment of the given label in the serialized set, independent of
/// `exact`.
#[derive(Debug, Default, Clone)]
pub struct JobSearchFilter {
    pub title: Option<String>,
    pub skills: Option<String>,
    pub company: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub work_mode: Option<String>,
    pub job_type: Option<String>,
    pub education: Option<String>,
    pub exact: bool,
}

impl JobSearchFilter {
    /// Render the filter as one parameterized statement plus its bind values.
    pub fn build(&self) -> (String, Vec<String>) {
        let mut params: Vec<String> = Vec::new();
        let mut clauses: Vec<String> = Vec::new();

        // the job record carries no dedicated skills column; skills terms
        // match against the description
        let scalar: [(&str, &Option<String>); 6] = [
            ("job_title", &self.title),
            ("description", &self.skills),
            ("company_name", &self.company),
            ("country", &self.country),
            ("state", &self.state),
            ("city", &self.city),
        ];
        for (column, value) in scalar {
            if let Some(value) = present(value) {
                if self.exact {
                    params.push(value.to_string());
                    clauses.push(format!("{} = ${}", column, params.len()));
                } else {
                    params.push(format!("%{}%", value));
                    clauses.push(format!("{} ILIKE ${}", column, params.len()));
                }
            }
        }

        // tag labels are stored as a serialized JSON array, so containment of
        // the quoted label is containment in the set; malformed payloads can
        // never contain a quoted label and drop out naturally
        let tags: [(&str, &Option<String>); 3] = [
            ("work_mode", &self.work_mode),
            ("job_type", &self.job_type),
            ("education", &self.education),
        ];
        for (column, value) in tags {
            if let Some(tag) = present(value) {
                params.push(format!("%\"{}\"%", tag));
                clauses.push(format!("{} LIKE ${}", column, params.len()));
            }
        }

        let mut sql = format!("SELECT {} FROM jobs", JOB_COLUMNS);
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        (sql, params)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_selects_everything() {
        let (sql, params) = JobSearchFilter::default().build();
        assert!(!sql.contains("WHERE"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_substring_mode_uses_ilike_patterns() {
        let filter = JobSearchFilter {
            title: Some("Engineer".into()),
            ..Default::default()
        };
        let (sql, params) = filter.build();
        assert!(sql.ends_with("WHERE job_title ILIKE $1"));
        assert_eq!(params, vec!["%Engineer%"]);
    }

    #[test]
    fn test_exact_mode_uses_equality() {
        let filter = JobSearchFilter {
            title: Some("Engineer".into()),
            exact: true,
            ..Default::default()
        };
        let (sql, params) = filter.build();
        assert!(sql.ends_with("WHERE job_title = $1"));
        assert_eq!(params, vec!["Engineer"]);
    }

    #[test]
    fn test_tag_filters_ignore_exact_switch() {
        for exact in [false, true] {
            let filter = JobSearchFilter {
                work_mode: Some("Remote".into()),
                exact,
                ..Default::default()
            };
            let (sql, params) = filter.build();
            assert!(sql.ends_with("WHERE work_mode LIKE $1"));
            assert_eq!(params, vec!["%\"Remote\"%"]);
        }
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = JobSearchFilter {
            title: Some("Engineer".into()),
            company: Some("Acme".into()),
            state: Some("Telangana".into()),
            job_type: Some("PartTime".into()),
            ..Default::default()
        };
        let (sql, params) = filter.build();
        assert_eq!(
            sql,
            format!(
                "SELECT {} FROM jobs WHERE job_title ILIKE $1 AND company_name ILIKE $2 \
                 AND state ILIKE $3 AND job_type LIKE $4",
                JOB_COLUMNS
            )
        );
        assert_eq!(
            params,
            vec!["%Engineer%", "%Acme%", "%Telangana%", "%\"PartTime\"%"]
        );
    }

    #[test]
    fn test_skills_criterion_targets_description() {
        let filter = JobSearchFilter {
            skills: Some("rust".into()),
            ..Default::default()
        };
        let (sql, _) = filter.build();
        assert!(sql.contains("description ILIKE $1"));
    }

    #[test]
    fn test_blank_criteria_are_ignored() {
        let filter = JobSearchFilter {
            title: Some("  ".into()),
            city: Some(String::new()),
            ..Default::default()
        };
        let (sql, params) = filter.build();
        assert!(!sql.contains("WHERE"));
        assert!(params.is_empty());
    }
}
