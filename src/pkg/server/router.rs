use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers;
use super::middlewares::authn;
use super::state::AppState;

const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/createJob", post(handlers::jobs::create))
        .route("/api/updateJob/:id", put(handlers::jobs::update))
        .route("/api/deleteJob/:id", delete(handlers::jobs::delete))
        .route(
            "/api/applications/:job_id",
            get(handlers::applications::list_for_job),
        )
        .route("/api/resume/:filename", get(handlers::applications::resume))
        .route("/api/profile", get(handlers::employers::profile))
        .route(
            "/api/employer-profile/:id",
            get(handlers::employers::profile_by_id),
        )
        .route("/api/update-employer/:id", put(handlers::employers::update))
        .route(
            "/api/delete-employer/:id",
            delete(handlers::employers::delete),
        )
        .route("/api/student-profile", get(handlers::students::profile))
        .route(
            "/api/update-profile/:student_id",
            put(handlers::students::update),
        )
        .route(
            "/api/delete-student/:student_id",
            delete(handlers::students::delete),
        )
        .layer(from_fn(authn::authenticate))
        .route("/api/register-employer", post(handlers::employers::register))
        .route("/api/login-employer", post(handlers::employers::login))
        .route("/api/register", post(handlers::students::register))
        .route("/api/login", post(handlers::students::login))
        .route("/api/getJobs", get(handlers::search::all))
        .route("/api/getJobs/WFH", get(handlers::search::wfh))
        .route("/api/getJobs/PartTime", get(handlers::search::part_time))
        .route("/api/getJobs/State/:name", get(handlers::search::by_state))
        .route("/api/getJobs/City/:name", get(handlers::search::by_city))
        .route("/api/getJobssearch", get(handlers::search::search))
        .route("/api/apply", post(handlers::applications::apply))
        .route("/api/contacts", post(handlers::contacts::create))
        .route("/api/submit-enrollment", post(handlers::enrollments::submit))
        .route("/healthz", get(handlers::probes::healthz))
        .route("/livez", get(handlers::probes::livez))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::conf::settings;
    use crate::pkg::internal::auth::{Role, issue_token};
    use crate::testutil::init_env;

    fn router() -> Router {
        init_env();
        // connect_lazy: no database round trip happens unless a handler
        // actually queries
        build_routes(AppState::new().expect("state"))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn livez_responds_ok() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_route_without_token_is_unauthorized() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn protected_route_with_garbage_token_is_forbidden() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .header("Authorization", "Bearer not-a-real-token")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn profile_echoes_token_identity() {
        let app = router();
        let token = issue_token(
            "7",
            "Asha",
            "asha@acme.example",
            Role::Employer,
            &settings.jwt_secret,
        )
        .expect("token issued");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(
            payload["user"]["email"].as_str(),
            Some("asha@acme.example")
        );
    }

    #[tokio::test]
    async fn contacts_missing_name_is_client_error() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contacts")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({"email": "a@b.c"})).expect("payload"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = body_json(response).await;
        assert_eq!(payload["success"].as_bool(), Some(false));
    }

    #[tokio::test]
    async fn register_employer_missing_field_is_client_error() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/register-employer")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "company_name": "Acme",
                            "employer_name": "Asha",
                            "email": "asha@acme.example",
                            "phone": "9999999999",
                        }))
                        .expect("payload"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_employer_bad_email_is_client_error() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/register-employer")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "company_name": "Acme",
                            "employer_name": "Asha",
                            "email": "not-an-email",
                            "phone": "9999999999",
                            "password": "hunter2",
                        }))
                        .expect("payload"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_rejects_malformed_exact_match_flag() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/getJobssearch?exactMatch=banana")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
