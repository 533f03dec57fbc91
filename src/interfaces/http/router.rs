//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{CustomerRepository, CustomerService};
use crate::interfaces::http::error::ApiError;
use crate::interfaces::http::modules::customers::{
    self, CustomerAppState, CustomerResponse, RegisterCustomerRequest, UpdateCustomerRequest,
};
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::metrics::{self, MetricsState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::ping,
        health::handlers::health_check,
        // Customers
        customers::handlers::list_customers,
        customers::handlers::get_customer,
        customers::handlers::register_customer,
        customers::handlers::update_customer,
        customers::handlers::delete_customer,
    ),
    components(
        schemas(
            ApiError,
            CustomerResponse,
            RegisterCustomerRequest,
            UpdateCustomerRequest,
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
            health::handlers::PingResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Customers", description = "Customer CRUD operations"),
    ),
    info(
        title = "Customer Service API",
        version = "1.0.0",
        description = "REST API for managing customer records",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    service: Arc<CustomerService>,
    repository: Arc<dyn CustomerRepository>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let customer_routes = Router::new()
        .route(
            "/",
            get(customers::handlers::list_customers).post(customers::handlers::register_customer),
        )
        .route(
            "/{id}",
            get(customers::handlers::get_customer)
                .put(customers::handlers::update_customer)
                .delete(customers::handlers::delete_customer),
        )
        .with_state(CustomerAppState { service });

    let health_state = HealthState {
        repository,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = MetricsState {
        handle: prometheus_handle,
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/ping", get(health::handlers::ping))
        .route(
            "/health",
            get(health::handlers::health_check).with_state(health_state),
        )
        // Prometheus scrape endpoint
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        // Customers
        .nest("/api/v1/customers", customer_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::track_http_metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::storage::InMemoryCustomerRepository;

    /// Router over an in-memory store seeded with the fixture rows.
    fn router() -> Router {
        let repository: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
        let service = Arc::new(CustomerService::new(repository.clone()));
        let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
            .build_recorder()
            .handle();
        create_api_router(service, repository, handle)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn listing_customers_returns_200_with_the_seeded_rows() {
        let response = router().oneshot(get("/api/v1/customers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[0]["name"], "Alex");
        assert_eq!(body[0]["email"], "alex@gmail.com");
    }

    #[tokio::test]
    async fn getting_a_missing_customer_returns_404_with_the_error_body() {
        let response = router().oneshot(get("/api/v1/customers/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "customer id [99] not found!");
        assert_eq!(body["statusCode"], 404);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn registering_a_customer_returns_204_and_persists_it() {
        let app = router();

        let response = app
            .clone()
            .oneshot(json(
                "POST",
                "/api/v1/customers",
                r#"{"name": "Maria", "email": "maria@example.com", "age": 30}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get("/api/v1/customers/3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["email"], "maria@example.com");
    }

    #[tokio::test]
    async fn registering_a_taken_email_returns_409() {
        let response = router()
            .oneshot(json(
                "POST",
                "/api/v1/customers",
                r#"{"name": "Another Alex", "email": "alex@gmail.com", "age": 40}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Email already taken!");
    }

    #[tokio::test]
    async fn registering_with_invalid_fields_returns_422() {
        let response = router()
            .oneshot(json(
                "POST",
                "/api/v1/customers",
                r#"{"name": "Kid", "email": "kid@example.com", "age": 7}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_without_changes_returns_400() {
        let response = router()
            .oneshot(json(
                "PUT",
                "/api/v1/customers/1",
                r#"{"name": "Alex", "email": "alex@gmail.com", "age": 21}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Request does not contain any changes!");
    }

    #[tokio::test]
    async fn partial_update_returns_204_and_keeps_absent_fields() {
        let app = router();

        let response = app
            .clone()
            .oneshot(json(
                "PUT",
                "/api/v1/customers/1",
                r#"{"name": "Alexandro", "email": null, "age": null}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = body_json(app.oneshot(get("/api/v1/customers/1")).await.unwrap()).await;
        assert_eq!(body["name"], "Alexandro");
        assert_eq!(body["email"], "alex@gmail.com");
        assert_eq!(body["age"], 21);
    }

    #[tokio::test]
    async fn deleting_a_customer_returns_204_then_404() {
        let app = router();

        let delete = Request::builder()
            .method("DELETE")
            .uri("/api/v1/customers/1")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get("/api/v1/customers/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn ping_answers_pong() {
        let response = router().oneshot(get("/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "Pong");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = router().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
