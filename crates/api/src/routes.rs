use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use creative_mock_core::domain::asset::AssetRecord;
use creative_mock_core::domain::concept::ConceptRecord;
use creative_mock_core::domain::filter::FilterList;
use creative_mock_core::domain::request::FilterRequest;
use creative_mock_core::domain::trend::{BreakdownList, ThemeTrends, TopElements, TrendRecord};
use creative_mock_core::domain::Envelope;
use creative_mock_core::payload;
use creative_mock_core::random::RandomDataProvider;

use crate::error::ApiError;
use crate::extract::JsonBody;

/// Legacy mount point, served alongside the bare paths.
pub const LEGACY_PREFIX: &str = "/creativeStrategy";

#[derive(Clone)]
pub struct AppState {
    pub random: Arc<dyn RandomDataProvider>,
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/filters", get(get_filters).fallback(not_found))
        .route(
            "/assetBreakdown/filters",
            get(get_asset_breakdown_filters).fallback(not_found),
        )
        .route("/concepts", post(post_concepts).fallback(not_found))
        .route(
            "/performanceTrends",
            post(post_performance_trends).fallback(not_found),
        )
        .route(
            "/performanceTrends/breakdowns",
            post(post_breakdowns).fallback(not_found),
        )
        .route(
            "/performanceTrends/themes",
            post(post_themes).fallback(not_found),
        )
        .route(
            "/performanceTrends/topElements",
            post(post_top_elements).fallback(not_found),
        )
        .route(
            "/assetBreakdown",
            post(post_asset_breakdown).fallback(not_found),
        );

    Router::new()
        .route("/healthz", get(healthz).fallback(not_found))
        .merge(api.clone())
        .nest(LEGACY_PREFIX, api)
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn get_filters() -> Json<Envelope<FilterList>> {
    Json(payload::creative_filters())
}

async fn get_asset_breakdown_filters() -> Json<Envelope<FilterList>> {
    Json(payload::asset_breakdown_filters())
}

async fn post_concepts(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FilterRequest>,
) -> Json<Envelope<Vec<ConceptRecord>>> {
    tracing::debug!(concept = ?req.filters.concept(), "concepts requested");
    Json(payload::concepts(&req.filters, state.random.as_ref()))
}

async fn post_performance_trends(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FilterRequest>,
) -> Json<Envelope<Vec<TrendRecord>>> {
    tracing::debug!(filters = ?req.filters, "performance trends requested");
    Json(payload::performance_trends(state.random.as_ref()))
}

async fn post_breakdowns(
    JsonBody(req): JsonBody<FilterRequest>,
) -> Json<Envelope<BreakdownList>> {
    tracing::debug!(filters = ?req.filters, "breakdowns requested");
    Json(payload::breakdowns())
}

async fn post_themes(JsonBody(req): JsonBody<FilterRequest>) -> Json<Envelope<ThemeTrends>> {
    tracing::debug!(filters = ?req.filters, "themes requested");
    Json(payload::themes())
}

async fn post_top_elements(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FilterRequest>,
) -> Json<Envelope<TopElements>> {
    tracing::debug!(filters = ?req.filters, "top elements requested");
    Json(payload::top_elements(state.random.as_ref()))
}

async fn post_asset_breakdown(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FilterRequest>,
) -> Json<Envelope<Vec<AssetRecord>>> {
    tracing::debug!(filters = ?req.filters, "asset breakdown requested");
    Json(payload::asset_breakdown(state.random.as_ref()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use creative_mock_core::random::{FakerProvider, FixedProvider};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState {
            random: Arc::new(FakerProvider::seeded(99)),
        })
    }

    fn fixed_app() -> Router {
        router(AppState {
            random: Arc::new(FixedProvider::default()),
        })
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_req(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn is_https_url(s: &str) -> bool {
        s.parse::<axum::http::Uri>()
            .map(|uri| uri.scheme_str() == Some("https") && uri.host().is_some())
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let response = app().oneshot(get_req("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    async fn raw_body(app: Router, req: Request<Body>) -> axum::body::Bytes {
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn filters_are_json_and_idempotent() {
        for uri in ["/filters", "/assetBreakdown/filters"] {
            let first = raw_body(app(), get_req(uri)).await;
            let second = raw_body(app(), get_req(uri)).await;
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn payload_keys_keep_field_order() {
        let body = raw_body(fixed_app(), post_req("/concepts", "{}")).await;
        let text = std::str::from_utf8(&body).unwrap();
        let name = text.find("\"concept_name\"").unwrap();
        let rate = text.find("\"win_rate\"").unwrap();
        let count = text.find("\"asset_count\"").unwrap();
        assert!(name < rate && rate < count, "{text}");
    }

    #[tokio::test]
    async fn concepts_echo_requested_concept() {
        let body = json!({"filters": {"concept": "Holiday Promo", "asset_type": "video"}});
        let (status, v) = send(app(), post_req("/concepts", body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let data = v["data"].as_array().unwrap();
        assert_eq!(data.len(), payload::CONCEPT_COUNT);
        assert!(data
            .iter()
            .all(|c| c["concept_name"] == json!("Holiday Promo")));
    }

    #[tokio::test]
    async fn concepts_default_missing_filters() {
        for body in ["", "{}", r#"{"filters": null}"#] {
            let (status, v) = send(fixed_app(), post_req("/concepts", body)).await;
            assert_eq!(status, StatusCode::OK, "body {body:?}");
            assert_eq!(
                v["data"][0],
                json!({"concept_name": "lorem", "win_rate": "1.00%", "asset_count": 10})
            );
        }
    }

    #[tokio::test]
    async fn breakdown_top_trend_matches_data() {
        let (status, v) = send(app(), post_req("/performanceTrends/breakdowns", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        for trend in v["data"]["trends"].as_array().unwrap() {
            let tops: Vec<_> = trend["breakdown"]["values"]
                .as_array()
                .unwrap()
                .iter()
                .filter(|value| value["is_top_trend"] == json!(true))
                .collect();
            assert_eq!(tops.len(), 1);
            for key in ["type", "assets", "total_assets"] {
                assert_eq!(tops[0][key], trend["data"][key], "{}", trend["label"]);
            }
        }
    }

    #[tokio::test]
    async fn themes_are_nested_under_trends() {
        let (status, v) = send(app(), post_req("/performanceTrends/themes", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        let values = v["data"]["trends"]["theme"]["breakdown"]["values"]
            .as_array()
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["type"], json!("DARK"));
        assert_eq!(values[1]["type"], json!("LIGHT"));
    }

    #[tokio::test]
    async fn performance_trends_flag_coming_soon() {
        let (status, v) = send(fixed_app(), post_req("/performanceTrends", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        let data = v["data"].as_array().unwrap();
        assert_eq!(data.len(), 7);
        assert_eq!(data[0]["type"], json!("THEME"));
        assert_eq!(data[0]["assets"], json!("50%"));
        assert_eq!(data[6]["type"], json!("CALL_TO_ACTION"));
        assert_eq!(data[6]["is_coming_soon"], json!(true));
        assert!(data[6].get("assets").is_none());
    }

    #[tokio::test]
    async fn top_elements_are_listed_under_label() {
        let (status, v) = send(app(), post_req("/performanceTrends/topElements", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["label"], json!("Top recurring objects"));
        let elements = v["data"]["top_recurring_elements"].as_array().unwrap();
        assert!(!elements.is_empty() && elements.len() <= 15);
    }

    #[tokio::test]
    async fn asset_breakdown_has_two_valid_assets() {
        let (status, v) = send(app(), post_req("/assetBreakdown", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        let assets = v["data"].as_array().unwrap();
        assert_eq!(assets.len(), 2);
        for asset in assets {
            let id = asset["asset_id"].as_str().unwrap();
            assert!(uuid::Uuid::parse_str(id).is_ok(), "{id}");
            for key in ["thumbnail_link", "creative_link", "image_url"] {
                let link = asset[key].as_str().unwrap();
                assert!(is_https_url(link), "{key}: {link}");
            }
        }
    }

    #[tokio::test]
    async fn legacy_prefix_serves_same_routes() {
        let (status, prefixed) = send(app(), get_req("/creativeStrategy/filters")).await;
        assert_eq!(status, StatusCode::OK);
        let (_, bare) = send(app(), get_req("/filters")).await;
        assert_eq!(prefixed, bare);

        let (status, _) = send(app(), post_req("/creativeStrategy/concepts", "{}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let (status, v) = send(app(), get_req("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(v, json!({"error": "not found"}));

        let (status, _) = send(app(), get_req("/concepts")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app(), post_req("/filters", "{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        for uri in [
            "/concepts",
            "/performanceTrends",
            "/performanceTrends/breakdowns",
            "/performanceTrends/themes",
            "/performanceTrends/topElements",
            "/assetBreakdown",
        ] {
            let (status, v) = send(app(), post_req(uri, "{\"filters\": ")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(v["error"].as_str().unwrap().starts_with("invalid JSON body"));
        }
    }

    #[tokio::test]
    async fn wrongly_typed_filters_are_bad_request() {
        let (status, v) = send(app(), post_req("/concepts", r#"{"filters": 3}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(v["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request body"));
    }

    #[tokio::test]
    async fn scalar_concept_is_echoed_as_text() {
        let body = r#"{"filters": {"concept": 2024}}"#;
        let (status, v) = send(app(), post_req("/concepts", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"][0]["concept_name"], json!("2024"));
    }

    #[tokio::test]
    async fn padded_concept_is_echoed_verbatim() {
        let body = json!({"filters": {"concept": "  Holiday Promo "}});
        let (status, v) = send(app(), post_req("/concepts", body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        for concept in v["data"].as_array().unwrap() {
            assert_eq!(concept["concept_name"], json!("  Holiday Promo "));
        }
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let req = Request::builder()
            .uri("/filters")
            .header(header::ORIGIN, "https://frontend.example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn panics_become_internal_errors() {
        async fn boom() -> &'static str {
            panic!("kaboom")
        }
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));
        let (status, v) = send(app, get_req("/boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(v, json!({"error": "internal server error"}));
    }
}
