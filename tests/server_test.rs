use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use portfolio_site::core::sections::SectionId;
use portfolio_site::{
    create_router, AppState, ContactService, MemorySink, PageRenderer, PortfolioContent,
    SiteConfig,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn app(sink: MemorySink, resume_path: &str) -> Router {
    let mut config = SiteConfig::default();
    config.assets.resume_path = resume_path.to_string();
    let renderer = PageRenderer::new(config, PortfolioContent::builtin().unwrap());
    create_router(AppState::new(renderer, ContactService::new(Arc::new(sink))))
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_contact(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_index_renders_all_sections() {
    let app = app(MemorySink::new(), "resume.pdf");
    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    for id in SectionId::ALL {
        assert!(html.contains(&format!(" id=\"{}\"", id.anchor())), "missing #{}", id.anchor());
    }
    assert!(html.contains("<title>ML Engineer Portfolio</title>"));
    assert!(html.contains("Real-time Object Detection System"));
}

#[tokio::test]
async fn test_contact_with_empty_required_fields_warns() {
    let sink = MemorySink::new();
    let app = app(sink.clone(), "resume.pdf");

    let resp = app
        .oneshot(post_contact("name=&email=&subject=Hello&message="))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(resp).await;
    assert!(html.contains("Please fill all required fields"));
    assert!(html.contains("value=\"Hello\""));
    assert!(sink.messages().await.is_empty());
}

#[tokio::test]
async fn test_contact_success_resets_fields() {
    let sink = MemorySink::new();
    let app = app(sink.clone(), "resume.pdf");

    let resp = app
        .oneshot(post_contact(
            "name=Jane&email=jane%40x.com&subject=&message=Hi",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Message sent successfully! I will get back to you soon."));
    assert!(!html.contains("value=\"Jane\""));
    assert!(!html.contains("value=\"jane@x.com\""));
    assert!(html.contains(">\n</textarea>"));

    let messages = sink.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].email, "jane@x.com");
    assert_eq!(messages[0].message, "Hi");
}

#[tokio::test]
async fn test_contact_missing_params_treated_as_empty() {
    let app = app(MemorySink::new(), "resume.pdf");
    let resp = app.oneshot(post_contact("name=Jane")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_radar_endpoint_matches_ratings_order() {
    let app = app(MemorySink::new(), "resume.pdf");
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/skills/radar")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();

    let content = PortfolioContent::builtin().unwrap();
    let expected: Vec<&str> = content.ratings.iter().map(|(k, _)| k).collect();
    let theta: Vec<&str> = json["data"][0]["theta"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(theta, expected);
    assert_eq!(json["data"][0]["name"], "Skills");
}

#[tokio::test]
async fn test_project_redirect_bound_to_index() {
    let app = app(MemorySink::new(), "resume.pdf");

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/projects/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "https://github.com/alexjohnson/nlp-support-chatbot"
    );

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/projects/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resume_download() {
    let temp_dir = TempDir::new().unwrap();
    let resume = temp_dir.path().join("resume.pdf");
    std::fs::write(&resume, b"%PDF-1.4 test").unwrap();

    let app = app(MemorySink::new(), resume.to_str().unwrap());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/resume.pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert!(resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("attachment"));
    assert_eq!(body_string(resp).await, "%PDF-1.4 test");
}

#[tokio::test]
async fn test_missing_resume_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.pdf");

    let app = app(MemorySink::new(), missing.to_str().unwrap());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/resume.pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health() {
    let app = app(MemorySink::new(), "resume.pdf");
    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "OK");
}
