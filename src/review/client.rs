use super::{ReviewError, ReviewRequest, ReviewResult, Reviewer};
use crate::config::ServiceConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

const REVIEW_PATH: &str = "/review";

pub struct ReviewClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ReviewClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("postreview");
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            endpoint: review_endpoint(&config.url),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn review_endpoint(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), REVIEW_PATH)
}

#[async_trait]
impl Reviewer for ReviewClient {
    async fn review(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            platform = %request.platform,
            chars = request.text.chars().count(),
            "sending review request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Status(status));
        }

        let body = response.text().await?;
        let result: ReviewResult = serde_json::from_str(&body)?;

        tracing::info!(tone = %result.tone, "review received");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        bodies: Arc<Mutex<Vec<Value>>>,
        content_types: Arc<Mutex<Vec<String>>>,
    }

    async fn spawn_service(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(url: String) -> ReviewClient {
        ReviewClient::new(&ServiceConfig {
            url,
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    async fn echo_service(captured: Captured, reply: Value) -> String {
        let router = Router::new()
            .route(
                "/review",
                post(
                    move |State(captured): State<Captured>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            let content_type = headers
                                .get("content-type")
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or_default()
                                .to_string();
                            captured.content_types.lock().unwrap().push(content_type);
                            captured.bodies.lock().unwrap().push(body);
                            Json(reply)
                        }
                    },
                ),
            )
            .with_state(captured);
        spawn_service(router).await
    }

    fn example_reply() -> Value {
        json!({
            "tone": "Excited",
            "limitations": { "char_limit": 280, "hashtag_limit": 2 },
            "suggestions": "Add a call to action.",
            "revised_post": "🚀 Check out our new product! #Launch"
        })
    }

    #[test]
    fn test_review_endpoint_joins_path() {
        assert_eq!(
            review_endpoint("http://localhost:5000"),
            "http://localhost:5000/review"
        );
        assert_eq!(
            review_endpoint("http://localhost:5000/"),
            "http://localhost:5000/review"
        );
    }

    #[tokio::test]
    async fn test_review_end_to_end() {
        let captured = Captured::default();
        let url = echo_service(captured.clone(), example_reply()).await;
        let client = client_for(url);

        let request = ReviewRequest {
            text: "Check out our new product!".to_string(),
            platform: Platform::Twitter,
        };
        let result = client.review(&request).await.unwrap();

        assert_eq!(result.tone, "Excited");
        assert_eq!(result.limitations.char_limit, Some(280));
        assert_eq!(result.limitations.hashtag_limit, Some(2));
        assert_eq!(result.suggestions, "Add a call to action.");
        assert_eq!(result.revised_post, "🚀 Check out our new product! #Launch");

        let bodies = captured.bodies.lock().unwrap();
        assert_eq!(
            bodies.as_slice(),
            &[json!({"text": "Check out our new product!", "platform": "Twitter"})]
        );
        let content_types = captured.content_types.lock().unwrap();
        assert_eq!(content_types[0], "application/json");
    }

    #[tokio::test]
    async fn test_every_platform_is_sent_verbatim() {
        let captured = Captured::default();
        let url = echo_service(captured.clone(), example_reply()).await;
        let client = client_for(url);

        for platform in Platform::ALL {
            let request = ReviewRequest {
                text: String::new(),
                platform,
            };
            client.review(&request).await.unwrap();
        }

        let bodies = captured.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 4);
        for (body, platform) in bodies.iter().zip(Platform::ALL) {
            assert_eq!(body["platform"], platform.as_str());
            assert_eq!(body["text"], "");
        }
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let router = Router::new().route(
            "/review",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(spawn_service(router).await);
        let request = ReviewRequest {
            text: "hi".to_string(),
            platform: Platform::Facebook,
        };

        let err = client.review(&request).await.unwrap_err();
        assert!(matches!(
            err,
            ReviewError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(err.to_string().starts_with("review request failed"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let router = Router::new().route("/review", post(|| async { "not json at all" }));
        let client = client_for(spawn_service(router).await);
        let request = ReviewRequest {
            text: "hi".to_string(),
            platform: Platform::LinkedIn,
        };

        let err = client.review(&request).await.unwrap_err();
        assert!(matches!(err, ReviewError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let request = ReviewRequest {
            text: "hi".to_string(),
            platform: Platform::Instagram,
        };

        let err = client.review(&request).await.unwrap_err();
        assert!(matches!(err, ReviewError::Transport(_)));
    }
}
