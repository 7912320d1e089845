use std::time::Duration;

use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::GenerateQuizRequest,
};

#[post("/generate_quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    http_request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&http_request).unwrap_or_default();
    log::info!("[{}] Generating quiz for {}", request_id, request.url);

    // The pipeline has no deadline of its own.
    let deadline = Duration::from_secs(state.config.request_timeout_secs);
    let quiz = tokio::time::timeout(deadline, state.quiz_service.generate_quiz(&request.url))
        .await
        .map_err(|_| {
            AppError::InternalError(format!(
                "[{}] quiz generation exceeded {}s deadline",
                request_id,
                deadline.as_secs()
            ))
        })?
        .inspect_err(|err| log::warn!("[{}] Quiz generation failed: {}", request_id, err))?;

    Ok(HttpResponse::Ok().json(quiz))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        config::Config,
        handlers::configure,
        middleware::RequestIdMiddleware,
        providers::{
            caption_provider::MockCaptionProvider, completion_provider::MockCompletionProvider,
            CompletionProvider,
        },
        test_utils::{
            fixtures::{sample_segments, valid_quiz_json},
            test_helpers::{assert_error_status, assert_success_status},
        },
    };

    use super::*;

    fn state(captions: MockCaptionProvider, completion: MockCompletionProvider) -> AppState {
        AppState::with_providers(
            Config::test_config(),
            Arc::new(captions),
            Arc::new(completion),
        )
    }

    /// Answers correctly, but only after the handler deadline has passed.
    struct SlowCompletionProvider {
        delay: Duration,
    }

    #[async_trait]
    impl CompletionProvider for SlowCompletionProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, String> {
            tokio::time::sleep(self.delay).await;
            Ok(valid_quiz_json())
        }
    }

    #[actix_web::test]
    async fn generate_quiz_returns_quiz_json() {
        let mut captions = MockCaptionProvider::new();
        captions
            .expect_fetch_captions()
            .returning(|_| Ok(sample_segments()));
        let mut completion = MockCompletionProvider::new();
        completion
            .expect_complete()
            .returning(|_| Ok(valid_quiz_json()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(captions, completion)))
                .wrap(RequestIdMiddleware)
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(serde_json::json!({ "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Never Gonna Quiz You Up");
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(5));
    }

    #[actix_web::test]
    async fn missing_transcript_maps_to_bad_request_with_detail() {
        let mut captions = MockCaptionProvider::new();
        captions
            .expect_fetch_captions()
            .returning(|_| Err("Transcripts are disabled for this video".to_string()));
        let mut completion = MockCompletionProvider::new();
        completion.expect_complete().never();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(captions, completion)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(serde_json::json!({ "url": "https://youtu.be/ABC123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["detail"],
            "Could not retrieve transcript: Transcripts are disabled for this video"
        );
    }

    #[actix_web::test]
    async fn empty_url_is_rejected_before_pipeline_runs() {
        let mut captions = MockCaptionProvider::new();
        captions.expect_fetch_captions().never();
        let mut completion = MockCompletionProvider::new();
        completion.expect_complete().never();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(captions, completion)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(serde_json::json!({ "url": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_body_uses_error_shape() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(
                    MockCaptionProvider::new(),
                    MockCompletionProvider::new(),
                )))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn unusable_identifier_is_generic_server_error() {
        let mut captions = MockCaptionProvider::new();
        captions.expect_fetch_captions().never();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(captions, MockCompletionProvider::new())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(serde_json::json!({ "url": "https://www.youtube.com/watch?v=&t=3" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Internal Server Error");
    }

    #[actix_web::test]
    async fn generation_past_deadline_is_generic_server_error() {
        let mut captions = MockCaptionProvider::new();
        captions
            .expect_fetch_captions()
            .times(1)
            .returning(|_| Ok(sample_segments()));
        let config = Config {
            request_timeout_secs: 1,
            ..Config::test_config()
        };
        let state = AppState::with_providers(
            config,
            Arc::new(captions),
            Arc::new(SlowCompletionProvider {
                delay: Duration::from_secs(3),
            }),
        );

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(RequestIdMiddleware)
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate_quiz")
            .set_json(serde_json::json!({ "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Internal Server Error");
    }
}
