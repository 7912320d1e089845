pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, home};
pub use quiz_handler::generate_quiz;

/// Routes plus a JSON extractor whose failures use the API error shape.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .service(home)
    .service(health_check)
    .service(generate_quiz);
}
