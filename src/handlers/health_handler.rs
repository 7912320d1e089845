use actix_web::{get, HttpResponse};

use crate::models::dto::response::{HealthResponse, WelcomeResponse};

#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse::default())
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy())
}
