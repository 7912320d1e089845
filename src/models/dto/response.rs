use serde::Serialize;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the YouTube Quiz API! Send POST requests to /generate_quiz";

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        WelcomeResponse {
            message: WELCOME_MESSAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
