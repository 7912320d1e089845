pub mod model_service;
pub mod prompt_service;
pub mod quiz_parser;
pub mod quiz_service;
pub mod transcript_service;
