pub mod completion_client;
pub mod prompt_builder;
pub mod quiz_parser;
pub mod quiz_renderer;
pub mod quiz_service;
pub mod tutor_service;
