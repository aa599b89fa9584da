pub mod analysis_service;
pub mod auth_service;
pub mod recommendation_service;
pub mod token_service;
