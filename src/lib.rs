pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod inference;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::database::user_store::UserStore;
use crate::inference::SkinClassifier;
use crate::services::{
    analysis_service::AnalysisService, auth_service::AuthService, token_service::TokenService,
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub analysis_service: AnalysisService,
    pub token_service: TokenService,
}

impl AppState {
    pub fn new(
        config: &Config,
        user_store: Arc<dyn UserStore>,
        classifier: Arc<dyn SkinClassifier>,
    ) -> Self {
        let token_service = TokenService::new(&config.jwt_secret, config.jwt_expires_minutes);
        let auth_service = AuthService::new(user_store, token_service.clone());
        let analysis_service = AnalysisService::new(classifier);

        Self {
            auth_service,
            analysis_service,
            token_service,
        }
    }
}
