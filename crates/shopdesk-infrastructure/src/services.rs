//! One-stop construction of every REST endpoint.

use shopdesk_core::ai::AiApi;
use shopdesk_core::cms::CmsApi;
use shopdesk_core::config::ShopdeskConfig;
use shopdesk_core::error::Result;
use shopdesk_core::footer::FooterApi;
use shopdesk_core::language::LanguageApi;
use shopdesk_core::product::ProductApi;
use shopdesk_core::translation::TranslationApi;
use std::sync::Arc;

use crate::endpoints::{
    RestAiApi, RestCmsApi, RestFooterApi, RestLanguageApi, RestProductApi, RestTranslationApi,
};
use crate::rest_client::RestClient;

/// Every endpoint, sharing one HTTP connection pool.
#[derive(Clone)]
pub struct ApiServices {
    pub products: Arc<dyn ProductApi>,
    pub languages: Arc<dyn LanguageApi>,
    pub translations: Arc<dyn TranslationApi>,
    pub cms: Arc<dyn CmsApi>,
    pub footers: Arc<dyn FooterApi>,
    pub ai: Arc<dyn AiApi>,
}

impl ApiServices {
    pub fn from_config(config: &ShopdeskConfig) -> Result<Self> {
        let client = RestClient::new(&config.api)?;
        tracing::debug!("[ApiServices] Using API at {}", client.base_url());
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: RestClient) -> Self {
        Self {
            products: Arc::new(RestProductApi::new(client.clone())),
            languages: Arc::new(RestLanguageApi::new(client.clone())),
            translations: Arc::new(RestTranslationApi::new(client.clone())),
            cms: Arc::new(RestCmsApi::new(client.clone())),
            footers: Arc::new(RestFooterApi::new(client.clone())),
            ai: Arc::new(RestAiApi::new(client)),
        }
    }
}
