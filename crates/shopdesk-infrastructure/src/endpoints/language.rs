use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use shopdesk_core::error::Result;
use shopdesk_core::language::{Language, LanguageApi, LanguageInput};

use super::segment;
use crate::rest_client::RestClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    include_disabled: bool,
}

#[derive(Clone)]
pub struct RestLanguageApi {
    client: RestClient,
}

impl RestLanguageApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LanguageApi for RestLanguageApi {
    async fn list(&self, include_disabled: bool) -> Result<Vec<Language>> {
        self.client
            .get_with_query("/languages", &ListQuery { include_disabled })
            .await
    }

    async fn create(&self, input: &LanguageInput) -> Result<Language> {
        self.client.post("/languages", input).await
    }

    async fn update(&self, code: &str, input: &LanguageInput) -> Result<Language> {
        self.client
            .put(&format!("/languages/{}", segment(code)), input)
            .await
    }

    async fn toggle(&self, code: &str) -> Result<Language> {
        self.client
            .call(Method::PATCH, &format!("/languages/{}/toggle", segment(code)))
            .await
    }

    async fn delete(&self, code: &str) -> Result<()> {
        self.client
            .delete(&format!("/languages/{}", segment(code)))
            .await
    }
}
