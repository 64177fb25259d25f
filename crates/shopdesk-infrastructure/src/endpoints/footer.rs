use async_trait::async_trait;
use shopdesk_core::error::Result;
use shopdesk_core::footer::{Footer, FooterApi};

use super::segment;
use crate::rest_client::RestClient;

#[derive(Clone)]
pub struct RestFooterApi {
    client: RestClient,
}

impl RestFooterApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FooterApi for RestFooterApi {
    async fn get(&self, language_code: &str) -> Result<Option<Footer>> {
        self.client
            .get_optional(&format!("/footers/{}", segment(language_code)))
            .await
    }

    async fn save(&self, footer: &Footer) -> Result<Footer> {
        self.client
            .put(&format!("/footers/{}", segment(&footer.language_code)), footer)
            .await
    }
}
