use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use shopdesk_core::error::{Result, ShopdeskError};
use shopdesk_core::product::{Product, ProductApi, ProductInput, ProductPage, ProductQuery};

use crate::rest_client::RestClient;

/// `/products` endpoints. Create and update are multipart so an image can
/// travel with the form fields.
#[derive(Clone)]
pub struct RestProductApi {
    client: RestClient,
}

impl RestProductApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn form(input: &ProductInput) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in input.form_fields() {
            form = form.text(name, value);
        }

        if let Some(image) = &input.image {
            let content_type = image.content_type.clone().unwrap_or_else(|| {
                mime_guess::from_path(&image.file_name)
                    .first_or_octet_stream()
                    .to_string()
            });
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&content_type)
                .map_err(|e| {
                    ShopdeskError::internal(format!(
                        "Invalid content type '{}' for {}: {}",
                        content_type,
                        image.file_name, e
                    ))
                })?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl ProductApi for RestProductApi {
    async fn list(&self, query: &ProductQuery) -> Result<ProductPage> {
        let (products, meta) = self.client.get_page("/products", query).await?;
        Ok(ProductPage { products, meta })
    }

    async fn get(&self, id: i64) -> Result<Product> {
        self.client
            .get(&format!("/products/{}", id))
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    ShopdeskError::not_found("Product", id.to_string())
                } else {
                    err
                }
            })
    }

    async fn create(&self, input: &ProductInput) -> Result<Product> {
        let form = Self::form(input)?;
        self.client
            .send_multipart(Method::POST, "/products", form)
            .await
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<Product> {
        let form = Self::form(input)?;
        self.client
            .send_multipart(Method::PUT, &format!("/products/{}", id), form)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/products/{}", id)).await
    }
}
