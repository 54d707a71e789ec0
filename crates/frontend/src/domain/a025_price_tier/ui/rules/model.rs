use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::domain::a025_price_tier::{
    CreateProductTierPrice, PriceTier, ProductId, ProductTierPrice, ProductTierPriceId,
};
use contracts::shared::api::{ApiErrorBody, ListEnvelope};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status {
        status: u16,
        body: Option<ApiErrorBody>,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-supplied text if the error carried one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                body: Some(body), ..
            } => body.user_message().unwrap_or(fallback).to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Remote operations the rules editor needs
#[async_trait(?Send)]
pub trait PriceRulesApi: Send + Sync {
    async fn list_tiers(&self) -> Result<Vec<PriceTier>, ApiError>;

    async fn list_rules(&self, product: ProductId) -> Result<Vec<ProductTierPrice>, ApiError>;

    async fn create_rule(
        &self,
        payload: &CreateProductTierPrice,
    ) -> Result<ProductTierPrice, ApiError>;

    async fn delete_rule(&self, id: ProductTierPriceId) -> Result<(), ApiError>;
}

/// REST implementation over `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPriceRulesApi;

#[async_trait(?Send)]
impl PriceRulesApi for HttpPriceRulesApi {
    async fn list_tiers(&self) -> Result<Vec<PriceTier>, ApiError> {
        fetch_tiers().await
    }

    async fn list_rules(&self, product: ProductId) -> Result<Vec<ProductTierPrice>, ApiError> {
        fetch_rules(product).await
    }

    async fn create_rule(
        &self,
        payload: &CreateProductTierPrice,
    ) -> Result<ProductTierPrice, ApiError> {
        create_rule(payload).await
    }

    async fn delete_rule(&self, id: ProductTierPriceId) -> Result<(), ApiError> {
        delete_rule(id).await
    }
}

pub async fn fetch_tiers() -> Result<Vec<PriceTier>, ApiError> {
    let resp = Request::get(&api_url("price-tiers/"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_list(resp).await
}

pub async fn fetch_rules(product: ProductId) -> Result<Vec<ProductTierPrice>, ApiError> {
    let url = api_url(&format!("product-tier-prices/?product={}", product));
    let resp = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_list(resp).await
}

pub async fn create_rule(payload: &CreateProductTierPrice) -> Result<ProductTierPrice, ApiError> {
    let resp = Request::post(&api_url("product-tier-prices/"))
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = ensure_ok(resp).await?;
    resp.json::<ProductTierPrice>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete_rule(id: ProductTierPriceId) -> Result<(), ApiError> {
    let resp = Request::delete(&api_url(&format!("product-tier-prices/{}/", id)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(resp).await.map(|_| ())
}

async fn read_list<T: DeserializeOwned>(resp: Response) -> Result<Vec<T>, ApiError> {
    let resp = ensure_ok(resp).await?;
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_list(&text)
}

/// Turn a non-2xx response into `ApiError::Status`, keeping the error body if it parses
async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    Err(status_error(status, &text))
}

fn status_error(status: u16, text: &str) -> ApiError {
    ApiError::Status {
        status,
        body: serde_json::from_str::<ApiErrorBody>(text).ok(),
    }
}

fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ApiError> {
    serde_json::from_str::<ListEnvelope<T>>(text)
        .map(ListEnvelope::into_items)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
