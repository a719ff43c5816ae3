//! Backend seam for creating orders

use crate::config::WorkflowConfig;
use crate::core::error::OrderResult;
use crate::core::order::OrderPayload;
use async_trait::async_trait;
use std::time::Duration;

/// Raw answer to an order creation request
///
/// Interpreting the status and body is left to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResponse {
    pub status: u16,
    pub body: String,
}

impl OrderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only `200 OK` counts as a created order
    pub fn is_created(&self) -> bool {
        self.status == 200
    }
}

/// Client that sends one order creation request
///
/// Implementations only move bytes; they return `Err` when no response was
/// received at all.
#[async_trait]
pub trait OrderClient: Send + Sync {
    async fn create_order(&self, payload: &OrderPayload) -> OrderResult<OrderResponse>;
}

/// [`OrderClient`] posting JSON over HTTP with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    http: reqwest::Client,
    orders_url: String,
}

impl HttpOrderClient {
    /// Client posting to an absolute orders URL, without timeout
    pub fn new(orders_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            orders_url: orders_url.into(),
        }
    }

    pub fn from_config(config: &WorkflowConfig) -> OrderResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            http: builder.build()?,
            orders_url: config.orders_url(),
        })
    }

    pub fn orders_url(&self) -> &str {
        &self.orders_url
    }
}

#[async_trait]
impl OrderClient for HttpOrderClient {
    async fn create_order(&self, payload: &OrderPayload) -> OrderResult<OrderResponse> {
        tracing::debug!(url = %self.orders_url, "POST order");

        // `.json` sets `Content-Type: application/json`
        let response = self.http.post(&self.orders_url).json(payload).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(OrderResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_created() {
        assert!(OrderResponse::new(200, "{}").is_created());
        assert!(!OrderResponse::new(201, "{}").is_created());
        assert!(!OrderResponse::new(500, "").is_created());
    }

    #[test]
    fn test_from_config_builds_orders_url() {
        let config = WorkflowConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..WorkflowConfig::default()
        };
        let client = HttpOrderClient::from_config(&config).unwrap();
        assert_eq!(client.orders_url(), "http://localhost:3000/api/orders");
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = WorkflowConfig {
            orders_path: "api/orders".to_string(),
            ..WorkflowConfig::default()
        };
        assert!(HttpOrderClient::from_config(&config).is_err());
    }
}
