//! Quote generation and single-item stock checks.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::SyscomClient;
use crate::error::FeedError;
use crate::wire::NumberOrText;

/// A cart line to quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Catalog product id (the `sys_` prefix is stripped before sending).
    pub product_id: String,
    /// Units requested.
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
struct QuotePayload {
    productos: Vec<QuotePayloadLine>,
    /// Always false: quote only, never a purchase order.
    ordenar: bool,
}

#[derive(Debug, Serialize)]
struct QuotePayloadLine {
    producto_id: String,
    cantidad: i64,
}

/// Wire response from the quote endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteWire {
    #[serde(default)]
    folio: Option<String>,
    #[serde(default)]
    cotizacion_id: Option<String>,
    #[serde(default)]
    total: Option<f64>,
    #[serde(default)]
    productos: Vec<QuotedLine>,
}

/// One quoted line as the distributor priced it.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotedLine {
    pub producto_id: NumberOrText,
    #[serde(default)]
    pub cantidad: i64,
    #[serde(default)]
    pub precio_unitario: f64,
    #[serde(default)]
    pub precio_total: f64,
}

/// Outcome of a quote attempt. Failures are carried in the outcome, not
/// raised.
#[derive(Debug, Clone)]
pub struct QuoteOutcome {
    pub success: bool,
    /// Quote reference; `"PENDING"` when the distributor returned none.
    pub folio: Option<String>,
    pub total: f64,
    pub lines: Vec<QuotedLine>,
    pub error: Option<String>,
}

impl QuoteOutcome {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            folio: None,
            total: 0.0,
            lines: Vec::new(),
            error: Some(message.into()),
        }
    }

    fn from_wire(wire: QuoteWire) -> Self {
        Self {
            success: true,
            folio: Some(
                wire.folio
                    .or(wire.cotizacion_id)
                    .unwrap_or_else(|| "PENDING".to_string()),
            ),
            total: wire.total.unwrap_or(0.0),
            lines: wire.productos,
            error: None,
        }
    }
}

/// Availability of a single distributor item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockStatus {
    pub available: bool,
    pub stock: i64,
}

impl StockStatus {
    fn unavailable() -> Self {
        Self {
            available: false,
            stock: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StockWire {
    #[serde(default)]
    total_existencia: Option<NumberOrText>,
}

/// Strip the catalog's `sys_` prefix, leaving the distributor's own id.
fn distributor_id(id: &str) -> &str {
    id.strip_prefix("sys_").unwrap_or(id)
}

impl SyscomClient {
    /// Generate a quote for a set of cart lines without placing an order.
    pub async fn generate_quote(&self, items: &[QuoteItem]) -> QuoteOutcome {
        if items.is_empty() {
            return QuoteOutcome::failure("El carrito está vacío");
        }

        let Some(token) = self.token().await else {
            return QuoteOutcome::failure("No se pudo autenticar con el distribuidor");
        };

        let payload = QuotePayload {
            productos: items
                .iter()
                .map(|item| QuotePayloadLine {
                    producto_id: distributor_id(&item.product_id).to_string(),
                    cantidad: item.quantity,
                })
                .collect(),
            ordenar: false,
        };

        match self.post_quote(&token, &payload).await {
            Ok(wire) => QuoteOutcome::from_wire(wire),
            Err(error) => {
                warn!(%error, "quote generation failed");
                QuoteOutcome::failure(error.to_string())
            }
        }
    }

    async fn post_quote(&self, token: &str, payload: &QuotePayload) -> Result<QuoteWire, FeedError> {
        let url = format!("{}/carrito/generar", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FeedError::Http { status, url });
        }

        response
            .json::<QuoteWire>()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))
    }

    /// Check live availability of one distributor item.
    pub async fn check_stock(&self, product_id: &str) -> StockStatus {
        let Some(token) = self.token().await else {
            return StockStatus::unavailable();
        };

        match self.fetch_stock(&token, distributor_id(product_id)).await {
            Ok(stock) => StockStatus {
                available: stock > 0,
                stock,
            },
            Err(error) => {
                warn!(%error, product_id, "stock check failed");
                StockStatus::unavailable()
            }
        }
    }

    async fn fetch_stock(&self, token: &str, id: &str) -> Result<i64, FeedError> {
        let url = format!("{}/productos/{}", self.base_url, id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FeedError::Http { status, url });
        }

        let body = response
            .json::<StockWire>()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;

        Ok(body
            .total_existencia
            .as_ref()
            .and_then(NumberOrText::as_i64)
            .unwrap_or(0))
    }
}
