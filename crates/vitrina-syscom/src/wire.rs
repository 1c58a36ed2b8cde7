//! Wire types mirroring the distributor's JSON schema.
//!
//! The API is loosely typed: numeric fields arrive as bare numbers or as
//! quoted strings, and the listing endpoint returns either a bare array
//! or a wrapper object with pagination metadata.

use serde::Deserialize;
use std::fmt;

use vitrina_commerce::pricing::list_price_cop;
use vitrina_commerce::product::{Product, ProductSource};

/// A JSON value that arrives as a bare number or a quoted string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberOrText::Number(n) => n.as_i64(),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => n.as_f64(),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrText::Number(n) => write!(f, "{}", n),
            NumberOrText::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One product as the distributor lists it.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedProduct {
    pub producto_id: NumberOrText,
    pub titulo: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub precios: Option<FeedPrices>,
    #[serde(default)]
    pub total_existencia: Option<NumberOrText>,
    #[serde(default)]
    pub categorias: Vec<FeedCategory>,
    #[serde(default)]
    pub img_portada: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Price block of a listed product.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPrices {
    #[serde(default)]
    pub precio_lista: Option<NumberOrText>,
}

/// Category tag of a listed product.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedCategory {
    pub nombre: String,
}

impl FeedProduct {
    /// Units on hand; absent or unparsable values count as zero.
    pub fn stock(&self) -> i64 {
        self.total_existencia
            .as_ref()
            .and_then(NumberOrText::as_i64)
            .unwrap_or(0)
    }

    /// USD list price; absent or unparsable values count as zero.
    pub fn list_price_usd(&self) -> f64 {
        self.precios
            .as_ref()
            .and_then(|p| p.precio_lista.as_ref())
            .and_then(NumberOrText::as_f64)
            .unwrap_or(0.0)
    }

    /// Map into the unified product shape, converting the USD list price
    /// to COP at the given rate. Relative product links are absolutized
    /// against `site_url`.
    pub fn into_product(self, exchange_rate: f64, site_url: &str) -> Product {
        let stock = self.stock();
        let price = list_price_cop(self.list_price_usd(), exchange_rate);

        Product {
            id: format!("sys_{}", self.producto_id),
            name: self.titulo,
            description: self
                .descripcion
                .unwrap_or_else(|| "Sin descripción".to_string()),
            brand: self.marca.unwrap_or_else(|| "Syscom".to_string()),
            model: self.modelo.unwrap_or_default(),
            category: self
                .categorias
                .into_iter()
                .next()
                .map(|c| c.nombre)
                .unwrap_or_else(|| "External".to_string()),
            price,
            stock,
            image_url: self.img_portada,
            slug: format!("sys-{}", self.producto_id),
            source: ProductSource::External,
            external_url: self.link.map(|link| format!("{}{}", site_url, link)),
        }
    }
}

/// Listing response: a bare array of products or a wrapper object with
/// page metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingResponse {
    Paged {
        #[serde(default)]
        productos: Vec<FeedProduct>,
        #[serde(default)]
        paginas: Option<NumberOrText>,
    },
    Bare(Vec<FeedProduct>),
}

impl ListingResponse {
    /// Split into the listed items and the reported page count, if any.
    pub fn into_parts(self) -> (Vec<FeedProduct>, Option<i64>) {
        match self {
            ListingResponse::Bare(items) => (items, None),
            ListingResponse::Paged { productos, paginas } => {
                (productos, paginas.and_then(|p| p.as_i64()))
            }
        }
    }
}

/// Token exchange response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Exchange-rate endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateResponse {
    #[serde(default)]
    pub normal: Option<String>,
    #[serde(default)]
    pub venta: Option<String>,
}

impl ExchangeRateResponse {
    /// First non-empty rate field, parsed as a float.
    pub fn rate(&self) -> Option<f64> {
        self.normal
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.venta.as_deref().filter(|s| !s.is_empty()))
            .and_then(|s| s.trim().parse().ok())
    }
}
