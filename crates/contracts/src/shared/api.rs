//! Response envelopes of the list endpoints
//!
//! The backend wraps list payloads as `{ success?, message?, data }`. Whether a
//! call succeeded is decided by the HTTP status plus the explicit `success`
//! flag when present. `message` is informational only.

use crate::domain::a025_scrap::Scrap;
use crate::domain::a026_sales_dispatch::Shipment;
use serde::{Deserialize, Serialize};

pub trait ApiEnvelope {
    type Data;

    fn success_flag(&self) -> Option<bool>;
    fn message(&self) -> Option<&str>;
    fn into_data(self) -> Self::Data;

    fn is_success(&self, http_ok: bool) -> bool {
        http_ok && self.success_flag().unwrap_or(true)
    }
}

/// `GET /scrap/get`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<Scrap>>,
}

impl ApiEnvelope for ScrapListResponse {
    type Data = Vec<Scrap>;

    fn success_flag(&self) -> Option<bool> {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_data(self) -> Vec<Scrap> {
        self.data.unwrap_or_default()
    }
}

/// `GET /sale/sales-dispatch`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Shipment>,
}

impl ApiEnvelope for DispatchListResponse {
    type Data = Vec<Shipment>;

    fn success_flag(&self) -> Option<bool> {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_data(self) -> Vec<Shipment> {
        self.data
    }
}
