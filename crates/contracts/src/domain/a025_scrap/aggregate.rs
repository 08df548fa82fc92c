use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Scrap material entry (a025)
///
/// Field names follow the backend JSON. Every field except `_id` may be
/// absent or hold a value of the wrong type; both read as `None` and the UI
/// renders fallbacks for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scrap {
    /// Database id, used as the row key and for row-click callbacks
    #[serde(rename = "_id")]
    pub id: String,

    /// Human-facing scrap code (e.g. "SC-0012")
    #[serde(rename = "Scrap_id", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub scrap_id: Option<String>,

    #[serde(rename = "Scrap_name", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Category", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Where the material was extracted from
    #[serde(rename = "Extract_from", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub qty: Option<u64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "createdAt", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Scrap {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scrap_id: None,
            name: None,
            category: None,
            source: None,
            qty: None,
            price: None,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Price as plain text: `100.0` -> "100", `100.5` -> "100.5"
    pub fn price_text(&self) -> Option<String> {
        self.price.map(|p| p.to_string())
    }

    pub fn qty_text(&self) -> Option<String> {
        self.qty.map(|q| q.to_string())
    }

    /// Creation date as `DDMMYYYY` (UTC), the form the date search compares against
    pub fn created_day_key(&self) -> Option<String> {
        self.created_at.map(day_key)
    }

    /// Last update date as `DDMMYYYY` (UTC)
    pub fn updated_day_key(&self) -> Option<String> {
        self.updated_at.map(day_key)
    }

    /// Rejects values the JSON types alone can't rule out
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Scrap record without _id".into());
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("Scrap {}: invalid price {}", self.id, price));
            }
        }
        Ok(())
    }
}

/// Reads an optional field, turning a value of the wrong type into `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn day_key(dt: DateTime<Utc>) -> String {
    dt.format("%d%m%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "_id": "65f0c1",
            "Scrap_id": "SC1",
            "Scrap_name": "Iron Scrap",
            "Category": "Metal",
            "Extract_from": "Lathe",
            "qty": 12,
            "price": 100.5,
            "description": "Turnings",
            "createdAt": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-04-01T00:00:00Z"
        }"#;
        let scrap: Scrap = serde_json::from_str(json).unwrap();
        assert_eq!(scrap.id, "65f0c1");
        assert_eq!(scrap.scrap_id.as_deref(), Some("SC1"));
        assert_eq!(scrap.source.as_deref(), Some("Lathe"));
        assert_eq!(scrap.qty, Some(12));
        assert_eq!(scrap.price_text().as_deref(), Some("100.5"));
        assert_eq!(scrap.created_day_key().as_deref(), Some("15032024"));
        assert_eq!(scrap.updated_day_key().as_deref(), Some("01042024"));
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let scrap: Scrap = serde_json::from_str(r#"{"_id": "x"}"#).unwrap();
        assert_eq!(scrap, Scrap::new("x"));
        assert!(scrap.price_text().is_none());
        assert!(scrap.created_day_key().is_none());
    }

    #[test]
    fn test_wrong_types_read_as_missing() {
        let json = r#"{
            "_id": "x",
            "Scrap_name": 42,
            "qty": "5",
            "price": "cheap",
            "description": null,
            "createdAt": "yesterday"
        }"#;
        let scrap: Scrap = serde_json::from_str(json).unwrap();
        assert_eq!(scrap, Scrap::new("x"));

        let negative: Scrap = serde_json::from_str(r#"{"_id": "x", "qty": -3}"#).unwrap();
        assert!(negative.qty.is_none());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_str::<Scrap>(r#"{"Scrap_name": "Iron"}"#).is_err());
    }

    #[test]
    fn test_price_text_matches_plain_number() {
        let mut scrap = Scrap::new("x");
        scrap.price = Some(100.0);
        assert_eq!(scrap.price_text().as_deref(), Some("100"));
        scrap.price = Some(0.0);
        assert_eq!(scrap.price_text().as_deref(), Some("0"));
    }

    #[test]
    fn test_validate() {
        let mut scrap = Scrap::new("x");
        assert!(scrap.validate().is_ok());
        scrap.price = Some(-1.0);
        assert!(scrap.validate().is_err());
        assert!(Scrap::new(" ").validate().is_err());
    }

    #[test]
    fn test_day_key_uses_utc() {
        let mut scrap = Scrap::new("x");
        scrap.created_at = Some(Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap());
        assert_eq!(scrap.created_day_key().as_deref(), Some("31122023"));
    }
}
