use contracts::domain::a025_scrap::Scrap;
use contracts::shared::api::{ApiEnvelope, ScrapListResponse};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::get_json;
use crate::system::session::Session;

const SCRAP_LIST_PATH: &str = "scrap/get";

/// Load all scrap records
pub async fn fetch_scraps(session: &Session) -> Result<Vec<Scrap>, ApiError> {
    let (response, http_ok) = get_json::<ScrapListResponse>(SCRAP_LIST_PATH, session).await?;
    into_scraps(response, http_ok)
}

fn into_scraps(response: ScrapListResponse, http_ok: bool) -> Result<Vec<Scrap>, ApiError> {
    if !response.is_success(http_ok) {
        return Err(ApiError::rejected(response.message(), "Failed to fetch scraps"));
    }

    let scraps = response
        .into_data()
        .into_iter()
        .filter(|scrap| match scrap.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping scrap record: {}", e);
                false
            }
        })
        .collect();
    Ok(scraps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ScrapListResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_without_message() {
        let scraps = into_scraps(parse(r#"{"data": [{"_id": "1"}, {"_id": "2"}]}"#), true).unwrap();
        assert_eq!(scraps.len(), 2);
    }

    #[test]
    fn test_rejected_by_flag() {
        let err = into_scraps(parse(r#"{"success": false, "message": "Access denied"}"#), true)
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Access denied".into()));
    }

    #[test]
    fn test_rejected_by_status_uses_default_message() {
        let err = into_scraps(parse(r#"{"data": []}"#), false).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Failed to fetch scraps".into()));
    }

    #[test]
    fn test_invalid_record_is_skipped() {
        let scraps =
            into_scraps(parse(r#"{"data": [{"_id": "1", "price": -5}, {"_id": "2"}]}"#), true).unwrap();
        let ids: Vec<&str> = scraps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_wrong_typed_field_keeps_other_records() {
        let json = r#"{"data": [
            {"_id": "a", "Scrap_name": "Iron Scrap", "price": 100},
            {"_id": "b", "Scrap_name": "Copper", "qty": "5"}
        ]}"#;
        let scraps = into_scraps(parse(json), true).unwrap();
        assert_eq!(scraps.len(), 2);
        assert_eq!(scraps[0].name.as_deref(), Some("Iron Scrap"));
        assert_eq!(scraps[0].price, Some(100.0));
        assert_eq!(scraps[1].name.as_deref(), Some("Copper"));
        assert!(scraps[1].qty.is_none());
    }
}
