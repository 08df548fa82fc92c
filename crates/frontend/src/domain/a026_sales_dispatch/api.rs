use contracts::domain::a026_sales_dispatch::Shipment;
use contracts::shared::api::{ApiEnvelope, DispatchListResponse};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::get_json;
use crate::system::session::Session;

const SALES_DISPATCH_PATH: &str = "sale/sales-dispatch";

/// Load sale orders for the dispatch board
pub async fn fetch_dispatch_shipments(session: &Session) -> Result<Vec<Shipment>, ApiError> {
    let (response, http_ok) =
        get_json::<DispatchListResponse>(SALES_DISPATCH_PATH, session).await?;
    if !response.is_success(http_ok) {
        return Err(ApiError::rejected(
            response.message(),
            "Failed to fetch dispatch orders",
        ));
    }
    Ok(response.into_data())
}
