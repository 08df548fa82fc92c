use serde::{Deserialize, Serialize};

/// Sale status the backend assigns once production for the order is done
/// and the goods are waiting to be shipped.
pub const PENDING_SALE_STATUS: &str = "Production Completed";

/// Party (customer) the shipment belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentParty {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consignee_name: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl ShipmentParty {
    /// First consignee name, else the company name
    pub fn display_name(&self) -> Option<&str> {
        self.consignee_name
            .as_ref()
            .and_then(|names| names.first())
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .or_else(|| self.company_name.as_deref().filter(|name| !name.is_empty()))
    }
}

/// Product referenced by the sale order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentProduct {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_stock: i64,
}

/// Sale order awaiting (or past) dispatch (a026)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(rename = "_id")]
    pub id: String,
    pub party: ShipmentParty,
    #[serde(rename = "product_id", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ShipmentProduct>,
    #[serde(default)]
    pub product_qty: u64,
    #[serde(default)]
    pub order_id: String,
    #[serde(rename = "salestatus", default)]
    pub sale_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Shipment {
    pub fn dispatch_status(&self) -> DispatchStatus {
        DispatchStatus::from_sale_status(&self.sale_status)
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.name.as_str())
    }
}

/// Board classification of a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchStatus {
    Pending,
    Dispatched,
}

impl DispatchStatus {
    /// Only the exact pending sale status counts as pending; anything else,
    /// including unknown statuses, is shown as dispatched.
    pub fn from_sale_status(sale_status: &str) -> Self {
        if sale_status == PENDING_SALE_STATUS {
            DispatchStatus::Pending
        } else {
            DispatchStatus::Dispatched
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DispatchStatus::Pending => "Pending",
            DispatchStatus::Dispatched => "Dispatched",
        }
    }
}

/// Filter tabs of the dispatch board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardTab {
    #[default]
    All,
    Pending,
    Dispatched,
}

impl BoardTab {
    pub const ALL: [BoardTab; 3] = [BoardTab::All, BoardTab::Pending, BoardTab::Dispatched];

    pub fn label(&self) -> &'static str {
        match self {
            BoardTab::All => "All",
            BoardTab::Pending => "Pending",
            BoardTab::Dispatched => "Dispatched",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.label() == label)
    }

    pub fn matches(&self, status: DispatchStatus) -> bool {
        match self {
            BoardTab::All => true,
            BoardTab::Pending => status == DispatchStatus::Pending,
            BoardTab::Dispatched => status == DispatchStatus::Dispatched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(status: &str) -> Shipment {
        Shipment {
            id: "s1".into(),
            party: ShipmentParty {
                id: "p1".into(),
                consignee_name: None,
                company_name: Some("Acme Metals".into()),
            },
            product: None,
            product_qty: 4,
            order_id: "SO-1".into(),
            sale_status: status.into(),
            price: None,
        }
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(
            shipment("Production Completed").dispatch_status(),
            DispatchStatus::Pending
        );
        assert_eq!(
            shipment("production completed").dispatch_status(),
            DispatchStatus::Dispatched
        );
        assert_eq!(shipment("Dispatch").dispatch_status(), DispatchStatus::Dispatched);
        assert_eq!(shipment("").dispatch_status(), DispatchStatus::Dispatched);
    }

    #[test]
    fn test_party_display_name() {
        let mut party = shipment("").party;
        assert_eq!(party.display_name(), Some("Acme Metals"));

        party.consignee_name = Some(vec!["Ravi Kumar".into(), "Other".into()]);
        assert_eq!(party.display_name(), Some("Ravi Kumar"));

        party.consignee_name = Some(vec![]);
        assert_eq!(party.display_name(), Some("Acme Metals"));

        party.company_name = None;
        assert_eq!(party.display_name(), None);
    }

    #[test]
    fn test_board_tab_matching() {
        assert!(BoardTab::All.matches(DispatchStatus::Pending));
        assert!(BoardTab::All.matches(DispatchStatus::Dispatched));
        assert!(BoardTab::Pending.matches(DispatchStatus::Pending));
        assert!(!BoardTab::Pending.matches(DispatchStatus::Dispatched));
        assert!(!BoardTab::Dispatched.matches(DispatchStatus::Pending));
        assert_eq!(BoardTab::from_label("Dispatched"), Some(BoardTab::Dispatched));
        assert_eq!(BoardTab::from_label("Other"), None);
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "_id": "s9",
            "party": {"_id": "p9", "consignee_name": ["Asha"], "company_name": "Asha Traders"},
            "product_id": {"_id": "pr1", "name": "Copper Wire", "current_stock": 40},
            "product_qty": 25,
            "order_id": "ORD-77",
            "salestatus": "Production Completed",
            "price": 1200
        }"#;
        let s: Shipment = serde_json::from_str(json).unwrap();
        assert_eq!(s.product_name(), Some("Copper Wire"));
        assert_eq!(s.party.display_name(), Some("Asha"));
        assert_eq!(s.dispatch_status(), DispatchStatus::Pending);
        assert_eq!(s.product_qty, 25);
    }
}
