use contracts::domain::a026_sales_dispatch::{BoardTab, Shipment};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct DispatchBoardState {
    /// Shipments exactly as loaded
    pub shipments: Vec<Shipment>,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl DispatchBoardState {
    pub fn loaded(&mut self, shipments: Vec<Shipment>) {
        self.shipments = shipments;
        self.is_loaded = true;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.is_loaded = true;
        self.error = Some(message);
    }
}

pub fn create_state() -> RwSignal<DispatchBoardState> {
    RwSignal::new(DispatchBoardState::default())
}

/// Shipments shown under the given tab, in load order
pub fn filter_shipments(shipments: &[Shipment], tab: BoardTab) -> Vec<Shipment> {
    shipments
        .iter()
        .filter(|s| tab.matches(s.dispatch_status()))
        .cloned()
        .collect()
}
