pub mod aggregate;

pub use aggregate::{
    BoardTab, DispatchStatus, Shipment, ShipmentParty, ShipmentProduct, PENDING_SALE_STATUS,
};
