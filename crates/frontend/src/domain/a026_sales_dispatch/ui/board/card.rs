use contracts::domain::a026_sales_dispatch::{DispatchStatus, Shipment};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::NOT_AVAILABLE;

/// Progress shown on every card; the board has no finer-grained status
const DISPATCH_PROGRESS_PERCENT: u8 = 100;

/// Badge color and whether the pulsing dot is shown
///
/// Both statuses share the amber pill; only pending shipments get the dot.
fn status_badge(status: DispatchStatus) -> (BadgeColor, bool) {
    (BadgeColor::Warning, status == DispatchStatus::Pending)
}

/// One shipment on the dispatch board
#[component]
pub fn ShipmentCard(
    shipment: Shipment,
    on_dispatch: Callback<Shipment>,
    on_show_dispatch: Callback<bool>,
) -> impl IntoView {
    let status = shipment.dispatch_status();
    let party_name = shipment
        .party
        .display_name()
        .unwrap_or(NOT_AVAILABLE)
        .to_string();
    let product_name = shipment.product_name().unwrap_or(NOT_AVAILABLE).to_string();
    let order_id = shipment.order_id.clone();
    let quantity = shipment.product_qty;
    let (badge_color, pulse_dot) = status_badge(status);

    view! {
        <div class="shipment-card">
            <div class="shipment-card__header">
                <div>
                    <h3 class="shipment-card__party">{party_name}</h3>
                    <p class="shipment-card__product">"Product: " {product_name}</p>
                    <p class="shipment-card__order">"ID: " {order_id}</p>
                </div>

                <Badge appearance=BadgeAppearance::Tint color=badge_color>
                    {pulse_dot.then(|| view! {
                        <span class="status-dot status-dot--pulse"></span>
                    })}
                    {status.label()}
                </Badge>
            </div>

            <div class="shipment-card__stats">
                <div class="shipment-card__stat shipment-card__stat--qty">
                    <p class="shipment-card__stat-label">"QUANTITY"</p>
                    <p class="shipment-card__stat-value">{quantity}</p>
                    <p class="shipment-card__stat-unit">"units"</p>
                </div>

                <div class="shipment-card__stat shipment-card__stat--progress">
                    <p class="shipment-card__stat-label">"STATUS"</p>
                    <div class="progress">
                        <div
                            class="progress__fill"
                            style=format!("width: {}%;", DISPATCH_PROGRESS_PERCENT)
                        ></div>
                    </div>
                    <p class="shipment-card__stat-unit">
                        {format!("{}% complete", DISPATCH_PROGRESS_PERCENT)}
                    </p>
                </div>
            </div>

            <div class="shipment-card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:style="flex: 1;"
                    on_click=move |_| {
                        on_dispatch.run(shipment.clone());
                        on_show_dispatch.run(true);
                    }
                >
                    "DISPATCH NOW"
                </Button>
                <button class="shipment-card__dismiss" title="Dismiss">"×"</button>
            </div>
        </div>
    }
}
