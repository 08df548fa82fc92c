pub mod card;
pub mod state;

use self::card::ShipmentCard;
use self::state::{create_state, filter_shipments};
use crate::domain::a026_sales_dispatch::api::fetch_dispatch_shipments;
use crate::shared::components::page_header::PageHeader;
use crate::system::session::use_session;
use contracts::domain::a026_sales_dispatch::{BoardTab, Shipment};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// "Dispatch Order – Ready for Release" board
///
/// Loads once on mount. The dispatch itself happens in an external drawer:
/// the card hands over the shipment and asks for the drawer to open. Status
/// changes only show up after the backend has processed the dispatch.
#[component]
pub fn DispatchBoard(
    /// Receives the shipment chosen for dispatch
    on_dispatch: Callback<Shipment>,
    /// Opens (true) the dispatch drawer
    on_show_dispatch: Callback<bool>,
) -> impl IntoView {
    let session = use_session();
    let state = create_state();

    let selected_tab = RwSignal::new(BoardTab::default().label().to_string());
    let tab = Memo::new(move |_| BoardTab::from_label(&selected_tab.get()).unwrap_or_default());

    let visible = Memo::new(move |_| {
        let tab = tab.get();
        state.with(|s| filter_shipments(&s.shipments, tab))
    });

    let load_shipments = move || {
        let session = session.get_untracked();
        spawn_local(async move {
            match fetch_dispatch_shipments(&session).await {
                Ok(shipments) => {
                    log!("Loaded {} shipments for dispatch", shipments.len());
                    state.update(|s| s.loaded(shipments));
                }
                Err(e) => {
                    log::error!("Failed to fetch dispatch orders: {}", e);
                    state.update(|s| s.failed(e.to_string()));
                }
            }
        });
    };

    load_shipments();

    view! {
        <div class="page dispatch-board">
            <PageHeader title="Dispatch Order – Ready for Release" icon="truck">
                <TabList selected_value=selected_tab>
                    {BoardTab::ALL.into_iter().map(|t| view! {
                        <Tab value=t.label()>{t.label()}</Tab>
                    }).collect_view()}
                </TabList>
            </PageHeader>

            {move || {
                state.with(|s| s.error.clone()).map(|err| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>{err}</div>
                    </MessageBar>
                })
            }}

            {move || {
                if !state.with(|s| s.is_loaded) {
                    return view! {
                        <div class="dispatch-board__loading"><Spinner /></div>
                    }.into_any();
                }

                let cards = visible.get();
                if cards.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3 class="empty-state__title">"No shipments"</h3>
                            <p class="empty-state__text">
                                {format!("Nothing to show under \"{}\".", tab.get().label())}
                            </p>
                        </div>
                    }.into_any();
                }

                view! {
                    <div class="dispatch-board__grid">
                        {cards.into_iter().map(|shipment| view! {
                            <ShipmentCard
                                shipment=shipment
                                on_dispatch=on_dispatch
                                on_show_dispatch=on_show_dispatch
                            />
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
