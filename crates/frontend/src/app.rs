use crate::domain::a025_scrap::ui::list::ScrapList;
use crate::domain::a026_sales_dispatch::ui::board::DispatchBoard;
use crate::system::session::SessionProvider;
use contracts::domain::a026_sales_dispatch::Shipment;
use leptos::logging::log;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Scrap,
    Dispatch,
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Scrap);

    // Handed to the external dispatch drawer
    let dispatch_data = RwSignal::new(None::<Shipment>);
    let show_dispatch = RwSignal::new(false);

    Effect::new(move |_| {
        if show_dispatch.get() {
            if let Some(shipment) = dispatch_data.get_untracked() {
                log!("Dispatch requested for order {}", shipment.order_id);
            }
        }
    });

    let nav_class = move |target: Screen| {
        if screen.get() == target {
            "app-nav__item app-nav__item--active"
        } else {
            "app-nav__item"
        }
    };

    view! {
        <div class="app">
            <nav class="app-nav">
                <button class=move || nav_class(Screen::Scrap) on:click=move |_| set_screen.set(Screen::Scrap)>
                    "Scrap"
                </button>
                <button class=move || nav_class(Screen::Dispatch) on:click=move |_| set_screen.set(Screen::Dispatch)>
                    "Dispatch"
                </button>
            </nav>
            <main class="app__content">
                {move || match screen.get() {
                    Screen::Scrap => view! { <ScrapList /> }.into_any(),
                    Screen::Dispatch => view! {
                        <DispatchBoard
                            on_dispatch=Callback::new(move |shipment: Shipment| dispatch_data.set(Some(shipment)))
                            on_show_dispatch=Callback::new(move |open: bool| show_dispatch.set(open))
                        />
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
