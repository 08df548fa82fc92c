pub mod columns;
pub mod filter;
pub mod state;
pub mod table;

use self::state::create_state;
use self::table::ScrapTable;
use crate::domain::a025_scrap::api::fetch_scraps;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use contracts::domain::a025_scrap::Scrap;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// How long a failure notification stays on screen
const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Handle the add/edit drawer gets from context
///
/// The drawer itself lives outside this screen; it reads `editing` to know
/// whether it adds or edits, and reports results back through the callbacks.
#[derive(Clone, Copy)]
pub struct ScrapDrawerContext {
    /// `None` when adding a new record
    pub editing: Signal<Option<Scrap>>,
    pub close: Callback<()>,
    pub created: Callback<Scrap>,
    pub updated: Callback<Scrap>,
    pub refresh: Callback<()>,
}

pub fn use_scrap_drawer() -> ScrapDrawerContext {
    use_context::<ScrapDrawerContext>().expect("ScrapDrawerContext not found in component tree")
}

/// Scrap Management screen
#[component]
pub fn ScrapList(
    /// Add/edit drawer, rendered while open
    #[prop(optional, into)]
    drawer: Option<ViewFn>,

    /// Row click handler; without it a row click opens the edit drawer (if any)
    #[prop(optional)]
    on_open_details: Option<Callback<String>>,
) -> impl IntoView {
    let session = use_session();
    let state = create_state();

    let notify_error = move |message: String| {
        let mut seq = 0;
        state.update(|s| seq = s.fail(message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            state.update(|s| s.dismiss_error(seq));
        });
    };

    // Not de-duplicated: overlapping refreshes all land, the last one wins
    let load_scraps = move || {
        state.update(|s| s.begin_loading());
        let session = session.get_untracked();
        spawn_local(async move {
            match fetch_scraps(&session).await {
                Ok(items) => {
                    log!("Loaded {} scrap records", items.len());
                    state.update(|s| s.replace_all(items));
                }
                Err(e) => {
                    log::error!("Failed to fetch scraps: {}", e);
                    notify_error(e.to_string());
                }
            }
        });
    };

    provide_context(ScrapDrawerContext {
        editing: Signal::derive(move || state.with(|s| s.editing.clone())),
        close: Callback::new(move |_| state.update(|s| s.close_drawer())),
        created: Callback::new(move |scrap: Scrap| state.update(|s| s.apply_created(scrap))),
        updated: Callback::new(move |scrap: Scrap| state.update(|s| s.apply_updated(scrap))),
        refresh: Callback::new(move |_| load_scraps()),
    });

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || {
            state.update(|s| s.search_query = v);
        });
    });

    let filtered = Memo::new(move |_| state.with(|s| s.filtered()));

    let on_row_click = on_open_details.or_else(|| {
        drawer.is_some().then(|| {
            Callback::new(move |id: String| state.update(|s| s.open_edit_drawer(&id)))
        })
    });

    load_scraps();

    view! {
        <div class="page scrap-page">
            <div class="page__card">
                <PageHeader
                    title="Scrap Management"
                    subtitle="Track and manage production scrap materials".to_string()
                    icon="recycle"
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.open_add_drawer())
                    >
                        {icon("plus")}
                        " Add New Scrap"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_scraps()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </PageHeader>

                <div class="scrap-page__search">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Search Scrap Materials"</Label>
                        <Input
                            value=search_query
                            placeholder="Search by name, ID, category, extract from..."
                        />
                    </Flex>
                </div>
            </div>

            {move || {
                state.with(|s| s.error.clone()).map(|err| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>{err}</div>
                    </MessageBar>
                })
            }}

            <div class="page__card">
                <ScrapTable
                    scraps=Signal::derive(move || filtered.get())
                    is_loading=Signal::derive(move || state.with(|s| s.is_loading))
                    on_row_click=on_row_click
                />
            </div>

            {drawer.map(|drawer| view! {
                <Show when=move || state.with(|s| s.is_drawer_open)>
                    {drawer.run()}
                </Show>
            })}
        </div>
    }
}
