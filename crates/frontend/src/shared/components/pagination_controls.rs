use crate::shared::list_utils::PageSize;
use leptos::prelude::*;

/// PaginationControls component - Previous / "Page X of Y" / Next
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    on_previous: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    let can_previous = move || current_page.get() > 0;
    let can_next = move || current_page.get() + 1 < total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                disabled=move || !can_previous()
            >
                "Previous"
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get() + 1, total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_next()
            >
                "Next"
            </button>
        </div>
    }
}

/// Page size selector ("Show: 10 / 20 / 50 / 100 / All")
#[component]
pub fn PageSizeSelect(
    #[prop(into)]
    page_size: Signal<PageSize>,

    on_change: Callback<PageSize>,
) -> impl IntoView {
    view! {
        <label class="page-size">
            <span class="page-size__label">"Show:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Some(size) = PageSize::from_value(&event_target_value(&ev)) {
                        on_change.run(size);
                    }
                }
                prop:value=move || page_size.get().value()
            >
                {PageSize::OPTIONS.into_iter().map(|size| {
                    view! {
                        <option value=size.value() selected=move || page_size.get() == size>
                            {size.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
