//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     direction=Signal::derive(move || table.with(|t| t.sort.direction_of(ScrapColumn::Price)))
//!     on_sort=Callback::new(move |_| table.update(|t| t.toggle_sort(ScrapColumn::Price)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Header cell with a ▲/▼ indicator; a click asks the owner to cycle the sort
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Sort direction of this column, `None` when another column (or none) is sorted
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<()>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; white-space: nowrap;"
    } else {
        "cursor: pointer; white-space: nowrap;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
