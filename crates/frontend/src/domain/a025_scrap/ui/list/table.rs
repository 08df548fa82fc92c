use contracts::domain::a025_scrap::Scrap;
use leptos::prelude::*;
use thaw::*;

use super::columns::{format_cell, ScrapColumn};
use super::state::ScrapTableState;
use crate::shared::components::pagination_controls::{PageSizeSelect, PaginationControls};
use crate::shared::components::table::SortableHeaderCell;

/// "3 Scrap Records Found" / "1 Scrap Record Found"
pub fn records_found_label(count: usize) -> String {
    format!(
        "{} Scrap Record{} Found",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Which of the three table renderings applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableView {
    Loading,
    Empty,
    Rows,
}

fn table_view(is_loading: bool, len: usize) -> TableView {
    if is_loading {
        TableView::Loading
    } else if len == 0 {
        TableView::Empty
    } else {
        TableView::Rows
    }
}

fn row_style(index: usize, clickable: bool) -> String {
    format!(
        "background-color: {}; cursor: {};",
        if index % 2 == 0 {
            "var(--color-gray-50)"
        } else {
            "var(--color-gray-25, var(--color-gray-50))"
        },
        if clickable { "pointer" } else { "default" }
    )
}

/// Scrap table with client-side sort and pagination
///
/// Shows a spinner while loading and an empty state when there is nothing
/// to show; sort and page state live inside the table.
#[component]
pub fn ScrapTable(
    /// Rows to display (already filtered by the page)
    #[prop(into)]
    scraps: Signal<Vec<Scrap>>,

    #[prop(into)]
    is_loading: Signal<bool>,

    /// Invoked with the record `_id` when a row is clicked; rows are inert without it
    #[prop(default = None)]
    on_row_click: Option<Callback<String>>,
) -> impl IntoView {
    let table = RwSignal::new(ScrapTableState::default());
    let total = Memo::new(move |_| scraps.with(Vec::len));
    let view_state = Memo::new(move |_| table_view(is_loading.get(), total.get()));

    // new data starts from the first page
    Effect::new(move |_| {
        scraps.track();
        table.update(|t| t.page = 0);
    });

    let visible = Memo::new(move |_| {
        let state = table.get();
        scraps.with(|rows| state.visible_rows(rows))
    });

    move || match view_state.get() {
        TableView::Loading => view! {
            <div class="scrap-table__loading">
                <Spinner />
            </div>
        }
        .into_any(),
        TableView::Empty => view! { <ScrapEmptyState /> }.into_any(),
        TableView::Rows => view! {
            <div class="scrap-table">
                <div class="scrap-table__toolbar">
                    <h3 class="scrap-table__count">{move || records_found_label(total.get())}</h3>
                    <PageSizeSelect
                        page_size=Signal::derive(move || table.with(|t| t.page_size))
                        on_change=Callback::new(move |size| table.update(|t| t.set_page_size(size)))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                {ScrapColumn::ALL.into_iter().map(|column| {
                                    view! {
                                        <SortableHeaderCell
                                            label=column.header()
                                            direction=Signal::derive(move || table.with(|t| t.sort.direction_of(column)))
                                            on_sort=Callback::new(move |_| table.update(|t| t.toggle_sort(column)))
                                            align=if column.is_numeric() { "right" } else { "left" }
                                        />
                                    }
                                }).collect_view()}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || visible.get().into_iter().enumerate().map(|(index, scrap)| {
                                let id = scrap.id.clone();
                                view! {
                                    <TableRow
                                        attr:style=row_style(index, on_row_click.is_some())
                                        on:click=move |_| {
                                            if let Some(handler) = on_row_click {
                                                handler.run(id.clone());
                                            }
                                        }
                                    >
                                        {ScrapColumn::ALL.into_iter().map(|column| {
                                            let text = format_cell(&scrap, column);
                                            let title = text.clone();
                                            let class = if column.is_numeric() { "text-right" } else { "" };
                                            view! {
                                                <TableCell class=class>
                                                    <TableCellLayout truncate=true>
                                                        <span title=title>{text}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            }
                                        }).collect_view()}
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || table.with(|t| t.page))
                    total_pages=Signal::derive(move || table.with(|t| t.total_pages(total.get())))
                    on_previous=Callback::new(move |_| table.update(|t| t.previous()))
                    on_next=Callback::new(move |_| {
                        let count = total.get_untracked();
                        table.update(|t| t.next(count));
                    })
                />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ScrapEmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">
                {crate::shared::icons::icon("trash")}
            </div>
            <h3 class="empty-state__title">"No scrap records found"</h3>
            <p class="empty-state__text">
                "No scrap production data available at the moment. Scrap records will "
                "appear here once production processes generate waste materials."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_found_label() {
        assert_eq!(records_found_label(0), "0 Scrap Records Found");
        assert_eq!(records_found_label(1), "1 Scrap Record Found");
        assert_eq!(records_found_label(12), "12 Scrap Records Found");
    }

    #[test]
    fn test_table_view_states() {
        assert_eq!(table_view(false, 0), TableView::Empty);
        assert_eq!(table_view(true, 0), TableView::Loading);
        assert_eq!(table_view(true, 3), TableView::Loading);
        assert_eq!(table_view(false, 3), TableView::Rows);
    }

    #[test]
    fn test_row_style() {
        assert!(row_style(0, true).contains("cursor: pointer"));
        assert!(row_style(1, false).contains("cursor: default"));
        assert_ne!(row_style(0, false), row_style(1, false));
    }
}
