use contracts::domain::a025_scrap::Scrap;
use std::cmp::Ordering;

use crate::shared::date_utils::{format_date_or_na, NOT_AVAILABLE};
use crate::shared::list_utils::{compare_number, compare_text, Sortable};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Columns of the scrap table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrapColumn {
    ScrapId,
    Name,
    Category,
    Source,
    Quantity,
    Price,
    Description,
    CreatedAt,
    UpdatedAt,
}

impl ScrapColumn {
    pub const ALL: [ScrapColumn; 9] = [
        ScrapColumn::ScrapId,
        ScrapColumn::Name,
        ScrapColumn::Category,
        ScrapColumn::Source,
        ScrapColumn::Quantity,
        ScrapColumn::Price,
        ScrapColumn::Description,
        ScrapColumn::CreatedAt,
        ScrapColumn::UpdatedAt,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ScrapColumn::ScrapId => "Scrap ID",
            ScrapColumn::Name => "Name",
            ScrapColumn::Category => "Category",
            ScrapColumn::Source => "Extract From",
            ScrapColumn::Quantity => "Quantity",
            ScrapColumn::Price => "Price",
            ScrapColumn::Description => "Description",
            ScrapColumn::CreatedAt => "Created On",
            ScrapColumn::UpdatedAt => "Last Updated",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ScrapColumn::Quantity | ScrapColumn::Price)
    }
}

impl Sortable for Scrap {
    type Column = ScrapColumn;

    fn compare_by_column(&self, other: &Self, column: ScrapColumn) -> Ordering {
        match column {
            ScrapColumn::ScrapId => compare_text(self.scrap_id.as_deref(), other.scrap_id.as_deref()),
            ScrapColumn::Name => compare_text(self.name.as_deref(), other.name.as_deref()),
            ScrapColumn::Category => compare_text(self.category.as_deref(), other.category.as_deref()),
            ScrapColumn::Source => compare_text(self.source.as_deref(), other.source.as_deref()),
            ScrapColumn::Quantity => self.qty.cmp(&other.qty),
            ScrapColumn::Price => compare_number(self.price, other.price),
            ScrapColumn::Description => {
                compare_text(self.description.as_deref(), other.description.as_deref())
            }
            ScrapColumn::CreatedAt => self.created_at.cmp(&other.created_at),
            ScrapColumn::UpdatedAt => self.updated_at.cmp(&other.updated_at),
        }
    }
}

fn text_or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Display text of one cell
///
/// Zero quantity and zero price render the same as missing ones.
pub fn format_cell(scrap: &Scrap, column: ScrapColumn) -> String {
    match column {
        ScrapColumn::ScrapId => text_or_na(scrap.scrap_id.as_deref()),
        ScrapColumn::Name => text_or_na(scrap.name.as_deref()),
        ScrapColumn::Category => text_or_na(scrap.category.as_deref()),
        ScrapColumn::Source => text_or_na(scrap.source.as_deref()),
        ScrapColumn::Description => text_or_na(scrap.description.as_deref()),
        ScrapColumn::Quantity => match scrap.qty {
            Some(q) if q > 0 => q.to_string(),
            _ => "0".to_string(),
        },
        ScrapColumn::Price => match scrap.price {
            Some(p) if p != 0.0 => format!("{}{}", CURRENCY_SYMBOL, p),
            _ => format!("{}0", CURRENCY_SYMBOL),
        },
        ScrapColumn::CreatedAt => format_date_or_na(scrap.created_at.as_ref()),
        ScrapColumn::UpdatedAt => format_date_or_na(scrap.updated_at.as_ref()),
    }
}
