//! Scrap search
//!
//! A record matches when the lower-cased term is a substring of one of its
//! text/number fields, or when its created/updated day (`DDMMYYYY`) contains
//! the term with `/` removed, so "15/03/2024" finds records from that day.
use contracts::domain::a025_scrap::Scrap;

/// Filter scraps by search term; no term (or an empty one) keeps everything
pub fn filter_scraps(source: &[Scrap], term: Option<&str>) -> Vec<Scrap> {
    match term {
        Some(term) if !term.is_empty() => {
            let needle = term.to_lowercase();
            let date_needle = needle.replace('/', "");
            source
                .iter()
                .filter(|scrap| matches_scrap(scrap, &needle, &date_needle))
                .cloned()
                .collect()
        }
        _ => source.to_vec(),
    }
}

fn matches_scrap(scrap: &Scrap, needle: &str, date_needle: &str) -> bool {
    let text_fields = [
        scrap.name.clone(),
        scrap.scrap_id.clone(),
        scrap.price_text(),
        scrap.source.clone(),
        scrap.category.clone(),
        scrap.qty_text(),
        scrap.description.clone(),
    ];

    text_fields
        .iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(needle))
        || [scrap.created_day_key(), scrap.updated_day_key()]
            .iter()
            .flatten()
            .any(|key| key.contains(date_needle))
}
