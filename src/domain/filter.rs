use crate::domain::Stay;

/// Narrows a stay list by city and guest capacity.
///
/// A stay survives when both predicates hold, and each predicate is
/// vacuously true when its input is empty/zero:
/// - the stay's city contains the first comma-delimited segment of
///   `city_query` (trimmed, case-insensitive) as a substring;
/// - `max_guests >= min_guests`.
///
/// The result preserves the input order; nothing is re-sorted or rewritten.
pub fn filter_stays<'a>(stays: &'a [Stay], city_query: &str, min_guests: u32) -> Vec<&'a Stay> {
    let needle = city_needle(city_query);

    stays
        .iter()
        .filter(|stay| {
            let city_ok = match &needle {
                Some(n) => stay.city.to_lowercase().contains(n.as_str()),
                None => true,
            };
            let guests_ok = min_guests == 0 || stay.max_guests >= min_guests;
            city_ok && guests_ok
        })
        .collect()
}

/// First comma-delimited segment of the query, trimmed and lowercased.
/// Queries produced by the city picker look like "Turku, Finland"; only
/// the city part takes part in matching.
fn city_needle(city_query: &str) -> Option<String> {
    if city_query.trim().is_empty() {
        return None;
    }
    let segment = city_query.split(',').next().unwrap_or("").trim();
    Some(segment.to_lowercase())
}
