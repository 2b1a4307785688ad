/// "1 Stay" / "N Stays" heading over the results grid.
pub fn stays_label(count: usize) -> String {
    if count == 1 {
        "1 Stay".to_string()
    } else {
        format!("{count} Stays")
    }
}

/// Combined guest-count label shown in the search bar and the modal.
/// Reads "Add guests" until at least one guest is picked.
pub fn guests_label(total: u32) -> String {
    match total {
        0 => "Add guests".to_string(),
        1 => "1 guest".to_string(),
        n => format!("{n} guests"),
    }
}
