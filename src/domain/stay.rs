use serde::Deserialize;

/// One lodging entry, as shipped in the embedded seed.
/// Immutable after load; nothing in the app mutates a `Stay`.
#[derive(Debug, Clone, Deserialize)]
pub struct Stay {
    pub title: String,
    pub city: String,
    pub country: String,

    // "type" is a keyword, the seed keeps the original field name
    #[serde(rename = "type")]
    pub kind: String,

    pub beds: Option<u32>,

    #[serde(rename = "maxGuests")]
    pub max_guests: u32,

    pub rating: f32,

    #[serde(rename = "superHost")]
    pub super_host: bool,

    pub photo: String,
}
