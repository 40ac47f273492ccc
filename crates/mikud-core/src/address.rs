use serde::{Deserialize, Serialize};

/// One street address as entered by a person, before any encoding.
///
/// Fields hold raw, un-encoded text (typically Hebrew). The core never
/// mutates a query; trimming happens on copies during encoding and
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    pub city: String,
    pub street: String,
    pub house: String,
    /// Optional entrance letter or number (e.g. `"א"`, `"2"`).
    #[serde(default)]
    pub entrance: Option<String>,
}

impl AddressQuery {
    #[must_use]
    pub fn new(city: &str, street: &str, house: &str, entrance: Option<&str>) -> Self {
        Self {
            city: city.to_owned(),
            street: street.to_owned(),
            house: house.to_owned(),
            entrance: entrance.map(str::to_owned),
        }
    }
}
