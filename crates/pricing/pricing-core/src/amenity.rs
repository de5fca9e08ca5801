//! Known amenity schema
//!
//! Amenity flags are model columns named `amenity__<key>`. The schema maps
//! the human-readable label of each such column to the column itself, so a
//! new amenity only needs a new column in the model artifact.

/// Prefix of every amenity flag column
pub const AMENITY_PREFIX: &str = "amenity__";

/// A recognized amenity: display label and model column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityKey {
    pub label: String,
    pub column: String,
}

impl AmenityKey {
    /// Key for an `amenity__*` column, labelled with [`clean_amenity_name`]
    pub fn from_column(column: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            label: clean_amenity_name(&column),
            column,
        }
    }
}

/// Ordered list of recognized amenities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenitySchema {
    keys: Vec<AmenityKey>,
}

impl AmenitySchema {
    pub fn new(keys: Vec<AmenityKey>) -> Self {
        Self { keys }
    }

    /// Collect every `amenity__*` column, in column order
    pub fn from_columns<'a, I>(columns: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys = columns
            .into_iter()
            .filter(|column| column.starts_with(AMENITY_PREFIX))
            .map(AmenityKey::from_column)
            .collect();
        Self { keys }
    }

    pub fn keys(&self) -> &[AmenityKey] {
        &self.keys
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|key| key.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Find a key by label, exactly first and then ignoring case
    pub fn resolve(&self, label: &str) -> Option<&AmenityKey> {
        self.keys
            .iter()
            .find(|key| key.label == label)
            .or_else(|| {
                self.keys
                    .iter()
                    .find(|key| key.label.to_lowercase() == label.to_lowercase())
            })
    }
}

/// Turn an amenity column into its display label
///
/// `amenity__wifi_high_speed` becomes `Wifi High Speed`.
pub fn clean_amenity_name(column: &str) -> String {
    let name = column
        .strip_prefix(AMENITY_PREFIX)
        .unwrap_or(column)
        .trim_end_matches('_')
        .replace('_', " ")
        .replace("u2013", "\u{2013}");
    title_case(name.trim())
}

fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut previous_cased = false;
    for ch in text.chars() {
        if previous_cased {
            titled.extend(ch.to_lowercase());
        } else {
            titled.extend(ch.to_uppercase());
        }
        previous_cased = ch.is_alphabetic();
    }
    titled
}
