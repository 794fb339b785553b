//! Postcode reference data

use serde::{Deserialize, Serialize};

use super::LatLng;

/// Country partition for postcode reference data
///
/// Each country's postcodes live in their own table, and the enum is the
/// only way to name a partition: an unknown prefix fails deserialization at
/// the HTTP boundary and never reaches the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryPrefix {
    Uk,
    Mt,
}

impl CountryPrefix {
    /// Postcode table backing this partition
    pub fn table(&self) -> &'static str {
        match self {
            Self::Uk => "uk_postcode",
            Self::Mt => "mt_postcode",
        }
    }
}

impl std::fmt::Display for CountryPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uk => write!(f, "uk"),
            Self::Mt => write!(f, "mt"),
        }
    }
}

impl std::str::FromStr for CountryPrefix {
    type Err = InvalidCountryPrefix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uk" => Ok(Self::Uk),
            "mt" => Ok(Self::Mt),
            other => Err(InvalidCountryPrefix(other.to_string())),
        }
    }
}

/// Country prefix outside the supported partition set
#[derive(Debug, thiserror::Error)]
#[error("invalid country prefix: {0}")]
pub struct InvalidCountryPrefix(pub String);

/// Postcode coordinate lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostcodeCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LatLng> for PostcodeCoordinate {
    fn from(coord: LatLng) -> Self {
        Self {
            latitude: coord.lat,
            longitude: coord.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_parses_known_partitions() {
        assert_eq!("uk".parse::<CountryPrefix>().unwrap(), CountryPrefix::Uk);
        assert_eq!("mt".parse::<CountryPrefix>().unwrap(), CountryPrefix::Mt);
        assert!("de".parse::<CountryPrefix>().is_err());
    }

    #[test]
    fn prefix_maps_to_partition_table() {
        assert_eq!(CountryPrefix::Uk.table(), "uk_postcode");
        assert_eq!(CountryPrefix::Mt.table(), "mt_postcode");
    }
}
