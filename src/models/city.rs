use serde::{Deserialize, Serialize};

/// Fixed enumeration of cities the ledger knows about.
///
/// Flights connect cities, airports serve cities. Route matching is by exact
/// city equality and is directional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Delhi,
    Mumbai,
    Bangalore,
    Chennai,
    Kolkata,
    Hyderabad,
    Pune,
    Chandigarh,
}

impl City {
    /// All known cities, in declaration order.
    pub const ALL: [City; 8] = [
        City::Delhi,
        City::Mumbai,
        City::Bangalore,
        City::Chennai,
        City::Kolkata,
        City::Hyderabad,
        City::Pune,
        City::Chandigarh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Delhi => "Delhi",
            City::Mumbai => "Mumbai",
            City::Bangalore => "Bangalore",
            City::Chennai => "Chennai",
            City::Kolkata => "Kolkata",
            City::Hyderabad => "Hyderabad",
            City::Pune => "Pune",
            City::Chandigarh => "Chandigarh",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for City {
    type Err = String;

    /// Parse a city name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown city: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_display_roundtrip() {
        for city in City::ALL {
            let parsed: City = city.as_str().parse().unwrap();
            assert_eq!(parsed, city);
        }
    }

    #[test]
    fn test_city_parse_case_insensitive() {
        assert_eq!("delhi".parse::<City>().unwrap(), City::Delhi);
        assert_eq!("CHANDIGARH".parse::<City>().unwrap(), City::Chandigarh);
    }

    #[test]
    fn test_city_parse_unknown() {
        assert!("Atlantis".parse::<City>().is_err());
    }

    #[test]
    fn test_city_serde_uses_variant_name() {
        let json = serde_json::to_string(&City::Mumbai).unwrap();
        assert_eq!(json, "\"Mumbai\"");
        let parsed: City = serde_json::from_str("\"Pune\"").unwrap();
        assert_eq!(parsed, City::Pune);
    }
}
