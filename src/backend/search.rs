use std::fmt;
use std::str::FromStr;

use super::url_state::{QueryParams, MOBILE_MENU, MOBILE_SEARCH};
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinates: {0}")]
pub struct CoordinateError(String);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl FromStr for LatLng {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_numbers(s)?.as_slice() {
            [lat, lng] => Ok(LatLng { lat: *lat, lng: *lng }),
            _ => Err(CoordinateError(s.to_string())),
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// North-east and south-west corners, encoded `neLat,neLng,swLat,swLng`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub ne: LatLng,
    pub sw: LatLng,
}

impl FromStr for LatLngBounds {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_numbers(s)?.as_slice() {
            [ne_lat, ne_lng, sw_lat, sw_lng] => Ok(LatLngBounds {
                ne: LatLng { lat: *ne_lat, lng: *ne_lng },
                sw: LatLng { lat: *sw_lat, lng: *sw_lng },
            }),
            _ => Err(CoordinateError(s.to_string())),
        }
    }
}

impl fmt::Display for LatLngBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.ne, self.sw)
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, CoordinateError> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| CoordinateError(s.to_string()))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPlace {
    pub address: String,
    pub origin: LatLng,
    pub bounds: LatLngBounds,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationValue {
    pub search: String,
    pub selected_place: Option<SelectedPlace>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFormValues {
    pub location: Option<LocationValue>,
}

/// Keys the top bar writes into the search page URL.
const LOCATION_KEYS: [&str; 4] = ["address", "origin", "bounds", "country"];

/// Prefills the search form from the URL, but only when the full place is
/// present. A partial place would show an address we cannot search by.
pub fn initial_search_form_values(params: &QueryParams) -> SearchFormValues {
    let place = (|| {
        let address = params.get("address")?;
        let origin = params.get("origin")?.parse::<LatLng>().ok()?;
        let bounds = params.get("bounds")?.parse::<LatLngBounds>().ok()?;
        let country = params.get("country")?;
        Some(SelectedPlace {
            address: address.to_string(),
            origin,
            bounds,
            country: country.to_string(),
        })
    })();

    SearchFormValues {
        location: place.map(|place| LocationValue {
            search: place.address.clone(),
            selected_place: Some(place),
        }),
    }
}

/// Filters currently applied on the search page, without the place and
/// modal keys the top bar manages itself.
pub fn current_search_params(params: &QueryParams) -> QueryParams {
    params
        .iter()
        .filter(|(key, _)| !LOCATION_KEYS.contains(key) && *key != MOBILE_MENU && *key != MOBILE_SEARCH)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub fn search_params(current: &QueryParams, values: &LocationValue, config: &Config) -> QueryParams {
    let mut params = current.clone();
    match &values.selected_place {
        Some(place) => {
            if config.sort_search_by_distance {
                params.set("origin", place.origin.to_string());
            }
            params.set("address", values.search.clone());
            params.set("bounds", place.bounds.to_string());
            params.set("country", place.country.clone());
        }
        None => {
            params.set("address", values.search.clone());
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helsinki() -> SelectedPlace {
        SelectedPlace {
            address: "Helsinki, Finland".into(),
            origin: LatLng { lat: 60.17, lng: 24.94 },
            bounds: "60.3,25.2,60.1,24.8".parse().expect("Failed to parse bounds"),
            country: "FI".into(),
        }
    }

    #[test]
    fn test_coordinates_parse_and_print() {
        let origin: LatLng = "60.17, 24.94".parse().expect("Failed to parse origin");
        assert_eq!(origin.to_string(), "60.17,24.94");

        let bounds: LatLngBounds = "1,2,3,4".parse().expect("Failed to parse bounds");
        assert_eq!(bounds.ne, LatLng { lat: 1.0, lng: 2.0 });
        assert_eq!(bounds.to_string(), "1,2,3,4");

        assert!("1,2,3".parse::<LatLngBounds>().is_err());
        assert!("north,2".parse::<LatLng>().is_err());
        assert!("NaN,2".parse::<LatLng>().is_err());
    }

    #[test]
    fn test_initial_values_need_full_place() {
        let full = QueryParams::parse("address=Helsinki&origin=60.17,24.94&bounds=60.3,25.2,60.1,24.8&country=FI");
        let values = initial_search_form_values(&full);
        let location = values.location.expect("Expected prefilled location");
        assert_eq!(location.search, "Helsinki");
        assert_eq!(location.selected_place.map(|p| p.country), Some("FI".to_string()));

        let partial = QueryParams::parse("address=Helsinki&country=FI");
        assert_eq!(initial_search_form_values(&partial), SearchFormValues::default());

        let broken = QueryParams::parse("address=Helsinki&origin=x&bounds=60.3,25.2,60.1,24.8&country=FI");
        assert_eq!(initial_search_form_values(&broken).location, None);
    }

    #[test]
    fn test_search_params_merge_over_current_filters() {
        let current = QueryParams::parse("pub_category=bikes&address=Old");
        let values = LocationValue {
            search: "Helsinki, Finland".into(),
            selected_place: Some(helsinki()),
        };

        let params = search_params(&current, &values, &Config::default());
        assert_eq!(params.get("pub_category"), Some("bikes"));
        assert_eq!(params.get("address"), Some("Helsinki, Finland"));
        assert_eq!(params.get("bounds"), Some("60.3,25.2,60.1,24.8"));
        assert_eq!(params.get("country"), Some("FI"));
        assert_eq!(params.get("origin"), None);

        let by_distance = Config {
            sort_search_by_distance: true,
            ..Config::default()
        };
        let params = search_params(&current, &values, &by_distance);
        assert_eq!(params.get("origin"), Some("60.17,24.94"));
    }

    #[test]
    fn test_search_params_without_place() {
        let values = LocationValue {
            search: "bikes".into(),
            selected_place: None,
        };
        let params = search_params(&QueryParams::new(), &values, &Config::default());
        assert_eq!(params.stringify(), "address=bikes");
    }

    #[test]
    fn test_current_search_params_drop_managed_keys() {
        let params = QueryParams::parse("address=x&bounds=1,2,3,4&mobilesearch=open&price=10,50");
        let current = current_search_params(&params);
        assert_eq!(current.stringify(), "price=10%2C50");
    }
}
