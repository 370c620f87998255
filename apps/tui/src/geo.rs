//! Static geocode table for Indian states and union territories.
//!
//! Bundled with the binary, never fetched. `TT` is the national aggregate
//! row the feed reports first; its coordinates are the initial map center.

/// One geocode table row: state code, display name, map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub const LATLONG: [GeoEntry; 37] = [
    GeoEntry { code: "TT", name: "India", lat: 24.070_541, lng: 83.003_948 },
    GeoEntry { code: "AN", name: "Andaman and Nicobar Islands", lat: 11.7401, lng: 92.6586 },
    GeoEntry { code: "AP", name: "Andhra Pradesh", lat: 15.9129, lng: 79.7400 },
    GeoEntry { code: "AR", name: "Arunachal Pradesh", lat: 28.2180, lng: 94.7278 },
    GeoEntry { code: "AS", name: "Assam", lat: 26.2006, lng: 92.9376 },
    GeoEntry { code: "BR", name: "Bihar", lat: 25.0961, lng: 85.3131 },
    GeoEntry { code: "CH", name: "Chandigarh", lat: 30.7333, lng: 76.7794 },
    GeoEntry { code: "CT", name: "Chhattisgarh", lat: 21.2787, lng: 81.8661 },
    GeoEntry { code: "DN", name: "Dadra and Nagar Haveli and Daman and Diu", lat: 20.1809, lng: 73.0169 },
    GeoEntry { code: "DL", name: "Delhi", lat: 28.7041, lng: 77.1025 },
    GeoEntry { code: "GA", name: "Goa", lat: 15.2993, lng: 74.1240 },
    GeoEntry { code: "GJ", name: "Gujarat", lat: 22.2587, lng: 71.1924 },
    GeoEntry { code: "HR", name: "Haryana", lat: 29.0588, lng: 76.0856 },
    GeoEntry { code: "HP", name: "Himachal Pradesh", lat: 31.1048, lng: 77.1734 },
    GeoEntry { code: "JK", name: "Jammu and Kashmir", lat: 33.7782, lng: 76.5762 },
    GeoEntry { code: "JH", name: "Jharkhand", lat: 23.6102, lng: 85.2799 },
    GeoEntry { code: "KA", name: "Karnataka", lat: 15.3173, lng: 75.7139 },
    GeoEntry { code: "KL", name: "Kerala", lat: 10.8505, lng: 76.2711 },
    GeoEntry { code: "LA", name: "Ladakh", lat: 34.1526, lng: 77.5770 },
    GeoEntry { code: "LD", name: "Lakshadweep", lat: 10.5667, lng: 72.6417 },
    GeoEntry { code: "MP", name: "Madhya Pradesh", lat: 22.9734, lng: 78.6569 },
    GeoEntry { code: "MH", name: "Maharashtra", lat: 19.7515, lng: 75.7139 },
    GeoEntry { code: "MN", name: "Manipur", lat: 24.6637, lng: 93.9063 },
    GeoEntry { code: "ML", name: "Meghalaya", lat: 25.4670, lng: 91.3662 },
    GeoEntry { code: "MZ", name: "Mizoram", lat: 23.1645, lng: 92.9376 },
    GeoEntry { code: "NL", name: "Nagaland", lat: 26.1584, lng: 94.5624 },
    GeoEntry { code: "OR", name: "Odisha", lat: 20.9517, lng: 85.0985 },
    GeoEntry { code: "PY", name: "Puducherry", lat: 11.9416, lng: 79.8083 },
    GeoEntry { code: "PB", name: "Punjab", lat: 31.1471, lng: 75.3412 },
    GeoEntry { code: "RJ", name: "Rajasthan", lat: 27.0238, lng: 74.2179 },
    GeoEntry { code: "SK", name: "Sikkim", lat: 27.5330, lng: 88.5122 },
    GeoEntry { code: "TN", name: "Tamil Nadu", lat: 11.1271, lng: 78.6569 },
    GeoEntry { code: "TG", name: "Telangana", lat: 18.1124, lng: 79.0193 },
    GeoEntry { code: "TR", name: "Tripura", lat: 23.9408, lng: 91.9882 },
    GeoEntry { code: "UP", name: "Uttar Pradesh", lat: 26.8467, lng: 80.9462 },
    GeoEntry { code: "UT", name: "Uttarakhand", lat: 30.0668, lng: 79.0193 },
    GeoEntry { code: "WB", name: "West Bengal", lat: 22.9868, lng: 87.8550 },
];

/// Look a code up in the bundled table.
pub fn lookup(code: &str) -> Option<&'static GeoEntry> {
    LATLONG.iter().find(|entry| entry.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = LATLONG.iter().map(|entry| entry.code).collect();
        assert_eq!(codes.len(), LATLONG.len());
    }

    #[test]
    fn lookup_finds_known_codes() {
        let mh = lookup("MH").unwrap();
        assert_eq!(mh.name, "Maharashtra");
        assert!(lookup("XX").is_none());
    }

    #[test]
    fn national_aggregate_is_present() {
        let tt = lookup("TT").unwrap();
        assert_eq!(tt.name, "India");
    }
}
