//! Unit tests for vr-core primitives.

#[cfg(test)]
mod geo {
    use crate::geo::EARTH_RADIUS_MILES;
    use crate::{GeoPoint, path_length_miles};

    #[test]
    fn empty_and_single_point_are_zero() {
        assert_eq!(path_length_miles(&[]), 0.0);
        assert_eq!(path_length_miles(&[GeoPoint::new(37.54, -77.43)]), 0.0);
    }

    #[test]
    fn zero_length_is_positive_zero() {
        // Serialized as `0.0`, never `-0.0`.
        assert!(path_length_miles(&[]).is_sign_positive());
    }

    #[test]
    fn one_degree_at_equator_matches_closed_form() {
        let expected = EARTH_RADIUS_MILES * 1f64.to_radians();
        let d = path_length_miles(&[GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]);
        assert!((d - expected).abs() < 1e-9, "got {d}, expected {expected}");
        assert!((d - 69.0976).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_equals_one_of_longitude_at_equator() {
        let along_lat = GeoPoint::new(0.0, 0.0).distance_miles(GeoPoint::new(1.0, 0.0));
        let along_lon = GeoPoint::new(0.0, 0.0).distance_miles(GeoPoint::new(0.0, 1.0));
        assert!((along_lat - along_lon).abs() < 1e-9);
    }

    #[test]
    fn segments_are_summed_in_order() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 2.0),
        ];
        let whole = path_length_miles(&pts);
        let parts = pts[0].distance_miles(pts[1]) + pts[1].distance_miles(pts[2]);
        assert_eq!(whole, parts);
    }

    #[test]
    fn deterministic() {
        let pts = [
            GeoPoint::new(37.5407, -77.4360),
            GeoPoint::new(37.5412, -77.4301),
            GeoPoint::new(37.5450, -77.4288),
        ];
        assert_eq!(path_length_miles(&pts).to_bits(), path_length_miles(&pts).to_bits());
    }

    #[test]
    fn repeated_point_adds_nothing() {
        let p = GeoPoint::new(38.03, -78.48);
        assert_eq!(path_length_miles(&[p, p, p]), 0.0);
    }

    #[test]
    fn nan_input_does_not_panic() {
        let d = path_length_miles(&[GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(0.0, 1.0)]);
        assert!(d.is_nan());
    }

    #[test]
    fn array_conversion() {
        let p: GeoPoint = [37.1, -76.2].into();
        assert_eq!(p, GeoPoint::new(37.1, -76.2));
        assert_eq!(<[f64; 2]>::from(p), [37.1, -76.2]);
    }
}

#[cfg(test)]
mod func_class {
    use crate::FuncClass;

    #[test]
    fn explicit_mapping() {
        let cases = [
            ("motorway", "1"), ("motorway_link", "1"),
            ("trunk", "2"), ("trunk_link", "2"),
            ("primary", "3"), ("primary_link", "3"),
            ("secondary", "4"), ("secondary_link", "4"),
            ("tertiary", "5"), ("tertiary_link", "5"),
            ("unclassified", "6"),
            ("residential", "7"), ("living_street", "7"), ("service", "7"),
        ];
        for (highway, code) in cases {
            assert_eq!(FuncClass::from_highway(highway).as_str(), code, "{highway}");
        }
    }

    #[test]
    fn unknown_tags_are_local() {
        for highway in ["footway", "cycleway", "", "MOTORWAY", "construction"] {
            assert_eq!(FuncClass::from_highway(highway), FuncClass::Local, "{highway:?}");
        }
    }

    #[test]
    fn codes_and_indices_line_up() {
        for (i, fc) in FuncClass::ALL.into_iter().enumerate() {
            assert_eq!(fc.index(), i);
            assert_eq!(fc.code() as usize, i + 1);
            assert_eq!(fc.as_str(), (i + 1).to_string());
        }
    }

    #[test]
    fn parse_round_trip_and_rejects_out_of_range() {
        assert_eq!("4".parse::<FuncClass>().unwrap(), FuncClass::MinorArterial);
        assert!("0".parse::<FuncClass>().is_err());
        assert!("8".parse::<FuncClass>().is_err());
        assert!("local".parse::<FuncClass>().is_err());
    }
}

#[cfg(test)]
mod registry {
    use std::collections::HashSet;

    use crate::jurisdiction::{self, JurisdictionKind};
    use crate::registry::JURISDICTION_COUNT;

    #[test]
    fn counts() {
        assert_eq!(jurisdiction::all().len(), JURISDICTION_COUNT);
        assert_eq!(jurisdiction::counties().count(), 95);
        assert_eq!(jurisdiction::cities().count(), 38);
    }

    #[test]
    fn ids_and_fips_are_unique() {
        let ids: HashSet<_> = jurisdiction::all().iter().map(|j| j.id).collect();
        let fips: HashSet<_> = jurisdiction::all().iter().map(|j| j.fips).collect();
        assert_eq!(ids.len(), JURISDICTION_COUNT);
        assert_eq!(fips.len(), JURISDICTION_COUNT);
    }

    #[test]
    fn ids_are_lowercase_snake_case() {
        for j in jurisdiction::all() {
            assert!(
                j.id.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "bad id {:?}",
                j.id
            );
        }
    }

    #[test]
    fn fips_codes_are_three_digits() {
        for j in jurisdiction::all() {
            assert_eq!(j.fips.len(), 3, "{}", j.id);
            assert!(j.fips.chars().all(|c| c.is_ascii_digit()), "{}", j.id);
        }
    }

    #[test]
    fn bboxes_are_well_formed_and_inside_virginia() {
        for j in jurisdiction::all() {
            let b = j.bbox;
            assert!(b.is_well_formed(), "{} has inverted bbox {b}", j.id);
            assert!(b.south >= 36.0 && b.north <= 40.0, "{} latitude out of range: {b}", j.id);
            assert!(b.west >= -84.0 && b.east <= -75.0, "{} longitude out of range: {b}", j.id);
        }
    }

    #[test]
    fn counties_precede_cities() {
        let first_city = jurisdiction::all()
            .iter()
            .position(|j| j.kind == JurisdictionKind::City)
            .unwrap();
        assert_eq!(first_city, 95);
        assert!(jurisdiction::all()[first_city..].iter().all(|j| j.kind == JurisdictionKind::City));
    }

    #[test]
    fn lookup() {
        let henrico = jurisdiction::lookup("henrico").unwrap();
        assert_eq!(henrico.name, "Henrico County");
        assert_eq!(henrico.fips, "087");
        assert_eq!(henrico.kind, JurisdictionKind::County);

        let hopewell = jurisdiction::lookup("hopewell").unwrap();
        assert_eq!(hopewell.kind, JurisdictionKind::City);
        assert_eq!(hopewell.bbox.north, 37.3337);

        assert!(jurisdiction::lookup("atlantis").is_none());
    }

    #[test]
    fn display() {
        let j = jurisdiction::lookup("fairfax_city").unwrap();
        assert_eq!(j.to_string(), "Fairfax City (fairfax_city)");
        assert_eq!(j.kind.to_string(), "city");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{FetchConfig, RunConfig};

    #[test]
    fn defaults() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.fetch.servers.len(), 4);
        assert!(cfg.fetch.servers[0].contains("overpass-api.de"));
        assert_eq!(cfg.fetch.timeout, Duration::from_secs(300));
        assert_eq!(cfg.fetch.max_retries, 3);
        assert_eq!(cfg.fetch.retry_delay, Duration::from_secs(5));
        assert_eq!(cfg.pacing_delay, Duration::from_secs(10));
        assert_eq!(cfg.output_dir.to_str(), Some("data"));
        assert!(!cfg.pretty_json);
        assert!(cfg.fetch.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_server_list() {
        let cfg = FetchConfig { servers: vec![], ..FetchConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_retries() {
        let cfg = FetchConfig { max_retries: 0, ..FetchConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::utc_now_iso;

    #[test]
    fn iso_timestamp_shape() {
        let ts = utc_now_iso();
        // 2024-05-01T12:34:56.789Z
        assert_eq!(ts.len(), 24, "{ts}");
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
