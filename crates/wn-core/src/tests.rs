//! Unit tests for wn-core primitives.

#[cfg(test)]
mod geo {
    use crate::{Coordinate, GeoError};

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn zero_distance() {
        let p = coord(22.5743, 88.4348);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn kolkata_block_distance() {
        // Two report sites a few streets apart in Kolkata.
        let a = coord(22.5743, 88.4348);
        let b = coord(22.5760, 88.4348);
        let d = a.distance_km(b);
        assert!((d - 0.18903).abs() < 5e-4, "got {d}");
    }

    #[test]
    fn berlin_paris_distance() {
        let berlin = coord(52.5200, 13.4050);
        let paris = coord(48.8566, 2.3522);
        let d = berlin.distance_km(paris);
        assert!((d - 877.46).abs() < 5.0, "got {d}");
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = coord(30.0, -88.0);
        let b = coord(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = coord(22.5743, 88.4348);
        let b = coord(48.8566, 2.3522);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-9);
    }

    #[test]
    fn non_negative() {
        let origin = coord(22.5743, 88.4348);
        for (lat, lon) in [
            (-90.0, -180.0),
            (-45.0, 170.0),
            (0.0, 0.0),
            (22.5743, 88.4348),
            (90.0, 180.0),
        ] {
            let d = origin.distance_km(coord(lat, lon));
            assert!(d >= 0.0, "distance to ({lat}, {lon}) came out {d}");
        }
    }

    #[test]
    fn grows_with_angular_separation() {
        // Pull the target due north in 0.01° steps; each step must be
        // strictly farther than the last.
        let origin = coord(22.5743, 88.4348);
        let mut last = -1.0;
        for step in 0..=100 {
            let d = origin.distance_km(coord(22.5743 + step as f64 * 0.01, 88.4348));
            assert!(d > last, "distance shrank at step {step}");
            last = d;
        }
    }

    #[test]
    fn antipodes_stay_finite() {
        // Half the Earth's circumference; the `a` clamp keeps sqrt in range.
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 180.0);
        let d = a.distance_km(b);
        assert!(d.is_finite());
        assert!((d - 20_015.09).abs() < 1.0, "got {d}");
    }

    #[test]
    fn crosses_antimeridian() {
        let a = coord(0.0, 179.9);
        let b = coord(0.0, -179.9);
        let d = a.distance_km(b);
        // 0.2 degrees of longitude at the equator, not a lap around the globe.
        assert!((d - 22.24).abs() < 0.1, "got {d}");
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(90.01, 0.0),
            Err(GeoError::LatitudeOutOfRange(90.01))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.5),
            Err(GeoError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(GeoError::NonFinite { what: "latitude", .. })
        ));
        assert!(matches!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(GeoError::NonFinite { what: "longitude", .. })
        ));
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn clamped_pins_to_range() {
        let c = Coordinate::clamped(91.5, 181.0);
        assert_eq!((c.lat(), c.lon()), (90.0, 180.0));
        let c = Coordinate::clamped(-95.0, -200.0);
        assert_eq!((c.lat(), c.lon()), (-90.0, -180.0));
    }

    #[test]
    fn display() {
        assert_eq!(coord(22.5743, 88.4348).to_string(), "(22.574300, 88.434800)");
    }
}

#[cfg(test)]
mod eta {
    use crate::{Coordinate, Eta, GeoError, TravelProfile, URBAN_AVERAGE_SPEED_KMH};

    #[test]
    fn default_is_urban_average() {
        assert_eq!(TravelProfile::default().speed_kmh(), URBAN_AVERAGE_SPEED_KMH);
    }

    #[test]
    fn zero_distance_zero_minutes() {
        assert_eq!(TravelProfile::default().eta(0.0), Eta::ZERO);
    }

    #[test]
    fn thirty_km_is_one_hour() {
        assert_eq!(TravelProfile::default().eta(30.0), Eta(60));
    }

    #[test]
    fn rounds_to_whole_minutes() {
        let profile = TravelProfile::default();
        assert_eq!(profile.eta(1.0), Eta(2));
        assert_eq!(profile.eta(0.5), Eta(1));
        // Sub-200 m errands round all the way down.
        assert_eq!(profile.eta(0.1), Eta(0));
    }

    #[test]
    fn nearby_task_rounds_to_zero() {
        // The Kolkata pair from the geo tests: ~189 m away, 30 km/h,
        // so the displayed estimate is "0 min".
        let profile = TravelProfile::default();
        let here = Coordinate::new(22.5743, 88.4348).unwrap();
        let task = Coordinate::new(22.5760, 88.4348).unwrap();
        assert_eq!(profile.eta_between(here, task), Eta(0));
    }

    #[test]
    fn custom_speed() {
        let cyclist = TravelProfile::new(60.0).unwrap();
        assert_eq!(cyclist.eta(30.0), Eta(30));
        assert_eq!(cyclist.eta(1.0), Eta(1));
    }

    #[test]
    fn monotone_in_distance() {
        let profile = TravelProfile::default();
        let mut last = 0;
        for tenths in 0..500 {
            let minutes = profile.eta(tenths as f64 / 10.0).minutes();
            assert!(minutes >= last, "eta went down at {tenths} tenths of a km");
            last = minutes;
        }
    }

    #[test]
    fn negative_distance_clamps_to_zero() {
        assert_eq!(TravelProfile::default().eta(-5.0), Eta::ZERO);
    }

    #[test]
    fn rejects_bad_speeds() {
        assert_eq!(TravelProfile::new(0.0), Err(GeoError::SpeedOutOfRange(0.0)));
        assert_eq!(TravelProfile::new(-10.0), Err(GeoError::SpeedOutOfRange(-10.0)));
        assert!(TravelProfile::new(f64::NAN).is_err());
        assert!(TravelProfile::new(f64::INFINITY).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Eta(7).to_string(), "7 min");
        assert_eq!(Eta::ZERO.to_string(), "0 min");
    }
}

#[cfg(test)]
mod ids {
    use crate::{TaskId, WorkerId};

    #[test]
    fn raw_roundtrip() {
        let id = TaskId(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(TaskId::from(42u64), id);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn ordering() {
        assert!(TaskId(0) < TaskId(1));
        assert!(WorkerId(100) > WorkerId(99));
    }

    #[test]
    fn display() {
        assert_eq!(TaskId(7).to_string(), "TaskId(7)");
        assert_eq!(WorkerId(3).to_string(), "WorkerId(3)");
    }
}

#[cfg(test)]
mod status {
    use crate::{TaskPriority, TaskStatus};

    #[test]
    fn open_states() {
        assert!(TaskStatus::Reported.is_open());
        assert!(TaskStatus::Assigned.is_open());
        assert!(TaskStatus::InProgress.is_open());
        assert!(!TaskStatus::Resolved.is_open());
    }

    #[test]
    fn status_label_roundtrip() {
        for status in [
            TaskStatus::Reported,
            TaskStatus::Assigned,
            TaskStatus::InProgress,
            TaskStatus::Resolved,
        ] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("exploded"), None);
    }

    #[test]
    fn priority_ordering() {
        assert!(TaskPriority::Low < TaskPriority::Medium);
        assert!(TaskPriority::Medium < TaskPriority::High);
        assert!(TaskPriority::High < TaskPriority::Urgent);
    }

    #[test]
    fn priority_label_roundtrip() {
        for priority in [
            TaskPriority::Low,
            TaskPriority::Medium,
            TaskPriority::High,
            TaskPriority::Urgent,
        ] {
            assert_eq!(TaskPriority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(TaskPriority::parse("asap"), None);
    }

    #[test]
    fn display() {
        assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
        assert_eq!(TaskPriority::Urgent.to_string(), "urgent");
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;

    #[test]
    fn seconds_to_millis() {
        assert_eq!(Timestamp::from_unix_secs(5), Timestamp(5_000));
        assert_eq!(Timestamp::from_unix_secs(5).unix_ms(), 5_000);
    }

    #[test]
    fn elapsed_millis() {
        let earlier = Timestamp(1_000);
        let later = Timestamp(6_500);
        assert_eq!(later.millis_since(earlier), 5_500);
    }

    #[test]
    fn backwards_clock_saturates() {
        let earlier = Timestamp(1_000);
        let later = Timestamp(6_500);
        assert_eq!(earlier.millis_since(later), 0);
        // The raw subtraction still exposes the signed difference.
        assert_eq!(earlier - later, -5_500);
    }

    #[test]
    fn offset_arithmetic() {
        assert_eq!(Timestamp(1_000) + 500, Timestamp(1_500));
        assert_eq!(Timestamp(1_500) - Timestamp(1_000), 500);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp(1_000).to_string(), "1000ms");
    }
}
