#[cfg(test)]
mod tests {
    use crate::cluster::Coordinate;
    use crate::cluster::distance::{EARTH_R, distance_haversine};
    use quickcheck::{TestResult, quickcheck};
    use std::f64::consts::PI;

    #[test]
    fn test_distance_haversine() {
        let p1 = Coordinate::new(59.955982, 30.244759);
        let p2 = Coordinate::new(59.955975, 30.24472);
        let expected = 0.0023064939513361945;
        let actual1 = distance_haversine(&p1, &p2);
        let actual2 = distance_haversine(&p2, &p1);
        assert!((actual1 - expected).abs() < 1e-10);
        assert!((actual2 - expected).abs() < 1e-10);
        assert_eq!(distance_haversine(&p1, &p1), 0.0);
        assert_eq!(distance_haversine(&p2, &p2), 0.0);
    }

    #[test]
    fn test_distance_one_degree_on_equator() {
        let origin = Coordinate::new(0.0, 0.0);
        let east = Coordinate::new(0.0, 1.0);
        let north = Coordinate::new(1.0, 0.0);
        assert!((distance_haversine(&origin, &east) - 111.1950802335329).abs() < 1e-9);
        assert!((distance_haversine(&origin, &north) - 111.1950802335329).abs() < 1e-9);
        assert!(
            (distance_haversine(&origin, &Coordinate::new(0.0, 2.0)) - 222.3901604670658).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_distance_london_new_york() {
        let london = Coordinate::new(51.5007, -0.1246);
        let new_york = Coordinate::new(40.6892, -74.0445);
        assert!((london.distance(&new_york) - 5574.848157146156).abs() < 1e-6);
    }

    #[test]
    fn test_distance_antipodal() {
        let half_circumference = PI * EARTH_R;
        let cases = [
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)),
            (Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0)),
            (Coordinate::new(45.0, 10.0), Coordinate::new(-45.0, -170.0)),
        ];
        for (a, b) in cases {
            let d = distance_haversine(&a, &b);
            assert!(d.is_finite(), "{:?} -> {:?} gave {}", a, b, d);
            assert!((d - half_circumference).abs() < 1e-3, "{:?} -> {:?} gave {}", a, b, d);
        }
    }

    #[test]
    fn test_distance_out_of_range_passes_through() {
        // 190 degrees of longitude is the same meridian as -170
        let a = Coordinate::new(0.0, 190.0);
        let b = Coordinate::new(0.0, -170.0);
        assert!(distance_haversine(&a, &b) < 1e-6);
    }

    #[test]
    fn test_distance_huge_finite_coordinates_stay_finite() {
        let a = Coordinate::new(1e308, 0.0);
        let b = Coordinate::new(-1e308, 0.0);
        let c = Coordinate::new(0.0, f64::MAX);
        let d = Coordinate::new(0.0, -f64::MAX);
        for (p, q) in [(a, b), (c, d), (a, d)] {
            let dist = distance_haversine(&p, &q);
            assert!(dist.is_finite(), "{:?} -> {:?} gave {}", p, q, dist);
            assert!((0.0..=PI * EARTH_R + 1e-6).contains(&dist));
        }
    }

    fn coordinate((lat, lon): (i32, i32)) -> Coordinate {
        Coordinate::new(lat as f64 / 100.0, lon as f64 / 100.0)
    }

    #[test]
    fn prop_distance_is_symmetric() {
        fn prop(a: (i32, i32), b: (i32, i32)) -> bool {
            let (a, b) = (coordinate(a), coordinate(b));
            distance_haversine(&a, &b) == distance_haversine(&b, &a)
        }
        quickcheck(prop as fn((i32, i32), (i32, i32)) -> bool);
    }

    #[test]
    fn prop_self_distance_is_zero() {
        fn prop(a: (i32, i32)) -> bool {
            let a = coordinate(a);
            distance_haversine(&a, &a) == 0.0
        }
        quickcheck(prop as fn((i32, i32)) -> bool);
    }

    #[test]
    fn prop_distance_is_finite_and_bounded() {
        // Raw f64 inputs span every exponent, up to f64::MAX
        fn prop(a: (f64, f64), b: (f64, f64)) -> TestResult {
            if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
                return TestResult::discard();
            }
            let d = distance_haversine(&Coordinate::from(a), &Coordinate::from(b));
            TestResult::from_bool(d.is_finite() && d >= 0.0 && d <= PI * EARTH_R + 1e-6)
        }
        quickcheck(prop as fn((f64, f64), (f64, f64)) -> TestResult);
    }
}
