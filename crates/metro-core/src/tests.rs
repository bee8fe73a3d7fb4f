//! Unit tests for metro-core primitives.

use crate::config::StationDef;

/// Minimal n-station line laid out along a meridian, ~1.1 km apart.
fn stations(n: usize) -> Vec<StationDef> {
    (0..n)
        .map(|i| {
            StationDef::new(
                &format!("s{i}"),
                &format!("Station {i}"),
                19.40 + 0.01 * i as f64,
                -99.10,
            )
        })
        .collect()
}

#[cfg(test)]
mod topology {
    use super::stations;
    use crate::{Direction, MetroError, Topology};

    #[test]
    fn rejects_fewer_than_two_stations() {
        for n in 0..2 {
            let err = Topology::new("stub", stations(n)).unwrap_err();
            assert!(matches!(
                err,
                MetroError::DegenerateTopology { stations: got, .. } if got == n
            ));
        }
        assert!(Topology::new("stub", stations(2)).is_ok());
    }

    #[test]
    fn neighbor_clamps_at_termini() {
        let topo = Topology::new("stub", stations(4)).unwrap();
        assert_eq!(topo.neighbor(0, Direction::Outbound), 1);
        assert_eq!(topo.neighbor(2, Direction::Outbound), 3);
        assert_eq!(topo.neighbor(3, Direction::Outbound), 3); // clamped
        assert_eq!(topo.neighbor(3, Direction::Inbound), 2);
        assert_eq!(topo.neighbor(1, Direction::Inbound), 0);
        assert_eq!(topo.neighbor(0, Direction::Inbound), 0); // clamped
    }

    #[test]
    fn terminus_detection() {
        let topo = Topology::new("stub", stations(3)).unwrap();
        assert!(topo.is_terminus(2, Direction::Outbound));
        assert!(!topo.is_terminus(2, Direction::Inbound));
        assert!(topo.is_terminus(0, Direction::Inbound));
        assert!(!topo.is_terminus(0, Direction::Outbound));
        assert!(!topo.is_terminus(1, Direction::Outbound));
        assert!(!topo.is_terminus(1, Direction::Inbound));
    }

    #[test]
    fn direction_labels_are_terminus_names() {
        let topo = Topology::new("stub", stations(3)).unwrap();
        assert_eq!(topo.direction_label(Direction::Outbound), "Station 2");
        assert_eq!(topo.direction_label(Direction::Inbound), "Station 0");
    }

    #[test]
    fn route_length_sums_segments() {
        let topo = Topology::new("stub", stations(3)).unwrap();
        // Two ~1.11 km segments of latitude.
        let len = topo.route_length_m();
        assert!((len - 2.0 * 1_111.95).abs() < 20.0, "got {len}");
    }

    #[test]
    fn flip_is_involutive() {
        assert_eq!(Direction::Outbound.flip(), Direction::Inbound);
        assert_eq!(Direction::Inbound.flip().flip(), Direction::Inbound);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..32 {
            assert_eq!(
                a.gen_range(0u32..=1_000_000),
                b.gen_range(0u32..=1_000_000)
            );
        }
    }

    #[test]
    fn children_diverge() {
        let mut root_a = SimRng::new(7);
        let mut root_b = SimRng::new(7);
        let mut c0 = root_a.child(0);
        let mut c1 = root_b.child(1);
        let xs: Vec<u64> = (0..8).map(|_| c0.gen_range(0u64..u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| c1.gen_range(0u64..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps_probability() {
        let mut rng = SimRng::new(1);
        assert!(!rng.gen_bool(-0.5));
        assert!(rng.gen_bool(1.5));
    }

    #[test]
    fn choose_on_empty_slice() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(19.4326, -99.1332);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(19.0, -99.0);
        let b = GeoPoint::new(20.0, -99.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }
}

#[cfg(test)]
mod config {
    use crate::SimParams;

    #[test]
    fn default_params() {
        let p = SimParams::default();
        assert_eq!(p.train_count, 7);
        assert_eq!(p.speed_range, 0.015..=0.025);
        assert_eq!(p.incident_probability, 0.10);
        assert_eq!(p.wagons, 6);
        assert!(p.tick_secs > 0.0);
    }
}
