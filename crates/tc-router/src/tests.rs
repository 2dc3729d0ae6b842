//! Unit tests for tc-router.

#[cfg(test)]
mod helpers {
    use tc_catalogue::{Catalogue, RouteKind};
    use tc_core::GeoPoint;

    use crate::RouterSettings;

    /// 36 km/h (10 m/s) and a two-minute wait: ride times are metres / 10.
    pub fn settings() -> RouterSettings {
        RouterSettings::new(36.0, 2.0).unwrap()
    }

    /// Linear bus `1` over `A-B-C`, linear bus `2` over `C-D`, and an
    /// isolated stop `Z`.
    ///
    /// `A→B` 1000, `B→A` 1500, `B→C` 2000 (reverse falls back), `C→D` 500.
    pub fn line() -> Catalogue {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(0.0, 0.00)).unwrap();
        c.add_stop("B", GeoPoint::new(0.0, 0.01)).unwrap();
        c.add_stop("C", GeoPoint::new(0.0, 0.02)).unwrap();
        c.add_stop("D", GeoPoint::new(0.0, 0.03)).unwrap();
        c.add_stop("Z", GeoPoint::new(1.0, 1.00)).unwrap();

        c.set_distance("A", "B", 1000).unwrap();
        c.set_distance("B", "A", 1500).unwrap();
        c.set_distance("B", "C", 2000).unwrap();
        c.set_distance("C", "D", 500).unwrap();

        c.add_bus("1", RouteKind::Linear, &["A", "B", "C"]).unwrap();
        c.add_bus("2", RouteKind::Linear, &["C", "D"]).unwrap();
        c
    }

    /// Circular bus `r` over `A-B-C-A`, every leg 1000 m.
    pub fn ring() -> Catalogue {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(0.00, 0.00)).unwrap();
        c.add_stop("B", GeoPoint::new(0.00, 0.01)).unwrap();
        c.add_stop("C", GeoPoint::new(0.01, 0.01)).unwrap();
        c.set_distance("A", "B", 1000).unwrap();
        c.set_distance("B", "C", 1000).unwrap();
        c.set_distance("C", "A", 1000).unwrap();
        c.add_bus("r", RouteKind::Circular, &["A", "B", "C", "A"]).unwrap();
        c
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod settings {
    use tc_catalogue::Catalogue;
    use crate::{RouterError, RouterSettings, TransportRouter};

    #[test]
    fn unit_conversions() {
        let s = RouterSettings::new(36.0, 6.0).unwrap();
        assert_eq!(s.wait_secs(), 360.0);
        assert_eq!(s.velocity_m_per_s(), 10.0);
        assert_eq!(s.ride_secs(1000.0), 100.0);
    }

    #[test]
    fn zero_wait_is_allowed() {
        assert!(RouterSettings::new(40.0, 0.0).is_ok());
    }

    #[test]
    fn invalid_values_rejected() {
        assert_eq!(RouterSettings::new(0.0, 6.0), Err(RouterError::InvalidVelocity(0.0)));
        assert_eq!(RouterSettings::new(-5.0, 6.0), Err(RouterError::InvalidVelocity(-5.0)));
        assert_eq!(RouterSettings::new(40.0, -1.0), Err(RouterError::InvalidWaitTime(-1.0)));
        assert!(matches!(
            RouterSettings::new(f64::NAN, 6.0),
            Err(RouterError::InvalidVelocity(_))
        ));
        assert!(matches!(
            RouterSettings::new(40.0, f64::INFINITY),
            Err(RouterError::InvalidWaitTime(_))
        ));
    }

    #[test]
    fn router_validates_settings() {
        let c = Catalogue::new();
        let bad = RouterSettings { bus_velocity_kmh: 0.0, bus_wait_time_min: 1.0 };
        assert_eq!(
            TransportRouter::new(bad, &c).err(),
            Some(RouterError::InvalidVelocity(0.0))
        );
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tc_catalogue::{Catalogue, RouteKind};
    use tc_core::{BusId, GeoPoint, StopId, VertexId};
    use crate::{RouteEdge, RouteGraphBuilder, TransportRouter};
    use super::helpers::{approx, line, ring, settings};

    #[test]
    fn wait_edges_come_first() {
        let c = line();
        let built = RouteGraphBuilder::new(&c, settings()).build();
        let g = &built.graph;

        assert_eq!(g.vertex_count(), 10);
        for (i, (_, edge)) in g.edges().take(c.stops().len()).enumerate() {
            let stop = StopId::from_index(i);
            assert_eq!(edge.from, stop.wait_vertex());
            assert_eq!(edge.to, stop.board_vertex());
            assert_eq!(edge.weight, 120.0);
            assert_eq!(edge.payload, RouteEdge::Wait { stop });
        }
        assert_eq!(built.vertex_by_stop["C"], VertexId(4));
        assert_eq!(built.vertex_by_stop["Z"], VertexId(8));
    }

    #[test]
    fn linear_edges_cover_both_directions() {
        let c = line();
        let built = RouteGraphBuilder::new(&c, settings()).build();
        // 5 wait + bus 1: 2 * 3 pairs + bus 2: 2 * 1 pair.
        assert_eq!(built.graph.edge_count(), 5 + 6 + 2);

        let ride = |from: u32, to: u32| {
            built
                .graph
                .incident_edges(StopId(from).board_vertex())
                .iter()
                .map(|&e| built.graph.edge(e))
                .find(|e| e.to == StopId(to).wait_vertex())
                .map(|e| (e.weight, e.payload))
        };

        let bus1 = BusId(0);
        assert_eq!(ride(0, 1), Some((100.0, RouteEdge::Ride { bus: bus1, span: 1 })));
        assert_eq!(ride(0, 2), Some((300.0, RouteEdge::Ride { bus: bus1, span: 2 })));
        // B→A explicit 1500; C→B falls back to B→C.
        assert_eq!(ride(1, 0), Some((150.0, RouteEdge::Ride { bus: bus1, span: 1 })));
        assert_eq!(ride(2, 0), Some((350.0, RouteEdge::Ride { bus: bus1, span: 2 })));
        assert_eq!(ride(3, 2), Some((50.0, RouteEdge::Ride { bus: BusId(1), span: 1 })));
        assert_eq!(ride(4, 0), None);
    }

    #[test]
    fn circular_edges_wrap_to_first_stop() {
        let c = ring();
        let built = RouteGraphBuilder::new(&c, settings()).build();
        // 3 wait + 3 forward pairs + 2 wrap edges.
        assert_eq!(built.graph.edge_count(), 3 + 3 + 2);

        let from_c: Vec<_> = built
            .graph
            .incident_edges(StopId(2).board_vertex())
            .iter()
            .map(|&e| built.graph.edge(e))
            .collect();
        assert_eq!(from_c.len(), 1);
        assert_eq!(from_c[0].to, StopId(0).wait_vertex());
        assert_eq!(from_c[0].payload, RouteEdge::Ride { bus: BusId(0), span: 1 });
        assert!(approx(from_c[0].weight, 100.0));

        let b_to_a = built
            .graph
            .incident_edges(StopId(1).board_vertex())
            .iter()
            .map(|&e| built.graph.edge(e))
            .find(|e| e.to == StopId(0).wait_vertex())
            .unwrap();
        assert_eq!(b_to_a.payload, RouteEdge::Ride { bus: BusId(0), span: 2 });
        assert!(approx(b_to_a.weight, 200.0));
    }

    #[test]
    fn wrap_length_sums_legs_in_travel_order() {
        // Great-circle legs only, so the lengths are not round numbers.
        let mut c = Catalogue::new();
        c.add_stop("P", GeoPoint::new(43.598701, 39.730623)).unwrap();
        c.add_stop("Q", GeoPoint::new(43.585586, 39.733879)).unwrap();
        c.add_stop("R", GeoPoint::new(43.590317, 39.746833)).unwrap();
        c.add_stop("S", GeoPoint::new(43.587795, 39.716901)).unwrap();
        c.add_bus("w", RouteKind::Circular, &["P", "Q", "R", "S", "P"]).unwrap();
        let built = RouteGraphBuilder::new(&c, settings()).build();

        let d = |a: u32, b: u32| c.real_distance(StopId(a), StopId(b));
        let wrap_from = |i: u32| {
            built
                .graph
                .incident_edges(StopId(i).board_vertex())
                .iter()
                .map(|&e| built.graph.edge(e))
                .find(|e| e.to == StopId(0).wait_vertex())
                .map(|e| e.weight)
                .unwrap()
        };

        let s = settings();
        assert_eq!(wrap_from(1), s.ride_secs(d(1, 2) + d(2, 3) + d(3, 0)));
        assert_eq!(wrap_from(2), s.ride_secs(d(2, 3) + d(3, 0)));
        assert_eq!(wrap_from(3), s.ride_secs(d(3, 0)));
    }

    #[test]
    fn single_stop_bus_adds_no_rides() {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(0.0, 0.0)).unwrap();
        c.add_bus("solo", RouteKind::Linear, &["A"]).unwrap();
        c.add_bus("loop", RouteKind::Circular, &["A", "A"]).unwrap();
        let router = TransportRouter::new(settings(), &c).unwrap();
        assert_eq!(router.vertex_count(), 2);
        assert_eq!(router.edge_count(), 1);
    }

    #[test]
    fn empty_catalogue_builds_empty_graph() {
        let c = Catalogue::new();
        let router = TransportRouter::new(settings(), &c).unwrap();
        assert_eq!(router.vertex_count(), 0);
        assert_eq!(router.edge_count(), 0);
        assert!(router.calc_route("A", "A").is_none());
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use tc_catalogue::{Catalogue, RouteKind};
    use tc_core::GeoPoint;
    use crate::{RouteStep, RouterSettings, TransportRouter};
    use super::helpers::{approx, line, ring, settings};

    #[test]
    fn single_ride_on_great_circle_distance() {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(0.0, 0.0)).unwrap();
        c.add_stop("B", GeoPoint::new(0.0, 0.01)).unwrap();
        c.add_bus("1", RouteKind::Linear, &["A", "B"]).unwrap();
        let router = TransportRouter::new(RouterSettings::new(60.0, 6.0).unwrap(), &c).unwrap();

        let r = router.calc_route("A", "B").unwrap();
        assert_eq!(r.steps.len(), 2);
        assert_eq!(r.steps[0], RouteStep::Wait { stop_name: "A", time: 360.0 });
        let RouteStep::Ride { bus_name, span_count, time } = r.steps[1] else {
            panic!("expected a ride, got {:?}", r.steps[1]);
        };
        assert_eq!(bus_name, "1");
        assert_eq!(span_count, 1);
        assert!((time - 66.72).abs() < 0.01, "got {time}");
        assert!((r.total_time - 426.72).abs() < 0.01, "got {}", r.total_time);
    }

    #[test]
    fn staying_on_the_bus_beats_changing() {
        let c = line();
        let router = TransportRouter::new(settings(), &c).unwrap();
        let r = router.calc_route("A", "C").unwrap();
        assert_eq!(
            r.steps,
            vec![
                RouteStep::Wait { stop_name: "A", time: 120.0 },
                RouteStep::Ride { bus_name: "1", span_count: 2, time: 300.0 },
            ]
        );
        assert_eq!(r.total_time, 420.0);
    }

    #[test]
    fn reverse_direction_uses_reverse_distances() {
        let c = line();
        let router = TransportRouter::new(settings(), &c).unwrap();
        let r = router.calc_route("C", "A").unwrap();
        assert_eq!(
            r.steps,
            vec![
                RouteStep::Wait { stop_name: "C", time: 120.0 },
                RouteStep::Ride { bus_name: "1", span_count: 2, time: 350.0 },
            ]
        );
        assert_eq!(r.total_time, 470.0);
    }

    #[test]
    fn transfer_pays_the_wait_again() {
        let c = line();
        let router = TransportRouter::new(settings(), &c).unwrap();
        let r = router.calc_route("A", "D").unwrap();
        assert_eq!(
            r.steps,
            vec![
                RouteStep::Wait { stop_name: "A", time: 120.0 },
                RouteStep::Ride { bus_name: "1", span_count: 2, time: 300.0 },
                RouteStep::Wait { stop_name: "C", time: 120.0 },
                RouteStep::Ride { bus_name: "2", span_count: 1, time: 50.0 },
            ]
        );
        assert_eq!(r.total_time, 590.0);
        assert_eq!(r.ride_count(), 2);
    }

    #[test]
    fn circular_route_wraps_around() {
        let c = ring();
        let router = TransportRouter::new(settings(), &c).unwrap();

        let r = router.calc_route("C", "A").unwrap();
        assert_eq!(r.steps.len(), 2);
        assert!(matches!(r.steps[1], RouteStep::Ride { bus_name: "r", span_count: 1, .. }));
        assert!(approx(r.total_time, 220.0));

        let r = router.calc_route("B", "A").unwrap();
        assert!(matches!(r.steps[1], RouteStep::Ride { span_count: 2, .. }));
        assert!(approx(r.total_time, 320.0));

        // No edge runs past the first stop: C→B changes at A.
        let r = router.calc_route("C", "B").unwrap();
        assert_eq!(r.ride_count(), 2);
        assert!(matches!(r.steps[2], RouteStep::Wait { stop_name: "A", .. }));
        assert!(approx(r.total_time, 440.0));
    }

    #[test]
    fn same_stop_is_empty_route() {
        let c = line();
        let router = TransportRouter::new(settings(), &c).unwrap();
        let r = router.calc_route("B", "B").unwrap();
        assert!(r.steps.is_empty());
        assert_eq!(r.total_time, 0.0);

        // Also for a stop no bus serves.
        assert_eq!(router.calc_route("Z", "Z").unwrap().total_time, 0.0);
    }

    #[test]
    fn unreachable_or_unknown_is_none() {
        let c = line();
        let router = TransportRouter::new(settings(), &c).unwrap();
        assert!(router.calc_route("A", "Z").is_none());
        assert!(router.calc_route("Z", "A").is_none());
        assert!(router.calc_route("A", "Nowhere").is_none());
        assert!(router.calc_route("Nowhere", "A").is_none());
    }

    #[test]
    fn repeated_queries_agree() {
        let c = line();
        let router = TransportRouter::new(settings(), &c).unwrap();
        let first = router.calc_route("A", "D").unwrap();
        let second = router.calc_route("A", "D").unwrap();
        assert_eq!(first, second);
        assert_eq!(router.calc_route("A", "B").unwrap().total_time, 220.0);
    }
}

// ── Randomised properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use tc_catalogue::{Catalogue, RouteKind};
    use tc_core::GeoPoint;
    use crate::{RouteStep, TransportRouter};
    use super::helpers::settings;

    const STOPS: usize = 12;

    fn name(i: usize) -> String {
        format!("S{i}")
    }

    fn random_catalogue(seed: u64) -> Catalogue {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut c = Catalogue::new();
        for i in 0..STOPS {
            let p = GeoPoint::new(rng.gen_range(43.5..43.7), rng.gen_range(39.6..39.8));
            c.add_stop(name(i), p).unwrap();
        }
        for _ in 0..20 {
            let a = name(rng.gen_range(0..STOPS));
            let b = name(rng.gen_range(0..STOPS));
            // Repeated pairs are rejected; that is fine here.
            let _ = c.set_distance(&a, &b, rng.gen_range(100..5000));
        }
        for bus in 0..5 {
            let len = rng.gen_range(2..6);
            let mut stops: Vec<String> = (0..len).map(|_| name(rng.gen_range(0..STOPS))).collect();
            let kind = if rng.gen_bool(0.5) {
                stops.push(stops[0].clone());
                RouteKind::Circular
            } else {
                RouteKind::Linear
            };
            c.add_bus(format!("{bus}"), kind, stops.as_slice()).unwrap();
        }
        c
    }

    #[test]
    fn totals_match_steps_and_steps_alternate() {
        for seed in 0..5 {
            let c = random_catalogue(seed);
            let router = TransportRouter::new(settings(), &c).unwrap();
            for a in 0..STOPS {
                for b in 0..STOPS {
                    let Some(r) = router.calc_route(&name(a), &name(b)) else {
                        continue;
                    };
                    let sum: f64 = r.steps.iter().map(RouteStep::time).sum();
                    assert!((sum - r.total_time).abs() < 1e-6);
                    assert_eq!(r.steps.len() % 2, 0);
                    for pair in r.steps.chunks(2) {
                        assert!(matches!(pair[0], RouteStep::Wait { .. }));
                        assert!(matches!(pair[1], RouteStep::Ride { span_count, .. } if span_count >= 1));
                    }
                    if let Some(RouteStep::Wait { stop_name, .. }) = r.steps.first() {
                        assert_eq!(*stop_name, name(a));
                    }
                }
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        let c = random_catalogue(11);
        let router = TransportRouter::new(settings(), &c).unwrap();
        let t = |a: usize, b: usize| router.calc_route(&name(a), &name(b)).map(|r| r.total_time);
        for a in 0..STOPS {
            for b in 0..STOPS {
                for m in 0..STOPS {
                    if let (Some(ab), Some(am), Some(mb)) = (t(a, b), t(a, m), t(m, b)) {
                        assert!(ab <= am + mb + 1e-6, "{a}->{b}: {ab} > {am} + {mb}");
                    }
                }
            }
        }
    }

    #[test]
    fn independent_routers_agree() {
        let c = random_catalogue(3);
        let one = TransportRouter::new(settings(), &c).unwrap();
        let two = TransportRouter::new(settings(), &c).unwrap();
        assert_eq!(one.edge_count(), two.edge_count());
        // Warm the second router's cache in reverse order first.
        for a in (0..STOPS).rev() {
            let _ = two.calc_route(&name(a), &name(0));
        }
        for a in 0..STOPS {
            for b in 0..STOPS {
                assert_eq!(
                    one.calc_route(&name(a), &name(b)),
                    two.calc_route(&name(a), &name(b))
                );
            }
        }
    }
}
