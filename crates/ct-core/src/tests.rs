//! Unit tests for ct-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PoolId, ProcessId, VesselId};

    #[test]
    fn index_roundtrip() {
        let id = VesselId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VesselId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ProcessId(0) < ProcessId(1));
        assert!(PoolId(3) > PoolId(2));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VesselId::INVALID.0, u32::MAX);
        assert_eq!(ProcessId::INVALID.0, u64::MAX);
        assert_eq!(PoolId::INVALID.0, u16::MAX);
        assert_eq!(PoolId::default(), PoolId::INVALID);
    }

    #[test]
    fn vessel_ids_count_up() {
        assert_eq!(VesselId(1).next(), VesselId(2));
    }

    #[test]
    fn display() {
        assert_eq!(VesselId(7).to_string(), "VesselId(7)");
    }

    #[test]
    fn pool_id_rejects_overflow() {
        assert!(PoolId::try_from(70_000usize).is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(9)), 6);
    }

    #[test]
    fn clock_starts_at_zero() {
        assert_eq!(SimClock::new().now(), Tick::ZERO);
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        clock.advance_to(Tick(3));
        clock.advance_to(Tick(3));
        clock.advance_to(Tick(9));
        assert_eq!(clock.now(), Tick(9));
        assert_eq!(clock.to_string(), "T9");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "clock moved backwards")]
    fn clock_refuses_to_go_back() {
        let mut clock = SimClock::new();
        clock.advance_to(Tick(5));
        clock.advance_to(Tick(4));
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, TerminalConfig};

    #[test]
    fn defaults_match_reference_terminal() {
        let cfg = TerminalConfig::default();
        assert_eq!(cfg.berths, 2);
        assert_eq!(cfg.cranes, 2);
        assert_eq!(cfg.trucks, 3);
        assert_eq!(cfg.containers_per_vessel, 150);
        assert_eq!(cfg.container_move_ticks, 3);
        assert_eq!(cfg.truck_trip_ticks, 6);
        assert!((cfg.arrival_rate() - 1.0 / 300.0).abs() < 1e-12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = TerminalConfig { cranes: 0, ..TerminalConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCapacity { what: "crane" }));

        let cfg = TerminalConfig { trucks: 0, ..TerminalConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCapacity { what: "truck" }));
    }

    #[test]
    fn zero_containers_rejected() {
        let cfg = TerminalConfig { containers_per_vessel: 0, ..TerminalConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoContainers));
    }

    #[test]
    fn zero_durations_rejected() {
        let cfg = TerminalConfig { truck_trip_ticks: 0, ..TerminalConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroDuration { .. })));

        let cfg = TerminalConfig { container_move_ticks: 0, ..TerminalConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroDuration { .. })));
    }

    #[test]
    fn bad_mean_interarrival_rejected() {
        for mean in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let cfg = TerminalConfig { mean_interarrival_ticks: mean, ..TerminalConfig::default() };
            assert!(matches!(cfg.validate(), Err(ConfigError::InterArrival(_))), "mean {mean}");
        }
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::ZeroCapacity { what: "berth" };
        assert_eq!(err.to_string(), "berth capacity must be at least 1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: TerminalConfig = serde_json::from_str(r#"{ "trucks": 5, "seed": 7 }"#).unwrap();
        assert_eq!(cfg.trucks, 5);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.berths, 2);
        assert_eq!(cfg.containers_per_vessel, 150);
    }
}

#[cfg(test)]
mod rng {
    use rand_distr::Exp;

    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge_by_offset() {
        let mut root1 = SimRng::new(9);
        let mut root2 = SimRng::new(9);
        let a: u64 = root1.child(0).random();
        let b: u64 = root2.child(1).random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0u64..10);
            assert!(v < 10);
        }
    }

    #[test]
    fn exponential_mean_is_close() {
        let mut rng = SimRng::new(1);
        let exp = Exp::new(1.0 / 300.0).unwrap();
        let n = 20_000;
        let total: f64 = (0..n).map(|_| rng.sample(&exp)).sum();
        let mean = total / n as f64;
        assert!((mean - 300.0).abs() < 15.0, "sample mean {mean}");
    }
}
