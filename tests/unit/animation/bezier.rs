use super::*;

#[test]
fn endpoints_are_exact() {
    let c = CubicBezier::STANDARD;
    assert_eq!(c.sample(0.0), 0.0);
    assert_eq!(c.sample(1.0), 1.0);
    assert_eq!(c.sample(-3.0), 0.0);
    assert_eq!(c.sample(7.0), 1.0);
}

#[test]
fn linear_control_points_are_identity() {
    let c = CubicBezier::new(0.25, 0.25, 0.75, 0.75).unwrap();
    for i in 0..=10 {
        let x = f64::from(i) / 10.0;
        assert!((c.sample(x) - x).abs() < 1e-9);
    }
}

#[test]
fn standard_curve_is_monotonic_and_front_loaded() {
    let c = CubicBezier::STANDARD;
    let mut prev = 0.0;
    for i in 1..=100 {
        let y = c.sample(f64::from(i) / 100.0);
        assert!(y >= prev, "not monotonic at step {i}: {y} < {prev}");
        prev = y;
    }
    assert!(c.sample(0.5) > 0.5);
}

#[test]
fn solver_matches_x_coordinate() {
    let c = CubicBezier::new(0.42, 0.0, 0.58, 1.0).unwrap();
    // Symmetric ease-in-out crosses the midpoint at the midpoint.
    assert!((c.sample(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn rejects_out_of_range_x_control_points() {
    assert!(CubicBezier::new(1.5, 0.0, 0.2, 1.0).unwrap_err().is_configuration());
    assert!(CubicBezier::new(0.4, 0.0, -0.1, 1.0).is_err());
    assert!(CubicBezier::new(f64::NAN, 0.0, 0.2, 1.0).is_err());
}

#[test]
fn overshooting_y_is_allowed() {
    let c = CubicBezier::new(0.34, 1.56, 0.64, 1.0).unwrap();
    let peak = (1..100)
        .map(|i| c.sample(f64::from(i) / 100.0))
        .fold(0.0_f64, f64::max);
    assert!(peak > 1.0);
}
