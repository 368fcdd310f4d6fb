use super::*;

#[test]
fn linear_interior_interpolates() {
    let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], &InterpolateOpts::clamped()).unwrap();
    assert_eq!(v, 50.0);
}

#[test]
fn multi_span_picks_correct_segment() {
    let opts = InterpolateOpts::clamped();
    let bps = [0.0, 10.0, 20.0, 30.0];
    let outs = [0.0, 1.0, 1.0, 0.0];
    assert_eq!(interpolate(5.0, &bps, &outs, &opts).unwrap(), 0.5);
    assert_eq!(interpolate(10.0, &bps, &outs, &opts).unwrap(), 1.0);
    assert_eq!(interpolate(15.0, &bps, &outs, &opts).unwrap(), 1.0);
    assert_eq!(interpolate(25.0, &bps, &outs, &opts).unwrap(), 0.5);
    assert_eq!(interpolate(30.0, &bps, &outs, &opts).unwrap(), 0.0);
}

#[test]
fn clamp_holds_boundary_values() {
    let opts = InterpolateOpts::clamped().with_ease(Ease::STANDARD);
    for input in [-1000.0, -1.0, -0.001] {
        assert_eq!(interpolate(input, &[0.0, 10.0], &[3.0, 7.0], &opts).unwrap(), 3.0);
    }
    for input in [10.001, 11.0, 1e9] {
        assert_eq!(interpolate(input, &[0.0, 10.0], &[3.0, 7.0], &opts).unwrap(), 7.0);
    }
}

#[test]
fn extend_continues_slope_without_easing() {
    let opts = InterpolateOpts::extended().with_ease(Ease::InCubic);
    let bps = [10.0, 20.0];
    let outs = [0.0, 1.0];
    assert!((interpolate(0.0, &bps, &outs, &opts).unwrap() - -1.0).abs() < 1e-12);
    assert!((interpolate(30.0, &bps, &outs, &opts).unwrap() - 2.0).abs() < 1e-12);
}

#[test]
fn extrapolation_sides_are_independent() {
    let opts = InterpolateOpts {
        left: Extrapolate::Clamp,
        right: Extrapolate::Extend,
        ease: None,
    };
    let bps = [0.0, 10.0];
    let outs = [0.0, 10.0];
    assert_eq!(interpolate(-5.0, &bps, &outs, &opts).unwrap(), 0.0);
    assert_eq!(interpolate(15.0, &bps, &outs, &opts).unwrap(), 15.0);
}

#[test]
fn easing_applies_to_interior_only() {
    let opts = InterpolateOpts::clamped().with_ease(Ease::InQuad);
    let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], &opts).unwrap();
    assert!((v - 25.0).abs() < 1e-12);
}

#[test]
fn monotonic_within_each_span() {
    let interp = Interpolator::new(
        vec![0.0, 12.0, 288.0, 300.0],
        vec![0.0, 1.0, 1.0, 0.0],
        InterpolateOpts::clamped().with_ease(Ease::STANDARD),
    )
    .unwrap();

    let mut prev = interp.sample(0.0);
    for f in 1..=12 {
        let v = interp.sample(f64::from(f));
        assert!(v >= prev);
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
    for f in 289..=300 {
        let v = interp.sample(f64::from(f));
        assert!(v <= prev);
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn descending_outputs_are_supported() {
    let v = interpolate(2.5, &[0.0, 10.0], &[16.0, 0.0], &InterpolateOpts::clamped()).unwrap();
    assert_eq!(v, 12.0);
}

#[test]
fn rejects_mismatched_lengths() {
    let err = interpolate(0.0, &[0.0, 1.0, 2.0], &[0.0, 1.0], &InterpolateOpts::clamped())
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn rejects_non_ascending_breakpoints() {
    let opts = InterpolateOpts::clamped();
    assert!(interpolate(0.0, &[0.0, 0.0], &[0.0, 1.0], &opts).is_err());
    assert!(interpolate(0.0, &[5.0, 1.0], &[0.0, 1.0], &opts).is_err());
    assert!(interpolate(0.0, &[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], &opts).is_err());
}

#[test]
fn rejects_too_few_or_non_finite_breakpoints() {
    let opts = InterpolateOpts::clamped();
    assert!(interpolate(0.0, &[0.0], &[1.0], &opts).is_err());
    assert!(interpolate(0.0, &[0.0, f64::INFINITY], &[0.0, 1.0], &opts).is_err());
    assert!(interpolate(0.0, &[0.0, 1.0], &[f64::NAN, 1.0], &opts).is_err());
}

#[test]
fn rejects_invalid_bezier_ease() {
    let bad = Ease::CubicBezier(crate::animation::bezier::CubicBezier {
        x1: 2.0,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    });
    let opts = InterpolateOpts::clamped().with_ease(bad);
    assert!(Interpolator::new(vec![0.0, 1.0], vec![0.0, 1.0], opts).is_err());
}
