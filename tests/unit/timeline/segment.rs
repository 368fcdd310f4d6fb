use super::*;

fn blank(start: u64, duration: u64) -> Segment<()> {
    Segment::new("s", FrameIndex(start), duration, ())
}

#[test]
fn membership_is_half_open() {
    let s = blank(100, 50);
    assert!(!s.is_active(FrameIndex(99)));
    assert!(s.is_active(FrameIndex(100)));
    assert!(s.is_active(FrameIndex(149)));
    assert!(!s.is_active(FrameIndex(150)));
}

#[test]
fn local_frame_is_offset_from_start() {
    let s = blank(100, 50);
    assert_eq!(s.local_frame(FrameIndex(99)), None);
    assert_eq!(s.local_frame(FrameIndex(100)), Some(FrameIndex(0)));
    assert_eq!(s.local_frame(FrameIndex(149)), Some(FrameIndex(49)));
    assert_eq!(s.local_frame(FrameIndex(150)), None);
}

#[test]
fn crossfade_hits_exact_anchor_values() {
    let s = blank(100, 300);
    let op = |f| s.opacity_at(FrameIndex(f), 12, Ease::STANDARD).unwrap();
    assert_eq!(op(100), 0.0);
    assert_eq!(op(112), 1.0);
    assert_eq!(op(250), 1.0);
    assert_eq!(op(388), 1.0);
    assert_eq!(op(400), 0.0);
}

#[test]
fn crossfade_ramps_are_monotonic() {
    let s = blank(100, 300);
    let op = |f| s.opacity_at(FrameIndex(f), 12, Ease::STANDARD).unwrap();
    for f in 100..112 {
        assert!(op(f) <= op(f + 1));
    }
    for f in 388..400 {
        assert!(op(f) >= op(f + 1));
    }
}

#[test]
fn short_segment_opacity_stays_well_defined() {
    // duration between transition and 2 * transition: ramps overlap, no hold region.
    let s = blank(0, 18);
    let values: Vec<f64> = (0..=18)
        .map(|f| s.opacity_at(FrameIndex(f), 12, Ease::Linear).unwrap())
        .collect();
    assert_eq!(values[0], 0.0);
    assert_eq!(values[18], 0.0);
    assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    let peak = values.iter().cloned().fold(0.0_f64, f64::max);
    assert!(peak < 1.0);
    // Rises then falls.
    let top = values.iter().position(|v| *v == peak).unwrap();
    assert!(values[..=top].windows(2).all(|w| w[0] <= w[1]));
    assert!(values[top..].windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn zero_transition_is_a_hard_cut() {
    let s = blank(10, 5);
    assert_eq!(s.opacity_at(FrameIndex(9), 0, Ease::STANDARD).unwrap(), 0.0);
    assert_eq!(s.opacity_at(FrameIndex(10), 0, Ease::STANDARD).unwrap(), 1.0);
    assert_eq!(s.opacity_at(FrameIndex(14), 0, Ease::STANDARD).unwrap(), 1.0);
    assert_eq!(s.opacity_at(FrameIndex(15), 0, Ease::STANDARD).unwrap(), 0.0);
}

#[test]
fn closures_are_scenes() {
    let scene = |f: FrameIndex| -> ReelResult<u64> { Ok(f.0 * 2) };
    assert_eq!(scene.render(FrameIndex(21)).unwrap(), 42);
}

#[test]
fn crossfade_is_exact_far_along_the_timeline() {
    let start = 1u64 << 60;
    let s = blank(start, 300);
    let op = |off: u64| s.opacity_at(FrameIndex(start + off), 12, Ease::STANDARD).unwrap();
    assert_eq!(op(0), 0.0);
    assert!(op(6) > 0.0 && op(6) < 1.0);
    assert_eq!(op(12), 1.0);
    assert_eq!(op(150), 1.0);
    assert!(op(294) > 0.0 && op(294) < 1.0);
    assert_eq!(
        op(6),
        blank(100, 300)
            .opacity_at(FrameIndex(106), 12, Ease::STANDARD)
            .unwrap()
    );
    assert_eq!(s.opacity_at(FrameIndex(start - 1), 12, Ease::STANDARD).unwrap(), 0.0);
    assert_eq!(s.opacity_at(FrameIndex(start + 300), 12, Ease::STANDARD).unwrap(), 0.0);
}
