use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn tag(id: &str, start: u64, duration: u64) -> Segment<&'static str> {
    Segment::new(id, FrameIndex(start), duration, "")
}

fn three_scene() -> Timeline<&'static str> {
    Timeline::new(
        vec![
            tag("intro", 0, 156),
            tag("logo", 144, 150),
            tag("slide-1", 282, 300),
        ],
        12,
        fps30(),
    )
    .unwrap()
}

#[test]
fn total_frames_is_last_start_plus_duration() {
    assert_eq!(three_scene().total_frames().unwrap(), FrameIndex(582));
}

#[test]
fn total_frames_rejects_empty_timeline() {
    let t: Timeline<()> = Timeline::new(vec![], 12, fps30()).unwrap();
    assert!(t.total_frames().unwrap_err().is_configuration());
}

#[test]
fn single_segment_outside_overlap() {
    let t = three_scene();
    let active = t.active_segments_at(FrameIndex(50)).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "intro");
    assert_eq!(active[0].local_frame, FrameIndex(50));
    assert_eq!(active[0].opacity, 1.0);
}

#[test]
fn two_segments_inside_overlap_in_declaration_order() {
    let t = three_scene();
    for f in 144..156 {
        let active = t.active_segments_at(FrameIndex(f)).unwrap();
        assert_eq!(active.len(), 2, "frame {f}");
        assert_eq!(active[0].id, "intro");
        assert_eq!(active[1].id, "logo");
        assert_eq!(active[0].index, 0);
        assert_eq!(active[1].index, 1);
        assert_eq!(active[1].local_frame, FrameIndex(f - 144));
    }
    let boundary = t.active_segments_at(FrameIndex(156)).unwrap();
    assert_eq!(boundary.len(), 1);
    assert_eq!(boundary[0].id, "logo");
}

#[test]
fn crossfade_is_complementary_in_direction() {
    let t = three_scene();
    let mut prev_out = 1.0;
    let mut prev_in = 0.0;
    for f in 144..156 {
        let active = t.active_segments_at(FrameIndex(f)).unwrap();
        assert!(active[0].opacity <= prev_out);
        assert!(active[1].opacity >= prev_in);
        prev_out = active[0].opacity;
        prev_in = active[1].opacity;
    }
}

#[test]
fn nothing_active_outside_the_timeline() {
    let t = three_scene();
    assert!(t.active_segments_at(FrameIndex(582)).unwrap().is_empty());
    assert!(t.active_segments_at(FrameIndex(10_000)).unwrap().is_empty());
}

#[test]
fn local_frame_stays_within_duration() {
    let t = three_scene();
    for f in 0..600 {
        for a in t.active_segments_at(FrameIndex(f)).unwrap() {
            let seg = &t.segments()[a.index];
            assert!(a.local_frame.0 < seg.duration);
            assert_eq!(a.local_frame.0 + seg.start.0, f);
            assert!((0.0..=1.0).contains(&a.opacity));
        }
    }
}

#[test]
fn unsorted_segments_are_checked_independently() {
    let t = Timeline::new(
        vec![tag("late", 100, 50), tag("early", 0, 112)],
        12,
        fps30(),
    )
    .unwrap();
    let active = t.active_segments_at(FrameIndex(105)).unwrap();
    let ids: Vec<&str> = active.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["late", "early"]);
    assert_eq!(t.total_frames().unwrap(), FrameIndex(112));
}

#[test]
fn non_adjacent_overlap_is_reported_not_rejected() {
    let t = Timeline::new(
        vec![tag("a", 0, 100), tag("b", 88, 100), tag("c", 90, 100)],
        12,
        fps30(),
    )
    .unwrap();
    assert_eq!(t.active_segments_at(FrameIndex(95)).unwrap().len(), 3);

    let windows = t.overlap_windows();
    assert!(windows.iter().any(|w| !w.is_adjacent()));
    let ac = windows.iter().find(|w| w.first == 0 && w.second == 2).unwrap();
    assert_eq!(
        ac.range,
        FrameRange::new(FrameIndex(90), FrameIndex(100)).unwrap()
    );
}

#[test]
fn rejects_segments_shorter_than_transition() {
    let err = Timeline::new(vec![tag("short", 0, 11)], 12, fps30()).unwrap_err();
    assert!(err.is_configuration());
    assert!(Timeline::new(vec![tag("exact", 0, 12)], 12, fps30()).is_ok());
}

#[test]
fn rejects_zero_duration_and_duplicate_ids() {
    assert!(Timeline::new(vec![tag("z", 0, 0)], 0, fps30()).is_err());
    assert!(Timeline::new(vec![tag("x", 0, 20), tag("x", 8, 20)], 12, fps30()).is_err());
}

#[test]
fn compose_renders_active_scenes_with_local_frames() {
    let scene = |f: FrameIndex| -> ReelResult<u64> { Ok(f.0) };
    let t = Timeline::new(
        vec![
            Segment::new("a", FrameIndex(0), 20, scene),
            Segment::new("b", FrameIndex(8), 20, scene),
        ],
        12,
        fps30(),
    )
    .unwrap();

    let composed = t.compose(FrameIndex(10)).unwrap();
    assert_eq!(composed.frame, FrameIndex(10));
    assert_eq!(composed.overlay_opacity, None);
    let visuals: Vec<u64> = composed.layers.iter().map(|l| l.visual).collect();
    assert_eq!(visuals, [10, 2]);
}

#[test]
fn compose_wraps_scene_failures() {
    let scene = |_: FrameIndex| -> ReelResult<()> { Err(ReelError::evaluation("nope")) };
    let t = Timeline::new(vec![Segment::new("bad", FrameIndex(0), 5, scene)], 0, fps30())
        .unwrap();
    let err = t.compose(FrameIndex(2)).unwrap_err();
    assert!(err.to_string().contains("scene 'bad'"));
}

#[test]
fn overlay_value_is_attached_to_composed_frames() {
    let overlay = Overlay::new(
        FrameRange::new(FrameIndex(0), FrameIndex(100)).unwrap(),
        10,
        0.5,
        Ease::Linear,
    )
    .unwrap();
    let scene = |_: FrameIndex| -> ReelResult<()> { Ok(()) };
    let t = Timeline::new(vec![Segment::new("s", FrameIndex(0), 100, scene)], 12, fps30())
        .unwrap()
        .with_overlay(overlay);
    assert_eq!(t.compose(FrameIndex(5)).unwrap().overlay_opacity, Some(0.25));
    assert_eq!(t.compose(FrameIndex(50)).unwrap().overlay_opacity, Some(0.5));
}

#[test]
fn duration_secs_uses_fps() {
    let secs = three_scene().duration_secs().unwrap();
    assert!((secs - 19.4).abs() < 1e-9);
}

#[test]
fn late_starting_segments_still_resolve() {
    let start = 1u64 << 60;
    let t = Timeline::new(
        vec![tag("a", start, 156), tag("b", start + 144, 150)],
        12,
        fps30(),
    )
    .unwrap();
    let active = t.active_segments_at(FrameIndex(start + 150)).unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active[1].local_frame, FrameIndex(6));
    assert!(active.iter().all(|a| a.opacity > 0.0 && a.opacity < 1.0));
}
