use helicoil::core::curve::marker_indices;

#[test]
fn indices_always_inside_the_sequence() {
    let lengths = [1usize, 2, 7, 49, 50, 51, 999, 1000];
    let counts = [1usize, 2, 50, 100, 1000];
    for &len in &lengths {
        for &count in &counts {
            let idx = marker_indices(len, count);
            assert_eq!(idx.len(), count);
            for &i in &idx {
                assert!(i < len, "index {i} out of range for len {len}");
            }
        }
    }
}

#[test]
fn first_and_last_markers_hit_the_endpoints() {
    let idx = marker_indices(1000, 50);
    assert_eq!(*idx.first().unwrap(), 0);
    assert_eq!(*idx.last().unwrap(), 999);
}

#[test]
fn degenerate_inputs_yield_nothing() {
    assert!(marker_indices(0, 50).is_empty());
    assert!(marker_indices(100, 0).is_empty());
}

#[test]
fn single_point_curve_maps_every_marker_to_zero() {
    let idx = marker_indices(1, 10);
    assert!(idx.iter().all(|&i| i == 0));
}

#[test]
fn indices_are_monotonic() {
    let idx = marker_indices(1000, 50);
    for pair in idx.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}
