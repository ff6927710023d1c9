use panbrot_core::{iterations, ViewportEvent, ViewportState};

/// Iterate every pixel of a viewport and collect the counts into a flat Vec.
fn iterate_grid(vp: &ViewportState, width: u32, height: u32, max_iter: u32) -> Vec<u32> {
    let mut counts = Vec::with_capacity((width * height) as usize);
    for py in 0..height {
        for px in 0..width {
            let p = vp.pixel_to_point(px, py, width, height);
            counts.push(iterations(p.x, p.y, max_iter));
        }
    }
    counts
}

#[test]
fn default_view_contains_interior_and_escaped_points() {
    let vp = ViewportState::default();
    let counts = iterate_grid(&vp, 100, 100, 256);

    assert_eq!(counts.len(), 100 * 100);

    let interior = counts.iter().filter(|&&n| n >= 256).count();
    let escaped = counts.iter().filter(|&&n| n < 256).count();

    assert!(interior > 0, "the set's interior should be visible");
    assert!(escaped > 0, "the exterior should be visible");
    assert_eq!(interior + escaped, 10_000);
}

#[test]
fn grid_iteration_is_deterministic() {
    let vp = ViewportState::default();
    let run1 = iterate_grid(&vp, 80, 60, 128);
    let run2 = iterate_grid(&vp, 80, 60, 128);
    assert_eq!(run1, run2, "two identical passes must agree");
}

#[test]
fn navigating_off_the_set_empties_the_interior() {
    // Pan hard to the right of the set, then fold in a few zoom steps to
    // exercise the reducer. Every pixel of the resulting view should escape.
    let mut vp = ViewportState::default();
    vp = vp.apply(
        ViewportEvent::Pan {
            delta_x: -800.0,
            delta_y: 0.0,
        },
        100,
        100,
    );
    for _ in 0..10 {
        vp = vp.apply(
            ViewportEvent::Zoom {
                anchor_x: 50,
                anchor_y: 50,
                zoom_in: true,
            },
            100,
            100,
        );
    }

    let counts = iterate_grid(&vp, 50, 50, 200);
    assert!(
        counts.iter().all(|&n| n < 200),
        "a view far outside the set should contain no interior points"
    );
}
