use tile_puzzle::term::RedrawGate;

#[test]
fn redraw_gate_draws_first_frame() {
    let mut g = RedrawGate::new(1000);
    assert!(g.should_draw(0, 1, 80, 24));
}

#[test]
fn redraw_gate_draws_on_scene_change() {
    let mut g = RedrawGate::new(1000);
    assert!(g.should_draw(0, 1, 80, 24));
    assert!(g.should_draw(16, 2, 80, 24));
}

#[test]
fn redraw_gate_draws_on_resize() {
    let mut g = RedrawGate::new(1000);
    assert!(g.should_draw(0, 1, 80, 24));
    assert!(g.should_draw(16, 1, 100, 24));
    assert!(g.should_draw(32, 1, 100, 30));
}

#[test]
fn redraw_gate_throttles_idle_frames() {
    let mut g = RedrawGate::new(1000);
    assert!(g.should_draw(0, 1, 80, 24));
    assert!(!g.should_draw(16, 1, 80, 24));
    assert!(!g.should_draw(999, 1, 80, 24));
    assert!(g.should_draw(1000, 1, 80, 24));
    assert!(!g.should_draw(1016, 1, 80, 24));
}

#[test]
fn redraw_gate_invalidate_forces_next_frame() {
    let mut g = RedrawGate::new(1000);
    assert!(g.should_draw(0, 1, 80, 24));
    g.invalidate();
    assert!(g.should_draw(16, 1, 80, 24));
    assert!(!g.should_draw(32, 1, 80, 24));
}
