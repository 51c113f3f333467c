use super::*;

#[test]
fn rows_stack_from_viewport_top() {
    let mut s = StackSurface::new(Rect::new(0.0, 10.0, 100.0, 110.0), 30.0);
    let a = s.push_row("a");
    let b = s.push_row("b");
    assert_eq!(s.viewport(), Rect::new(0.0, 10.0, 100.0, 110.0));
    assert_eq!(s.viewport_bottom(), 110.0);
    assert_eq!(s.row_top(a), Some(10.0));
    assert_eq!(s.row_top(b), Some(40.0));
    assert_eq!(s.row_outer_height(b), Some(30.0));
    assert_eq!(s.row_rect(b), Some(Rect::new(0.0, 40.0, 100.0, 70.0)));
    assert_eq!(s.markup(a), Some("a"));
}

#[test]
fn margin_transition_is_linear_and_reported_once() {
    let mut s = StackSurface::with_height(100.0, 20.0);
    let a = s.push_row("a");
    let b = s.push_row("b");
    s.animate_margin_top(a, -20.0, Duration::from_millis(1_000));
    assert!(s.is_animating(a));

    assert!(s.poll_transitions(Timestamp(500)).is_empty());
    assert_eq!(s.row_top(a), Some(-10.0));
    assert_eq!(s.row_top(b), Some(10.0));

    assert_eq!(s.poll_transitions(Timestamp(1_000)), vec![a]);
    assert!(s.poll_transitions(Timestamp(2_000)).is_empty());
    assert!(!s.is_animating(a));
    assert_eq!(s.row_top(b), Some(0.0));

    s.remove_row(a);
    assert_eq!(s.row_ids(), vec![b]);
    assert_eq!(s.row_top(b), Some(0.0));
}

#[test]
fn clock_never_goes_backwards() {
    let mut s = StackSurface::with_height(100.0, 20.0);
    assert_eq!(s.viewport(), Rect::new(0.0, 0.0, 320.0, 100.0));
    assert_eq!(s.now(), Timestamp::ZERO);
    s.set_clock(Timestamp(50));
    s.set_clock(Timestamp(10));
    assert_eq!(s.now(), Timestamp(50));
}

#[test]
fn unknown_rows_have_no_geometry() {
    let s = StackSurface::with_height(100.0, 20.0);
    assert_eq!(s.row_top(RowId(9)), None);
    assert_eq!(s.row_outer_height(RowId(9)), None);
}
