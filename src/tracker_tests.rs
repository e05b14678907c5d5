use crate::state::PullToRefreshState;
use crate::test_surface::{FakeNode, FakeNodeData};
use crate::tracker::{PullEffect, PullGesture};

fn started_gesture() -> PullGesture<FakeNode> {
    let mut g = PullGesture::new();
    g.touch_start(100.0, 0.0, 0.0, Some(FakeNode::plain()));
    g
}

#[test]
fn straight_pull_confirms_and_commits() {
    let mut g = started_gesture();

    // 240px of drag, 60ms in, page at the top.
    let fx = g.touch_move(340.0, 60.0, 0.0);
    assert_eq!(fx, Some(PullEffect::SuppressScroll));

    let s = g.state();
    assert!(s.is_pulling);
    assert_eq!(s.pull_distance, 220.0);
    assert!(s.can_refresh);
    assert!(!s.is_refreshing);
    assert_eq!(s.visual_offset, 220.0_f64.powf(0.6) * 0.4);

    let fx = g.release();
    assert_eq!(fx, Some(PullEffect::BeginRefresh));

    let s = g.state();
    assert!(s.is_pulling && s.can_refresh && s.is_refreshing);
    assert_eq!(s.pull_distance, 220.0);
    assert_eq!(s.visual_offset, 0.0);
}

#[test]
fn insufficient_pull_resets_without_commit() {
    let mut g = started_gesture();

    let fx = g.touch_move(150.0, 60.0, 0.0);
    assert_eq!(fx, Some(PullEffect::SuppressScroll));
    let s = g.state();
    assert_eq!(s.pull_distance, 30.0);
    assert!(!s.can_refresh);

    let fx = g.release();
    assert_eq!(fx, None);
    assert_eq!(g.state(), PullToRefreshState::IDLE);
}

#[test]
fn scroll_excursion_disqualifies_for_good() {
    let mut g = started_gesture();

    // The page scrolls to 5px mid-gesture, then returns to the top.
    assert_eq!(g.touch_move(200.0, 60.0, 5.0), None);
    assert_eq!(g.touch_move(400.0, 120.0, 0.0), None);
    assert_eq!(g.touch_move(500.0, 400.0, 0.0), None);

    assert_eq!(g.state(), PullToRefreshState::IDLE);
    assert_eq!(g.release(), None);
}

#[test]
fn carousel_target_never_confirms() {
    let strip = FakeNode::new(FakeNodeData {
        carousel: true,
        ..Default::default()
    });
    let mut g = PullGesture::new();
    g.touch_start(100.0, 0.0, 0.0, Some(FakeNode::plain_under(&strip)));

    assert_eq!(g.touch_move(400.0, 100.0, 0.0), None);
    // The session is dead, not merely delayed.
    assert_eq!(g.touch_move(600.0, 5000.0, 0.0), None);
    assert_eq!(g.state(), PullToRefreshState::IDLE);
    assert_eq!(g.release(), None);
}

#[test]
fn scrolled_inner_container_never_confirms() {
    let panel = FakeNode::new(FakeNodeData {
        scroll_height: 2000.0,
        client_height: 640.0,
        scroll_top: 80.0,
        ..Default::default()
    });
    let mut g = PullGesture::new();
    g.touch_start(100.0, 0.0, 0.0, Some(FakeNode::plain_under(&panel)));

    assert_eq!(g.touch_move(400.0, 100.0, 0.0), None);
    assert_eq!(g.touch_move(600.0, 5000.0, 0.0), None);
    assert_eq!(g.state(), PullToRefreshState::IDLE);
}

#[test]
fn activation_delay_gates_confirmation() {
    let mut g = started_gesture();
    assert_eq!(g.touch_move(200.0, 10.0, 0.0), None);
    assert_eq!(g.state(), PullToRefreshState::IDLE);

    // Identical movement past the delay confirms.
    let fx = g.touch_move(200.0, 60.0, 0.0);
    assert_eq!(fx, Some(PullEffect::SuppressScroll));
    assert_eq!(g.state().pull_distance, 80.0);
}

#[test]
fn dead_zone_produces_no_feedback() {
    let mut g = started_gesture();
    assert_eq!(g.touch_move(115.0, 60.0, 0.0), None);
    assert_eq!(g.state(), PullToRefreshState::IDLE);

    // One more pixel past the dead zone starts the pull.
    let fx = g.touch_move(121.0, 70.0, 0.0);
    assert_eq!(fx, Some(PullEffect::SuppressScroll));
    assert_eq!(g.state().pull_distance, 1.0);
}

#[test]
fn touchmove_is_idempotent() {
    let mut g = started_gesture();
    let first = g.touch_move(340.0, 60.0, 0.0);
    let s1 = g.state();
    for t in [70.0, 80.0, 90.0] {
        assert_eq!(g.touch_move(340.0, t, 0.0), first);
        assert_eq!(g.state(), s1);
    }
}

#[test]
fn upward_movement_drops_the_pull() {
    let mut g = started_gesture();
    assert!(g.touch_move(340.0, 60.0, 0.0).is_some());
    assert!(g.state().is_pulling);

    assert_eq!(g.touch_move(90.0, 80.0, 0.0), None);
    assert_eq!(g.state(), PullToRefreshState::IDLE);

    // The session survives: pulling down again re-confirms.
    let fx = g.touch_move(340.0, 120.0, 0.0);
    assert_eq!(fx, Some(PullEffect::SuppressScroll));
    assert!(g.state().can_refresh);
}

#[test]
fn events_without_a_session_are_noops() {
    let mut g: PullGesture<FakeNode> = PullGesture::new();
    assert_eq!(g.touch_move(340.0, 60.0, 0.0), None);
    assert_eq!(g.release(), None);
    assert_eq!(g.state(), PullToRefreshState::IDLE);
}

#[test]
fn commit_window_ignores_new_input() {
    let mut g = started_gesture();
    g.touch_move(340.0, 60.0, 0.0);
    assert_eq!(g.release(), Some(PullEffect::BeginRefresh));
    let committed = g.state();

    // A second gesture lands before the reload fires.
    g.touch_start(80.0, 200.0, 0.0, Some(FakeNode::plain()));
    assert_eq!(g.touch_move(400.0, 300.0, 0.0), None);
    assert_eq!(g.state(), committed);

    // And its release must not schedule a second reload.
    assert_eq!(g.release(), None);
    assert_eq!(g.state(), committed);
}

#[test]
fn new_touchstart_supersedes_the_old_session() {
    let mut g = started_gesture();
    g.touch_move(200.0, 60.0, 5.0); // disqualified by the excursion

    // Fresh touch, fresh session: the old disqualification is gone.
    g.touch_start(100.0, 1000.0, 0.0, Some(FakeNode::plain()));
    let fx = g.touch_move(340.0, 1060.0, 0.0);
    assert_eq!(fx, Some(PullEffect::SuppressScroll));
    assert!(g.state().can_refresh);
}

#[test]
fn pull_distance_and_is_pulling_move_together() {
    let mut g = started_gesture();
    let mut states = vec![g.state()];
    for (y, t, scroll) in [
        (110.0, 60.0, 0.0),
        (180.0, 70.0, 0.0),
        (340.0, 80.0, 0.0),
        (90.0, 90.0, 0.0),
        (360.0, 100.0, 0.0),
    ] {
        g.touch_move(y, t, scroll);
        states.push(g.state());
    }
    g.release();
    states.push(g.state());

    for s in states {
        assert_eq!(s.pull_distance > 0.0, s.is_pulling);
        assert!(s.pull_distance >= 0.0);
    }
}
