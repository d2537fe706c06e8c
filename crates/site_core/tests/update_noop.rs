use site_core::{update, Msg, SiteState};

#[test]
fn update_is_noop() {
    let state = SiteState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_moves_clock_without_render() {
    let (mut next, effects) = update(SiteState::new(), Msg::Tick { now_ms: 1_500 });
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
