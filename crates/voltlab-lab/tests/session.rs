use voltlab_catalog::ComponentKind;
use voltlab_engine::{
    ConnectionPoint, GridError, GridPoint, Rotation, UnitPoint, WireError,
};
use voltlab_lab::{Selection, Session, SessionError, WireDraw};

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

/// Centre of cell `(x, y)` in unit space.
fn c(x: i32, y: i32) -> UnitPoint {
    p(x, y).center()
}

fn preview(session: &Session) -> Vec<GridPoint> {
    session
        .wire_draw()
        .active()
        .map(|a| a.live_path.clone())
        .unwrap_or_default()
}

#[test]
fn second_placement_in_same_cell_is_a_no_op() {
    let mut session = Session::default();
    let resistor = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();

    let err = session.place_component(p(5, 5), ComponentKind::Led).unwrap_err();
    assert_eq!(err, SessionError::Grid(GridError::Occupied(p(5, 5))));
    assert_eq!(session.component_at(p(5, 5)).unwrap().id, resistor);
    assert_eq!(session.circuit().grid().component_count(), 1);
}

#[test]
fn starting_a_wire_seeds_preview_with_anchor() {
    let mut session = Session::default();
    let resistor = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    session.select(Selection::Component(resistor)).unwrap();

    session.start_wire(ConnectionPoint::new(resistor, 0)).unwrap();

    assert_eq!(preview(&session), vec![p(5, 5)]);
    assert_eq!(session.selection(), Selection::None);
}

#[test]
fn preview_follows_cursor_in_a_straight_line() {
    let mut session = Session::default();
    let resistor = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    session.start_wire(ConnectionPoint::new(resistor, 0)).unwrap();

    session.update_wire_preview(c(10, 5));

    assert_eq!(preview(&session), (5..=10).map(|x| p(x, 5)).collect::<Vec<_>>());
}

#[test]
fn preview_routes_around_new_obstacle() {
    let mut session = Session::default();
    let resistor = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    session.place_component(p(7, 5), ComponentKind::CapacitorCeramic).unwrap();
    session.start_wire(ConnectionPoint::new(resistor, 0)).unwrap();

    session.update_wire_preview(c(10, 5));

    let path = preview(&session);
    assert!(!path.contains(&p(7, 5)));
    assert!(path.len() >= 6 + 2);
    assert_eq!(path.first(), Some(&p(5, 5)));
    assert_eq!(path.last(), Some(&p(10, 5)));
}

#[test]
fn preview_cursor_is_clamped_to_grid() {
    let mut session = Session::default();
    let resistor = session.place_component(p(38, 5), ComponentKind::Resistor).unwrap();
    session.start_wire(ConnectionPoint::new(resistor, 1)).unwrap();

    session.update_wire_preview(UnitPoint::new(55.0, 5.5));

    assert_eq!(preview(&session), vec![p(38, 5), p(39, 5)]);
}

#[test]
fn commit_routes_between_terminal_anchors() {
    let mut session = Session::default();
    let resistor = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    let led = session.place_component(p(10, 5), ComponentKind::Led).unwrap();

    session.start_wire(ConnectionPoint::new(resistor, 1)).unwrap();
    let id = session.commit_wire(ConnectionPoint::new(led, 0)).unwrap();

    let wire = session.circuit().wires().get(id).unwrap();
    assert_eq!(wire.path, (5..=10).map(|x| p(x, 5)).collect::<Vec<_>>());
    assert_eq!(wire.color, "#10B981");
    assert_eq!(session.wire_draw(), &WireDraw::Idle);
}

#[test]
fn reverse_duplicate_is_rejected() {
    let mut session = Session::default();
    let a = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    let b = session.place_component(p(10, 5), ComponentKind::Led).unwrap();
    let ta = ConnectionPoint::new(a, 1);
    let tb = ConnectionPoint::new(b, 0);

    session.start_wire(ta).unwrap();
    session.commit_wire(tb).unwrap();

    session.start_wire(tb).unwrap();
    let err = session.commit_wire(ta).unwrap_err();

    assert_eq!(err, SessionError::Wire(WireError::Duplicate(tb, ta)));
    assert_eq!(session.circuit().wires().len(), 1);
    assert_eq!(session.wire_draw(), &WireDraw::Idle);
}

#[test]
fn committing_onto_start_terminal_is_rejected() {
    let mut session = Session::default();
    let a = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    let t = ConnectionPoint::new(a, 0);

    session.start_wire(t).unwrap();
    assert_eq!(
        session.commit_wire(t),
        Err(SessionError::Wire(WireError::SameTerminal(t)))
    );
    assert!(session.circuit().wires().is_empty());
    assert!(!session.wire_draw().is_drawing());
}

#[test]
fn commit_without_draw_is_rejected() {
    let mut session = Session::default();
    let a = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    assert_eq!(
        session.commit_wire(ConnectionPoint::new(a, 0)),
        Err(SessionError::NotDrawing)
    );
}

#[test]
fn start_wire_on_missing_terminal_is_rejected() {
    let mut session = Session::default();
    let ground = session.place_component(p(2, 2), ComponentKind::Ground).unwrap();
    assert_eq!(
        session.start_wire(ConnectionPoint::new(ground, 1)),
        Err(SessionError::Wire(WireError::NoSuchTerminal(ground, 1)))
    );
    assert!(!session.wire_draw().is_drawing());
}

#[test]
fn cancel_discards_preview() {
    let mut session = Session::default();
    let a = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    session.start_wire(ConnectionPoint::new(a, 0)).unwrap();
    session.update_wire_preview(c(9, 9));

    session.cancel_wire();

    assert_eq!(session.wire_draw(), &WireDraw::Idle);
    assert!(session.snapshot().preview.is_none());
}

fn wired_session() -> (Session, voltlab_engine::ComponentId, voltlab_engine::WireId) {
    let mut session = Session::default();
    let a = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    let b = session.place_component(p(10, 5), ComponentKind::Led).unwrap();
    session.start_wire(ConnectionPoint::new(a, 1)).unwrap();
    let wire = session.commit_wire(ConnectionPoint::new(b, 0)).unwrap();
    (session, a, wire)
}

#[test]
fn rotating_wired_component_drops_wire() {
    let (mut session, resistor, wire) = wired_session();

    assert_eq!(session.rotate_component(resistor), Ok(Rotation::Deg90));

    assert_eq!(session.component_at(p(5, 5)).unwrap().rotation, Rotation::Deg90);
    assert!(session.circuit().wires().get(wire).is_none());
    assert!(session.circuit().wires().is_empty());
}

#[test]
fn dropping_selected_wire_clears_selection() {
    let (mut session, resistor, wire) = wired_session();
    session.select(Selection::Wire(wire)).unwrap();

    session.move_component(resistor, p(5, 6)).unwrap();

    assert_eq!(session.selection(), Selection::None);
    assert!(session.circuit().wires().is_empty());
}

#[test]
fn remove_selection_handles_wires_and_components() {
    let (mut session, resistor, wire) = wired_session();

    session.select(Selection::Wire(wire)).unwrap();
    assert_eq!(session.remove_selection(), Ok(Selection::Wire(wire)));
    assert!(session.circuit().wires().is_empty());
    assert!(session.component_at(p(5, 5)).is_some());

    session.select(Selection::Component(resistor)).unwrap();
    assert_eq!(
        session.remove_selection(),
        Ok(Selection::Component(resistor))
    );
    assert!(session.component_at(p(5, 5)).is_none());
    assert_eq!(session.selection(), Selection::None);

    assert_eq!(session.remove_selection(), Ok(Selection::None));
}

#[test]
fn removing_component_cascades_wires() {
    let (mut session, resistor, _) = wired_session();
    session.remove_component(resistor).unwrap();
    assert!(session.circuit().wires().is_empty());
}

#[test]
fn selecting_unknown_ids_keeps_selection() {
    let (mut session, resistor, wire) = wired_session();
    session.select(Selection::Component(resistor)).unwrap();
    session.remove_wire(wire).unwrap();

    assert!(session.select(Selection::Wire(wire)).is_err());
    assert_eq!(session.selection(), Selection::Component(resistor));
}

#[test]
fn moving_start_component_cancels_draw() {
    let mut session = Session::default();
    let a = session.place_component(p(5, 5), ComponentKind::Resistor).unwrap();
    session.start_wire(ConnectionPoint::new(a, 0)).unwrap();

    session.move_component(a, p(6, 6)).unwrap();

    assert!(!session.wire_draw().is_drawing());
}

#[test]
fn rotate_selection_needs_a_component() {
    let (mut session, resistor, wire) = wired_session();
    session.select(Selection::Wire(wire)).unwrap();
    assert_eq!(session.rotate_selection(), None);

    session.select(Selection::Component(resistor)).unwrap();
    assert_eq!(session.rotate_selection(), Some(Rotation::Deg90));
}

#[test]
fn component_value_can_be_edited() {
    let mut session = Session::default();
    let pot = session.place_component(p(1, 1), ComponentKind::Potentiometer).unwrap();
    assert_eq!(session.component_at(p(1, 1)).unwrap().value, 10000.0);

    session.set_component_value(pot, 4700.0).unwrap();
    assert_eq!(session.component_at(p(1, 1)).unwrap().value, 4700.0);
}
