use std::collections::HashSet;

use voltlab_catalog::ComponentKind;
use voltlab_engine::{
    CellContent, Circuit, ConnectionPoint, GridError, GridPoint, Rotation, WireError,
};

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

#[test]
fn new_grid_has_one_vacant_cell_per_position() {
    let circuit = Circuit::new(40, 30);
    let grid = circuit.grid();
    assert_eq!(grid.cells().len(), 40 * 30);
    assert!(grid.cells().iter().all(|c| c.is_vacant()));
    assert_eq!(grid.cell(p(39, 29)).map(|c| c.position), Some(p(39, 29)));
    assert!(grid.cell(p(40, 0)).is_none());
    assert!(grid.cell(p(0, -1)).is_none());

    let placeholders: HashSet<_> = grid
        .cells()
        .iter()
        .map(|c| match &c.content {
            CellContent::Vacant { id } => *id,
            CellContent::Occupied(_) => unreachable!(),
        })
        .collect();
    assert_eq!(placeholders.len(), 40 * 30);
}

#[test]
fn place_uses_catalog_defaults() {
    let mut circuit = Circuit::new(40, 30);
    let id = circuit.place(p(5, 5), ComponentKind::Resistor).unwrap();

    let component = circuit.component(id).unwrap();
    assert_eq!(component.kind, ComponentKind::Resistor);
    assert_eq!(component.position, p(5, 5));
    assert_eq!(component.rotation, Rotation::Deg0);
    assert_eq!(component.value, 220.0);
}

#[test]
fn placing_into_occupied_cell_is_rejected() {
    let mut circuit = Circuit::new(40, 30);
    let first = circuit.place(p(5, 5), ComponentKind::Resistor).unwrap();

    let err = circuit.place(p(5, 5), ComponentKind::Led).unwrap_err();
    assert_eq!(err, GridError::Occupied(p(5, 5)));

    let occupant = circuit.grid().component_at(p(5, 5)).unwrap();
    assert_eq!(occupant.id, first);
    assert_eq!(occupant.kind, ComponentKind::Resistor);
    assert_eq!(circuit.grid().component_count(), 1);
}

#[test]
fn placing_out_of_bounds_is_rejected() {
    let mut circuit = Circuit::new(4, 4);
    assert_eq!(
        circuit.place(p(4, 0), ComponentKind::Led),
        Err(GridError::OutOfBounds(p(4, 0)))
    );
    assert_eq!(circuit.grid().component_count(), 0);
}

#[test]
fn component_ids_are_unique() {
    let mut circuit = Circuit::new(10, 10);
    for x in 0..10 {
        circuit.place(p(x, x), ComponentKind::Led).unwrap();
    }
    let ids: HashSet<_> = circuit.grid().components().map(|c| c.id).collect();
    assert_eq!(ids.len(), 10);
}

#[test]
fn move_keeps_identity_and_vacates_source() {
    let mut circuit = Circuit::new(40, 30);
    let id = circuit.place(p(5, 5), ComponentKind::Potentiometer).unwrap();
    circuit.set_value(id, 4700.0).unwrap();
    circuit.rotate(id).unwrap();

    circuit.move_component(id, p(6, 5)).unwrap();

    let moved = circuit.component(id).unwrap();
    assert_eq!(moved.position, p(6, 5));
    assert_eq!(moved.value, 4700.0);
    assert_eq!(moved.rotation, Rotation::Deg90);
    assert!(circuit.grid().cell(p(5, 5)).unwrap().is_vacant());
}

#[test]
fn move_rejections_leave_grid_unchanged() {
    let mut circuit = Circuit::new(40, 30);
    let a = circuit.place(p(1, 1), ComponentKind::Resistor).unwrap();
    circuit.place(p(2, 1), ComponentKind::Led).unwrap();

    assert!(matches!(
        circuit.move_component(a, p(1, 1)),
        Err(GridError::SamePosition(..))
    ));
    assert_eq!(
        circuit.move_component(a, p(2, 1)),
        Err(GridError::Occupied(p(2, 1)))
    );
    assert_eq!(
        circuit.move_component(a, p(-1, 1)),
        Err(GridError::OutOfBounds(p(-1, 1)))
    );
    assert_eq!(circuit.component(a).unwrap().position, p(1, 1));
}

#[test]
fn rotation_wraps_after_four_turns() {
    let mut circuit = Circuit::new(8, 8);
    let id = circuit.place(p(3, 3), ComponentKind::Diode).unwrap();
    let turns: Vec<_> = (0..4).map(|_| circuit.rotate(id).unwrap().0).collect();
    assert_eq!(
        turns,
        [Rotation::Deg90, Rotation::Deg180, Rotation::Deg270, Rotation::Deg0]
    );
}

#[test]
fn remove_vacates_with_fresh_placeholder() {
    let mut circuit = Circuit::new(8, 8);
    let before = match &circuit.grid().cell(p(2, 2)).unwrap().content {
        CellContent::Vacant { id } => *id,
        CellContent::Occupied(_) => unreachable!(),
    };
    let id = circuit.place(p(2, 2), ComponentKind::Buzzer).unwrap();
    let (removed, _) = circuit.remove(id).unwrap();
    assert_eq!(removed.id, id);

    match &circuit.grid().cell(p(2, 2)).unwrap().content {
        CellContent::Vacant { id } => assert_ne!(*id, before),
        CellContent::Occupied(_) => panic!("cell still occupied"),
    }
    assert!(circuit.component(id).is_none());
    assert_eq!(circuit.remove(id).unwrap_err(), GridError::UnknownComponent(id));
}

fn wired_pair() -> (Circuit, voltlab_engine::ComponentId, voltlab_engine::ComponentId) {
    let mut circuit = Circuit::new(40, 30);
    let a = circuit.place(p(5, 5), ComponentKind::Resistor).unwrap();
    let b = circuit.place(p(10, 5), ComponentKind::Led).unwrap();
    let c = circuit.place(p(10, 8), ComponentKind::Ground).unwrap();
    circuit
        .connect(
            ConnectionPoint::new(a, 1),
            ConnectionPoint::new(b, 0),
            vec![p(5, 5), p(10, 5)],
            "#10B981",
        )
        .unwrap();
    circuit
        .connect(
            ConnectionPoint::new(b, 1),
            ConnectionPoint::new(c, 0),
            vec![p(10, 5), p(10, 8)],
            "#10B981",
        )
        .unwrap();
    (circuit, a, b)
}

#[test]
fn removing_component_cascades_to_wires() {
    let (mut circuit, a, b) = wired_pair();
    let (_, dropped) = circuit.remove(b).unwrap();
    assert_eq!(dropped.len(), 2);
    assert!(circuit.wires().is_empty());
    assert!(circuit.component(a).is_some());
}

#[test]
fn moving_component_drops_its_wires_only() {
    let (mut circuit, a, _) = wired_pair();
    let dropped = circuit.move_component(a, p(5, 6)).unwrap();
    assert_eq!(dropped.len(), 1);
    assert_eq!(circuit.wires().len(), 1);
    assert!(circuit.wires().iter().all(|w| !w.touches(a)));
}

#[test]
fn rotating_component_drops_its_wires() {
    let (mut circuit, a, _) = wired_pair();
    let (rotation, dropped) = circuit.rotate(a).unwrap();
    assert_eq!(rotation, Rotation::Deg90);
    assert_eq!(dropped.len(), 1);
    assert_eq!(circuit.wires().len(), 1);
}

#[test]
fn no_wire_references_missing_component() {
    let (mut circuit, a, b) = wired_pair();
    circuit.remove(a).unwrap();
    circuit.rotate(b).unwrap();
    for wire in circuit.wires().iter() {
        assert!(circuit.component(wire.from.component).is_some());
        assert!(circuit.component(wire.to.component).is_some());
    }
}

#[test]
fn duplicate_and_self_connections_are_rejected() {
    let (mut circuit, a, b) = wired_pair();
    let from = ConnectionPoint::new(a, 1);
    let to = ConnectionPoint::new(b, 0);

    assert_eq!(
        circuit.connect(to, from, vec![], "#fff"),
        Err(WireError::Duplicate(to, from))
    );
    assert_eq!(
        circuit.connect(from, from, vec![], "#fff"),
        Err(WireError::SameTerminal(from))
    );
    assert_eq!(
        circuit.connect(from, ConnectionPoint::new(b, 7), vec![], "#fff"),
        Err(WireError::NoSuchTerminal(b, 7))
    );
    assert_eq!(circuit.wires().len(), 2);
}

#[test]
fn wire_through_prefers_latest_wire() {
    let (circuit, _, _) = wired_pair();
    let wire = circuit.wires().wire_through(p(10, 5)).unwrap();
    assert_eq!(wire.path, vec![p(10, 5), p(10, 8)]);
    assert!(circuit.wires().wire_through(p(0, 0)).is_none());
}

#[test]
fn component_serializes_with_catalog_names() {
    let mut circuit = Circuit::new(2, 2);
    let id = circuit.place(p(1, 0), ComponentKind::Resistor).unwrap();
    circuit.rotate(id).unwrap();

    let json = serde_json::to_value(circuit.component(id).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 5,
            "kind": "resistor",
            "position": [1, 0],
            "rotation": 90,
            "value": 220.0,
        })
    );
}
