use voltlab_catalog::ComponentKind;
use voltlab_engine::router::fallback_path;
use voltlab_engine::{Circuit, Grid, GridPoint, Router, RouterConfig};

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

fn assert_well_formed(grid: &Grid, path: &[GridPoint], start: GridPoint, end: GridPoint) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "{} -> {} is not a single step",
            pair[0],
            pair[1]
        );
    }
    for cell in &path[1..path.len() - 1] {
        assert!(!grid.is_obstacle(*cell), "path crosses occupied cell {cell}");
    }
}

#[test]
fn straight_route_on_empty_grid() {
    let circuit = Circuit::new(40, 30);
    let path = Router::default().find_path(circuit.grid(), p(5, 5), p(10, 5));

    assert_eq!(path, (5..=10).map(|x| p(x, 5)).collect::<Vec<_>>());
}

#[test]
fn route_length_is_manhattan_distance_without_obstacles() {
    let circuit = Circuit::new(40, 30);
    let router = Router::default();
    for (start, end) in [(p(0, 0), p(7, 3)), (p(12, 20), p(3, 2)), (p(39, 29), p(0, 29))] {
        let path = router.find_path(circuit.grid(), start, end);
        assert_well_formed(circuit.grid(), &path, start, end);
        assert_eq!(path.len() as u32 - 1, start.manhattan(end));
    }
}

#[test]
fn route_detours_around_component() {
    let mut circuit = Circuit::new(40, 30);
    circuit.place(p(7, 5), ComponentKind::Resistor).unwrap();

    let path = Router::default().find_path(circuit.grid(), p(5, 5), p(10, 5));

    assert_well_formed(circuit.grid(), &path, p(5, 5), p(10, 5));
    assert!(!path.contains(&p(7, 5)));
    assert_eq!(path.len(), 8);
}

#[test]
fn occupied_endpoints_are_passable() {
    let mut circuit = Circuit::new(20, 20);
    circuit.place(p(2, 2), ComponentKind::Resistor).unwrap();
    circuit.place(p(6, 2), ComponentKind::Led).unwrap();

    let path = Router::default().find_path(circuit.grid(), p(2, 2), p(6, 2));
    assert_eq!(path.len(), 5);
    assert_well_formed(circuit.grid(), &path, p(2, 2), p(6, 2));
}

#[test]
fn route_through_a_wall_gap() {
    let mut circuit = Circuit::new(12, 12);
    for y in 0..12 {
        if y != 9 {
            circuit.place(p(6, y), ComponentKind::Ground).unwrap();
        }
    }

    let path = Router::default().find_path(circuit.grid(), p(2, 2), p(10, 2));

    assert_well_formed(circuit.grid(), &path, p(2, 2), p(10, 2));
    assert!(path.contains(&p(6, 9)));
    // 8 across plus 7 down and 7 back up
    assert_eq!(path.len(), 8 + 14 + 1);
}

#[test]
fn enclosed_start_falls_back_to_l_shape() {
    let mut circuit = Circuit::new(10, 10);
    circuit.place(p(1, 0), ComponentKind::Resistor).unwrap();
    circuit.place(p(0, 1), ComponentKind::Resistor).unwrap();

    let router = Router::default();
    assert_eq!(router.search(circuit.grid(), p(0, 0), p(5, 5)), None);
    assert_eq!(
        router.find_path(circuit.grid(), p(0, 0), p(5, 5)),
        vec![p(0, 0), p(5, 0), p(5, 5)]
    );
}

#[test]
fn off_grid_endpoint_uses_fallback() {
    let circuit = Circuit::new(10, 10);
    let path = Router::default().find_path(circuit.grid(), p(2, 2), p(14, 6));
    assert_eq!(path, fallback_path(p(2, 2), p(14, 6)));
}

#[test]
fn start_equal_to_end_is_single_point() {
    let circuit = Circuit::new(10, 10);
    let path = Router::default().find_path(circuit.grid(), p(4, 4), p(4, 4));
    assert_eq!(path, vec![p(4, 4)]);
}

#[test]
fn expansion_budget_gives_up() {
    let circuit = Circuit::new(10, 10);
    let router = Router::new(RouterConfig {
        max_expansions: Some(1),
    });
    assert_eq!(router.search(circuit.grid(), p(0, 0), p(5, 0)), None);
    assert_eq!(
        router.find_path(circuit.grid(), p(0, 0), p(5, 0)),
        vec![p(0, 0), p(5, 0), p(5, 0)]
    );
}

#[test]
fn routing_is_deterministic() {
    let mut circuit = Circuit::new(30, 30);
    for (x, y) in [(5, 5), (6, 7), (9, 3), (12, 12), (4, 10)] {
        circuit.place(p(x, y), ComponentKind::CapacitorCeramic).unwrap();
    }
    let router = Router::default();
    let first = router.find_path(circuit.grid(), p(1, 1), p(20, 18));
    for _ in 0..5 {
        assert_eq!(router.find_path(circuit.grid(), p(1, 1), p(20, 18)), first);
    }
}
