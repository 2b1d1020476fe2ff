use std::io::Write;

use voltlab_catalog::ComponentKind;
use voltlab_engine::{GridPoint, Rotation};
use voltlab_lab::{SceneScript, ScriptError, Session, Step, TerminalRef};

const BLINKER: &str = r#"
[[step]]
action = "place"
kind = "battery_9v"
at = [2, 5]

[[step]]
action = "place"
kind = "resistor"
at = [5, 5]

[[step]]
action = "value"
at = [5, 5]
value = 330

[[step]]
action = "place"
kind = "led"
at = [10, 5]

[[step]]
action = "wire"
from = { at = [5, 5], terminal = 1 }
to = { at = [10, 5], terminal = 0 }

[[step]]
action = "wire"
from = { at = [2, 5], terminal = 0 }
to = { at = [5, 5], terminal = 0 }
"#;

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

#[test]
fn parses_tagged_steps() {
    let script = SceneScript::from_toml_str(BLINKER).unwrap();
    assert_eq!(script.steps.len(), 6);
    assert_eq!(
        script.steps[0],
        Step::Place {
            kind: ComponentKind::Battery9v,
            at: p(2, 5)
        }
    );
    assert_eq!(
        script.steps[4],
        Step::Wire {
            from: TerminalRef {
                at: p(5, 5),
                terminal: 1
            },
            to: TerminalRef {
                at: p(10, 5),
                terminal: 0
            },
        }
    );
}

#[test]
fn replay_builds_the_scene() {
    let script = SceneScript::from_toml_str(BLINKER).unwrap();
    let mut session = Session::default();

    let report = script.apply(&mut session);

    assert!(report.is_clean(), "{:?}", report.rejected);
    assert_eq!(report.applied, 6);
    assert_eq!(session.circuit().grid().component_count(), 3);
    assert_eq!(session.circuit().wires().len(), 2);
    assert_eq!(session.component_at(p(5, 5)).unwrap().value, 330.0);
}

#[test]
fn rejected_steps_are_reported_and_skipped() {
    let source = format!(
        "{BLINKER}
[[step]]
action = \"wire\"
from = {{ at = [10, 5], terminal = 0 }}
to = {{ at = [5, 5], terminal = 1 }}

[[step]]
action = \"remove\"
at = [30, 20]

[[step]]
action = \"rotate\"
at = [5, 5]
"
    );
    let script = SceneScript::from_toml_str(&source).unwrap();
    let mut session = Session::default();

    let report = script.apply(&mut session);

    assert_eq!(report.applied, 7);
    let indexes: Vec<_> = report.rejected.iter().map(|(i, _)| *i).collect();
    assert_eq!(indexes, [6, 7]);
    assert!(report.rejected[0].1.contains("already connected"));
    assert_eq!(report.rejected[1].1, "No component at (30, 20)");

    // Rotating the resistor dropped both of its wires.
    assert_eq!(session.component_at(p(5, 5)).unwrap().rotation, Rotation::Deg90);
    assert!(session.circuit().wires().is_empty());
}

#[test]
fn move_step_keeps_component_identity() {
    let script = SceneScript::from_toml_str(
        r#"
        [[step]]
        action = "place"
        kind = "buzzer"
        at = [1, 1]

        [[step]]
        action = "move"
        from = [1, 1]
        to = [4, 2]
        "#,
    )
    .unwrap();
    let mut session = Session::default();
    let report = script.apply(&mut session);

    assert!(report.is_clean());
    assert!(session.component_at(p(1, 1)).is_none());
    assert_eq!(session.component_at(p(4, 2)).unwrap().kind, ComponentKind::Buzzer);
}

#[test]
fn unknown_kind_fails_to_parse() {
    let err = SceneScript::from_toml_str(
        r#"
        [[step]]
        action = "place"
        kind = "flux_capacitor"
        at = [0, 0]
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ScriptError::Parse(_)));
    assert!(err.to_string().contains("flux_capacitor"));
}

#[test]
fn empty_script_has_no_steps() {
    let script = SceneScript::from_toml_str("").unwrap();
    assert!(script.steps.is_empty());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BLINKER.as_bytes()).unwrap();

    let script = SceneScript::load(file.path()).unwrap();
    assert_eq!(script.steps.len(), 6);

    let missing = file.path().with_extension("missing");
    assert!(matches!(
        SceneScript::load(&missing),
        Err(ScriptError::Io { .. })
    ));
}
