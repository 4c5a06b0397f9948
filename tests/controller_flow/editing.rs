use super::support::{only_edge, session_with_transition, Session, A, B, LABEL};
use glam::Vec2;
use microflow_editor::{AppCommand, AppIntent, EdgeType, EditorMode, NodeType};

#[test]
fn self_loops_only_on_states() {
    let mut session = Session::new();
    let tad = Vec2::new(400.0, 300.0);
    session.mode(EditorMode::AddingNode(NodeType::State));
    session.click(A);
    session.mode(EditorMode::AddingNode(NodeType::Tad));
    session.click(tad);

    session.mode(EditorMode::AddingEdge(EdgeType::Transition));
    session.drag(A, &[A]);
    session.mode(EditorMode::AddingEdge(EdgeType::Operation));
    session.drag(tad, &[tad]);
    session.mode(EditorMode::AddingEdge(EdgeType::Interface));
    session.drag(A, &[A]);

    let diagram = &session.state.diagram;
    assert_eq!(diagram.edge_count(), 1);
    let edge = diagram.edges().next().expect("Selbstschleife");
    assert!(edge.is_self_loop());
    assert_eq!(edge.edge_type, EdgeType::Transition);
}

#[test]
fn release_outside_any_node_creates_nothing() {
    let mut session = session_with_transition();
    session.mode(EditorMode::AddingEdge(EdgeType::Transition));
    session.drag(A, &[Vec2::new(700.0, 500.0)]);

    assert_eq!(session.state.diagram.edge_count(), 1);
    assert!(session.state.interaction.edge_preview.is_none());
}

#[test]
fn undo_restores_previous_diagram_exactly() {
    let mut session = Session::new();
    session.mode(EditorMode::AddingNode(NodeType::State));
    session.click(A);
    session.click(B);
    let before = (*session.state.diagram).clone();

    session.mode(EditorMode::AddingEdge(EdgeType::Transition));
    session.drag(A, &[B]);
    assert_eq!(session.state.diagram.edge_count(), 1);

    session.send(AppIntent::UndoRequested);

    assert_eq!(*session.state.diagram, before);
    assert_eq!(session.state.mode, EditorMode::Selecting);
}

#[test]
fn undo_after_delete_brings_node_back() {
    let mut session = session_with_transition();
    let before = (*session.state.diagram).clone();

    session.mode(EditorMode::Deleting);
    session.click(A);
    assert_eq!(session.state.diagram.node_count(), 1);

    session.send(AppIntent::UndoRequested);
    assert_eq!(*session.state.diagram, before);
}

#[test]
fn undo_after_second_drag_restores_first_drag_position() {
    let mut session = session_with_transition();
    let a_id = session.state.diagram.nodes().next().map(|n| n.id).expect("A");
    let center = |session: &Session| session.state.diagram.node(a_id).map(|n| n.center);

    let first = A + Vec2::new(10.0, 0.0);
    session.drag(A, &[first]);
    assert_eq!(center(&session), Some(first));

    // A ist noch selektiert, das Drücken allein erzeugt keinen Snapshot
    let second = first + Vec2::new(0.0, 40.0);
    session.drag(first, &[second]);
    assert_eq!(center(&session), Some(second));

    session.send(AppIntent::UndoRequested);
    assert_eq!(center(&session), Some(first));

    session.send(AppIntent::UndoRequested);
    assert_eq!(center(&session), Some(A));
}

#[test]
fn click_on_selected_node_without_moving_adds_no_undo_step() {
    let mut session = session_with_transition();
    session.click(A);
    let depth = session.state.history.len();

    session.click(A);

    assert_eq!(session.state.history.len(), depth);
}

#[test]
fn undo_after_rename_restores_the_number() {
    let mut session = session_with_transition();
    let a_id = session.state.diagram.nodes().next().map(|n| n.id).expect("A");
    session.view.answer_line(Some("IDLE"));

    session.click(A);
    session.send(AppIntent::EditSelectedRequested);
    assert_eq!(session.state.diagram.display_name(a_id).as_deref(), Some("IDLE"));

    session.send(AppIntent::UndoRequested);

    let node = session.state.diagram.node(a_id).expect("A");
    assert_eq!(node.name, "1");
    assert!(!node.held_name);
}

#[test]
fn deleting_a_node_cascades_to_edges_and_actions() {
    let mut session = session_with_transition();
    session.mode(EditorMode::AddingAction);
    session.click(LABEL);
    assert_eq!(session.state.diagram.action_count(), 1);
    let action = session.state.diagram.actions().next().expect("Aktion");
    assert_eq!(action.code, "// code");
    assert_eq!(action.edge_id, only_edge(&session));

    session.mode(EditorMode::Deleting);
    session.click(A);

    let diagram = &session.state.diagram;
    assert_eq!(diagram.node_count(), 1);
    assert_eq!(diagram.edge_count(), 0);
    assert_eq!(diagram.action_count(), 0);
}

#[test]
fn action_needs_an_edge_under_the_pointer() {
    let mut session = session_with_transition();
    session.mode(EditorMode::AddingAction);
    session.click(Vec2::new(600.0, 600.0));

    assert_eq!(session.state.diagram.action_count(), 0);
}

#[test]
fn delete_selected_from_context_menu() {
    let mut session = session_with_transition();
    session.secondary_click(LABEL);
    session.send(AppIntent::DeleteSelectedRequested);

    assert_eq!(session.state.diagram.edge_count(), 0);
    assert_eq!(session.state.diagram.node_count(), 2);
    assert_eq!(session.state.selection.clicked, None);
    assert_eq!(session.state.mode, EditorMode::Selecting);
}

#[test]
fn placing_beyond_the_surface_grows_it() {
    let mut session = Session::new();
    session.send(AppIntent::SurfaceResized {
        size: [500.0, 400.0],
    });
    session.mode(EditorMode::AddingNode(NodeType::Text));
    session.click(Vec2::new(520.0, 410.0));

    assert_eq!(session.view.grown, vec![(100.0, 0.0), (0.0, 100.0)]);
    assert_eq!(session.state.ui.surface_size, [600.0, 500.0]);
    assert_eq!(session.state.text_elements.len(), 1);
}

#[test]
fn add_mode_stays_active_between_clicks() {
    let mut session = Session::new();
    session.mode(EditorMode::AddingNode(NodeType::Tad));
    session.click(A);
    session.click(B);

    assert_eq!(session.state.mode, EditorMode::AddingNode(NodeType::Tad));
    let names: Vec<&str> = session
        .state
        .diagram
        .nodes()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, vec!["TAD", "TAD"]);
}

#[test]
fn command_log_records_the_mode_each_command_ran_in() {
    let mut session = session_with_transition();
    session.mode(EditorMode::Deleting);
    session.click(A);

    let log = &session.state.command_log;
    assert!(log
        .commands_in(EditorMode::Deleting)
        .any(|c| matches!(c, AppCommand::DeleteAt { pos } if *pos == A)));
    assert!(!log
        .commands_in(EditorMode::Selecting)
        .any(|c| matches!(c, AppCommand::DeleteAt { .. })));
}
