use super::support::{only_edge, session_with_transition, Session, A, B, LABEL, PIVOT};
use glam::Vec2;
use microflow_editor::app::state::DragHandle;
use microflow_editor::{AppIntent, EdgeType, EditorMode, ElementRef, NodeType, PointerButton};

#[test]
fn two_states_and_transition_end_to_end() {
    let session = session_with_transition();
    let diagram = &session.state.diagram;

    assert_eq!(diagram.node_count(), 2);
    let edge = diagram.edges().next().expect("Übergang");
    assert_eq!(edge.edge_type, EdgeType::Transition);
    assert_eq!(edge.label, "true");
    assert_eq!(edge.pivot, PIVOT);
    assert_eq!(edge.label_point, LABEL);

    let names: Vec<String> = diagram
        .nodes()
        .filter_map(|n| diagram.display_name(n.id))
        .collect();
    assert_eq!(names, vec!["1".to_string(), "2".to_string()]);
    assert!(session.state.interaction.pending_edge.is_none());
    assert!(session.state.interaction.edge_preview.is_none());
}

#[test]
fn dragging_the_pivot_bends_the_edge_only() {
    let mut session = session_with_transition();
    let edge_id = only_edge(&session);

    session.drag(PIVOT, &[PIVOT + Vec2::new(5.0, 5.0)]);

    let edge = session.state.diagram.edge(edge_id).expect("Kante");
    assert_eq!(edge.pivot, Vec2::new(205.0, 145.0));
    assert_eq!(edge.label_point, LABEL);
    let first = edge.path().first().copied().expect("Kurve");
    let last = edge.path().last().copied().expect("Kurve");
    assert_eq!((first, last), (A, B));
    assert_eq!(session.state.interaction.handle, DragHandle::None);
}

#[test]
fn dragging_a_node_moves_incident_edge_endpoints() {
    let mut session = session_with_transition();
    let edge_id = only_edge(&session);

    session.drag(B, &[B + Vec2::new(10.0, 0.0), B + Vec2::new(20.0, 30.0)]);

    let moved = Vec2::new(320.0, 130.0);
    let diagram = &session.state.diagram;
    let node = diagram.nodes().nth(1).expect("Zustand");
    assert_eq!(node.center, moved);
    let edge = diagram.edge(edge_id).expect("Kante");
    assert_eq!(edge.path().last().copied(), Some(moved));
    assert_eq!(edge.pivot, PIVOT);
}

#[test]
fn label_drag_moves_only_the_label() {
    let mut session = session_with_transition();
    let edge_id = only_edge(&session);

    session.drag(LABEL, &[LABEL + Vec2::new(0.0, -30.0)]);

    let edge = session.state.diagram.edge(edge_id).expect("Kante");
    assert_eq!(edge.label_point, Vec2::new(200.0, 90.0));
    assert_eq!(edge.pivot, PIVOT);
}

#[test]
fn click_on_empty_space_clears_selection() {
    let mut session = session_with_transition();
    session.click(A);
    assert_eq!(
        session.state.selection.clicked.map(|e| matches!(e, ElementRef::Node(_))),
        Some(true)
    );

    session.click(Vec2::new(600.0, 600.0));
    assert_eq!(session.state.selection.clicked, None);
}

#[test]
fn context_menu_labels_follow_element_kind() {
    let mut session = session_with_transition();
    session.secondary_click(A);
    session.secondary_click(LABEL);

    let labels: Vec<&str> = session.view.menus.iter().map(|m| m.edit_label).collect();
    assert_eq!(labels, vec!["state number", "condition"]);
    assert!(session.view.menus.iter().all(|m| !m.show_edit_functions));
}

#[test]
fn interface_menu_offers_function_editor() {
    let mut session = Session::new();
    session.mode(EditorMode::AddingNode(NodeType::State));
    session.click(A);
    session.click(B);
    session.mode(EditorMode::AddingEdge(EdgeType::Interface));
    session.drag(A, &[B]);
    session.mode(EditorMode::Selecting);

    session.secondary_click(LABEL);

    let menu = session.view.menus.last().expect("Kontextmenü");
    assert_eq!(menu.edit_label, "interface number");
    assert!(menu.show_edit_functions);
}

#[test]
fn secondary_press_in_add_mode_returns_to_selecting() {
    let mut session = Session::new();
    session.mode(EditorMode::AddingNode(NodeType::Tad));
    session.press_at(A, PointerButton::Secondary, 1);

    assert_eq!(session.state.mode, EditorMode::Selecting);
    assert_eq!(session.state.diagram.node_count(), 0);
    assert_eq!(session.view.cursors.last(), Some(&EditorMode::Selecting));
}

#[test]
fn cancel_discards_pending_edge() {
    let mut session = session_with_transition();
    session.mode(EditorMode::AddingEdge(EdgeType::Interrupt));
    session.press_at(A, PointerButton::Primary, 1);
    assert!(session.state.interaction.pending_edge.is_some());

    session.send(AppIntent::CancelRequested);
    session.send(AppIntent::PointerReleased { pos: B });

    assert!(session.state.interaction.pending_edge.is_none());
    assert!(session.state.interaction.edge_preview.is_none());
    assert_eq!(session.state.diagram.edge_count(), 1);
    assert_eq!(session.state.mode, EditorMode::Selecting);
}
