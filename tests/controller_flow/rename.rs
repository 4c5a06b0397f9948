use super::support::{only_edge, session_with_transition, Session, A, B, LABEL};
use glam::Vec2;
use microflow_editor::core::OperationAccess;
use microflow_editor::{AppIntent, EdgeType, EditorMode, NodeType, PointerButton};

fn first_state(session: &Session) -> u64 {
    session
        .state
        .diagram
        .nodes()
        .next()
        .map(|n| n.id)
        .expect("Zustand")
}

fn double_click(session: &mut Session, pos: Vec2, first_ms: u64, second_ms: u64) {
    session.press_at(pos, PointerButton::Primary, first_ms);
    session.send(AppIntent::PointerReleased { pos });
    session.press_at(pos, PointerButton::Primary, second_ms);
    session.send(AppIntent::PointerReleased { pos });
}

#[test]
fn quick_second_click_opens_rename_prompt() {
    let mut session = session_with_transition();
    session.view.answer_line(Some("5"));

    double_click(&mut session, A, 50_000, 50_150);

    assert_eq!(session.view.prompts, vec!["Enter a number:".to_string()]);
    let id = first_state(&session);
    assert_eq!(session.state.diagram.display_name(id).as_deref(), Some("5"));
    assert_eq!(session.state.selection.clicked, None);
}

#[test]
fn slow_second_click_does_not_rename() {
    let mut session = session_with_transition();
    session.view.answer_line(Some("5"));

    double_click(&mut session, A, 50_000, 50_201);

    assert!(session.view.prompts.is_empty());
    let id = first_state(&session);
    assert_eq!(session.state.diagram.display_name(id).as_deref(), Some("1"));
}

#[test]
fn duplicate_state_name_releases_the_older_one() {
    let mut session = session_with_transition();
    session.view.answer_line(Some("7"));
    session.view.answer_line(Some("7"));

    session.click(A);
    session.send(AppIntent::EditSelectedRequested);
    session.click(B);
    session.send(AppIntent::EditSelectedRequested);

    let diagram = &session.state.diagram;
    let ids: Vec<u64> = diagram.nodes().map(|n| n.id).collect();
    assert_eq!(diagram.display_name(ids[0]).as_deref(), Some("3"));
    assert!(!diagram.node(ids[0]).expect("A").held_name);
    assert_eq!(diagram.display_name(ids[1]).as_deref(), Some("7"));
}

#[test]
fn renaming_onto_another_state_number_keeps_identifiers_distinct() {
    let mut session = session_with_transition();
    session.view.answer_line(Some("2"));

    session.click(A);
    session.send(AppIntent::EditSelectedRequested);

    let diagram = &session.state.diagram;
    let names: Vec<String> = diagram
        .nodes()
        .filter_map(|n| diagram.display_name(n.id))
        .collect();
    assert_eq!(names, vec!["2".to_string(), "3".to_string()]);
}

#[test]
fn deleting_a_state_keeps_the_other_numbers() {
    let mut session = session_with_transition();
    session.mode(EditorMode::Deleting);
    session.click(A);
    session.mode(EditorMode::AddingNode(NodeType::State));
    session.click(A);

    let diagram = &session.state.diagram;
    let names: Vec<String> = diagram
        .nodes()
        .filter_map(|n| diagram.display_name(n.id))
        .collect();
    assert_eq!(names, vec!["2".to_string(), "3".to_string()]);
}

#[test]
fn double_click_on_label_edits_condition() {
    let mut session = session_with_transition();
    session.view.answer_line(Some("x > 3"));

    double_click(&mut session, LABEL, 60_000, 60_100);

    let edge = session
        .state
        .diagram
        .edge(only_edge(&session))
        .expect("Übergang");
    assert_eq!(edge.label, "x > 3");
    assert!(edge.held_name);
    assert_eq!(session.view.prompts, vec!["Enter transition:".to_string()]);
}

#[test]
fn cancelled_rename_keeps_name_and_history() {
    let mut session = session_with_transition();
    session.click(A);
    let depth = session.state.history.len();
    session.view.answer_line(None);

    session.send(AppIntent::EditSelectedRequested);

    let id = first_state(&session);
    assert_eq!(session.state.diagram.display_name(id).as_deref(), Some("1"));
    assert_eq!(session.state.history.len(), depth);
}

#[test]
fn operation_dialog_sets_read_access() {
    let mut session = Session::new();
    let tad = Vec2::new(100.0, 300.0);
    session.mode(EditorMode::AddingNode(NodeType::State));
    session.click(A);
    session.mode(EditorMode::AddingNode(NodeType::Tad));
    session.click(tad);
    session.mode(EditorMode::AddingEdge(EdgeType::Operation));
    session.drag(A, &[tad]);
    session.mode(EditorMode::Selecting);

    let edge_id = only_edge(&session);
    let label = session
        .state
        .diagram
        .edge(edge_id)
        .map(|e| e.label_point)
        .expect("Operation");
    session.view.choices.push_back(Some(2));
    session.click(label);
    session.send(AppIntent::EditSelectedRequested);

    let edge = session.state.diagram.edge(edge_id).expect("Operation");
    assert_eq!(edge.label, "operation");
    assert_eq!(edge.access, OperationAccess::Read);
    assert!(!edge.bidirectional);
}

#[test]
fn interface_functions_are_edited_from_menu() {
    let mut session = Session::new();
    session.mode(EditorMode::AddingNode(NodeType::State));
    session.click(A);
    session.click(B);
    session.mode(EditorMode::AddingEdge(EdgeType::Interface));
    session.drag(A, &[B]);
    session.mode(EditorMode::Selecting);

    session
        .view
        .functions
        .push_back(Some("void start(void);".to_string()));
    session.secondary_click(LABEL);
    session.send(AppIntent::EditFunctionsRequested);

    let edge = session
        .state
        .diagram
        .edge(only_edge(&session))
        .expect("Schnittstelle");
    assert_eq!(edge.functions, "void start(void);");
}

#[test]
fn text_node_takes_multi_line_content() {
    let mut session = Session::new();
    let pos = Vec2::new(200.0, 200.0);
    session.mode(EditorMode::AddingNode(NodeType::Text));
    session.click(pos);
    session.mode(EditorMode::Selecting);
    session.view.answer_line(Some("#define A 1\n#define B 2"));

    session.click(pos);
    session.send(AppIntent::EditSelectedRequested);

    let node = session.state.diagram.nodes().next().expect("Text");
    assert_eq!(node.name, "#define A 1\n#define B 2");
    assert!(!node.held_name);
    assert_eq!(session.state.text_elements, vec![node.id]);
}

#[test]
fn blank_text_content_is_asked_again() {
    let mut session = Session::new();
    let pos = Vec2::new(200.0, 200.0);
    session.mode(EditorMode::AddingNode(NodeType::Text));
    session.click(pos);
    session.mode(EditorMode::Selecting);
    session.view.answer_line(Some(""));
    session.view.answer_line(Some("#define LIMIT 8"));

    session.click(pos);
    session.send(AppIntent::EditSelectedRequested);

    let node = session.state.diagram.nodes().next().expect("Text");
    assert_eq!(node.name, "#define LIMIT 8");
    assert_eq!(session.view.prompts.len(), 2);
}
