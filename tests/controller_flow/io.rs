use super::support::{session_with_transition, Session, A};
use microflow_editor::app::ExportKind;
use microflow_editor::{AppCommand, AppIntent, EditorMode, NodeType};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("microflow_{}_{}", std::process::id(), name))
}

#[test]
fn save_appends_extension_and_reopens() {
    let mut session = session_with_transition();
    let chosen = temp_path("roundtrip");
    session.view.answer_path(Some(chosen.clone()));

    session.send(AppIntent::SaveRequested);

    let written = chosen.with_extension("mcf");
    assert_eq!(session.state.ui.current_file_path.as_ref(), Some(&written));
    assert!(session.view.notifications.is_empty());

    let mut reopened = Session::new();
    reopened.view.answer_path(Some(written.clone()));
    reopened.send(AppIntent::OpenFileRequested);

    assert_eq!(reopened.state.diagram.node_count(), 2);
    assert_eq!(reopened.state.diagram.edge_count(), 1);
    assert_eq!(reopened.state.ui.current_file_path.as_ref(), Some(&written));
    assert!(!reopened.state.can_undo());

    let _ = std::fs::remove_file(written);
}

#[test]
fn second_save_reuses_known_path() {
    let mut session = session_with_transition();
    let path = temp_path("known.mcf");
    session.view.answer_path(Some(path.clone()));

    session.send(AppIntent::SaveRequested);
    session.send(AppIntent::SaveRequested);

    assert!(session.view.paths.is_empty());
    assert_eq!(session.state.ui.current_file_path.as_ref(), Some(&path));
    let _ = std::fs::remove_file(path);
}

#[test]
fn open_failure_notifies_and_keeps_diagram() {
    let mut session = session_with_transition();
    let missing = temp_path("does_not_exist.mcf");
    session.view.answer_path(Some(missing.clone()));

    session.send(AppIntent::OpenFileRequested);

    assert_eq!(session.view.notifications, vec!["Error loading file.".to_string()]);
    assert_eq!(session.state.diagram.node_count(), 2);
    assert_eq!(session.state.ui.last_open_path.as_ref(), Some(&missing));
    assert!(session.state.ui.current_file_path.is_none());
}

#[test]
fn save_failure_notifies() {
    let mut session = session_with_transition();
    session
        .view
        .answer_path(Some(temp_path("missing_dir").join("motor")));

    session.send(AppIntent::SaveRequested);

    assert_eq!(session.view.notifications, vec!["Error saving file.".to_string()]);
    assert!(session.state.ui.current_file_path.is_none());
}

#[test]
fn cancelled_dialogs_do_nothing() {
    let mut session = session_with_transition();
    session.send(AppIntent::OpenFileRequested);
    session.send(AppIntent::SaveRequested);

    assert!(session.view.notifications.is_empty());
    assert_eq!(session.state.diagram.node_count(), 2);
    assert!(session.state.ui.current_file_path.is_none());
}

#[test]
fn export_passes_text_elements_and_reports_failure() {
    let mut session = Session::new();
    session.mode(EditorMode::AddingNode(NodeType::Text));
    session.click(A);
    let text_id = session.state.text_elements[0];

    session.send(AppIntent::ExportRequested {
        kind: ExportKind::Motor,
    });
    assert_eq!(session.view.exports, vec![(ExportKind::Motor, vec![text_id])]);

    session.view.export_fails = true;
    session.send(AppIntent::ExportRequested {
        kind: ExportKind::Png,
    });
    assert_eq!(session.view.notifications, vec!["Error exporting file.".to_string()]);
}

#[test]
fn new_file_starts_empty_and_logs_commands() {
    let mut session = session_with_transition();
    session.send(AppIntent::NewFileRequested);

    assert_eq!(session.state.diagram.node_count(), 0);
    assert!(!session.state.can_undo());
    assert_eq!(
        session.state.command_log.last(),
        Some(&AppCommand::CompleteCommand)
    );
}
