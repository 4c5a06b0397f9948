use glam::Vec2;
use microflow_editor::app::{ContextMenuSpec, ExportKind, PathPurpose};
use microflow_editor::{
    AppController, AppIntent, AppState, Diagram, EdgeType, EditorMode, EditorView, NodeType,
    PointerButton,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// View mit vorab festgelegten Antworten, die alle Aufrufe protokolliert.
#[derive(Default)]
pub struct ScriptedView {
    pub lines: VecDeque<Option<String>>,
    pub choices: VecDeque<Option<usize>>,
    pub paths: VecDeque<Option<PathBuf>>,
    pub functions: VecDeque<Option<String>>,
    pub export_fails: bool,

    pub prompts: Vec<String>,
    pub menus: Vec<ContextMenuSpec>,
    pub notifications: Vec<String>,
    pub cursors: Vec<EditorMode>,
    pub grown: Vec<(f32, f32)>,
    pub exports: Vec<(ExportKind, Vec<u64>)>,
    pub repaints: usize,
}

impl ScriptedView {
    pub fn answer_line(&mut self, line: Option<&str>) {
        self.lines.push_back(line.map(str::to_string));
    }

    pub fn answer_path(&mut self, path: Option<PathBuf>) {
        self.paths.push_back(path);
    }
}

impl EditorView for ScriptedView {
    fn change_cursor(&mut self, mode: EditorMode) {
        self.cursors.push(mode);
    }

    fn request_repaint(&mut self) {
        self.repaints += 1;
    }

    fn show_context_menu(&mut self, _pos: Vec2, menu: &ContextMenuSpec) {
        self.menus.push(menu.clone());
    }

    fn hide_context_menu(&mut self) {}

    fn prompt_single_line(&mut self, message: &str, _seed: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.lines.pop_front().flatten()
    }

    fn prompt_multi_line(&mut self, message: &str, _title: &str, _seed: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.lines.pop_front().flatten()
    }

    fn prompt_choice(&mut self, message: &str, _title: &str, _options: &[&str]) -> Option<usize> {
        self.prompts.push(message.to_string());
        self.choices.pop_front().flatten()
    }

    fn grow_drawing_surface(&mut self, dx: f32, dy: f32) {
        self.grown.push((dx, dy));
    }

    fn choose_path(&mut self, _purpose: PathPurpose, _suggested: Option<&Path>) -> Option<PathBuf> {
        self.paths.pop_front().flatten()
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn edit_functions(&mut self, _seed: &str) -> Option<String> {
        self.functions.pop_front().flatten()
    }

    fn export(
        &mut self,
        kind: ExportKind,
        _diagram: &Diagram,
        text_elements: &[u64],
    ) -> anyhow::Result<()> {
        anyhow::ensure!(!self.export_fails, "Export abgelehnt");
        self.exports.push((kind, text_elements.to_vec()));
        Ok(())
    }
}

/// Controller, State und View einer Testsitzung.
pub struct Session {
    pub controller: AppController,
    pub state: AppState,
    pub view: ScriptedView,
    clock_ms: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            controller: AppController::new(),
            state: AppState::new(),
            view: ScriptedView::default(),
            clock_ms: 10_000,
        }
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, &mut self.view, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    pub fn mode(&mut self, mode: EditorMode) {
        self.send(AppIntent::ModeSelected { mode });
    }

    /// Klick mit der Primärtaste; die Uhr springt jeweils eine Sekunde weiter.
    pub fn click(&mut self, pos: Vec2) {
        self.clock_ms += 1_000;
        self.press_at(pos, PointerButton::Primary, self.clock_ms);
        self.send(AppIntent::PointerReleased { pos });
    }

    /// Klick mit der Sekundärtaste (Kontextmenü).
    pub fn secondary_click(&mut self, pos: Vec2) {
        self.clock_ms += 1_000;
        self.press_at(pos, PointerButton::Secondary, self.clock_ms);
        self.send(AppIntent::PointerReleased { pos });
    }

    pub fn press_at(&mut self, pos: Vec2, button: PointerButton, timestamp_ms: u64) {
        self.send(AppIntent::PointerPressed {
            pos,
            button,
            timestamp_ms,
        });
    }

    /// Drücken, Ziehen über `path`, Loslassen am letzten Punkt.
    pub fn drag(&mut self, from: Vec2, path: &[Vec2]) {
        self.clock_ms += 1_000;
        self.press_at(from, PointerButton::Primary, self.clock_ms);
        for pos in path {
            self.send(AppIntent::PointerDragged { pos: *pos });
        }
        let end = path.last().copied().unwrap_or(from);
        self.send(AppIntent::PointerReleased { pos: end });
    }
}

/// Mittelpunkt des ersten Zustands
pub const A: Vec2 = Vec2::new(100.0, 100.0);
/// Mittelpunkt des zweiten Zustands
pub const B: Vec2 = Vec2::new(300.0, 100.0);
/// Standard-Pivot des Übergangs A → B
pub const PIVOT: Vec2 = Vec2::new(200.0, 140.0);
/// Label-Anker des Übergangs A → B (Kurvenmitte)
pub const LABEL: Vec2 = Vec2::new(200.0, 120.0);

/// Zwei Zustände bei `A` und `B`, verbunden durch einen Übergang.
pub fn session_with_transition() -> Session {
    let mut session = Session::new();
    session.mode(EditorMode::AddingNode(NodeType::State));
    session.click(A);
    session.click(B);
    session.mode(EditorMode::AddingEdge(EdgeType::Transition));
    session.drag(A, &[Vec2::new(200.0, 100.0), B]);
    session.mode(EditorMode::Selecting);
    session
}

/// ID der einzigen Kante.
pub fn only_edge(session: &Session) -> u64 {
    session
        .state
        .diagram
        .edges()
        .next()
        .map(|e| e.id)
        .expect("Kante erwartet")
}
