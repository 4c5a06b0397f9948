//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem externen Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{DIAGRAM_FILE_EXTENSION, DOUBLE_CLICK_MS, SURFACE_GROW_STEP};
pub use render_scene::{EdgePreview, PreviewStyle, RenderScene};
