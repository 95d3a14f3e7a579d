pub use input_blocking::UiFocus;
pub use plugin::SlingUiPlugin;
pub use ui_state::UiState;

pub(self) use input_blocking::focus_ui;

mod hud;
mod input_blocking;
mod plugin;
mod ui_state;
