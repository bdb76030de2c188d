pub mod app;
pub mod event_panel;
pub mod playfield_view;
pub mod settings_panel;
