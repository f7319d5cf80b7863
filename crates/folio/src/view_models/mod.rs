pub mod key_bindings_view_model;

pub use key_bindings_view_model::KeyBindingsPanelViewModel;
