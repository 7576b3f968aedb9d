// Test modules for all components
pub mod test_coerce;
pub mod test_predictions;
pub mod test_text;
pub mod test_window;
