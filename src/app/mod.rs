// Presentation adapters: they gather input, call the engine and render plans.

pub mod console;
pub mod info;
pub mod report;
