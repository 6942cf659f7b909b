// Adapters layer: concrete sinks for the announcer port.

pub mod console;
