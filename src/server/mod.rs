// Server module entry point
// Listener creation, connection handling, accept loop and signals

pub mod connection;
pub mod listener;
pub mod serve;
pub mod signal;

pub use listener::create_listener;
pub use serve::run_server;
pub use signal::start_signal_handler;
