/// Inbound adapters - drive the interaction port from outside input
mod event_script;

pub use event_script::{EventScriptRunner, ScriptReport, SessionEvent};
