/// Inbound ports (Driving ports) - what a render adapter calls
pub mod hideout_interaction_port;

pub use hideout_interaction_port::{HideoutInteractionPort, IgnoredReason, InteractionOutcome};
