pub mod gate;
pub mod matcher;
pub mod policy;

pub use gate::{request_gate, GateOutcome, RequestGate};
pub use matcher::PathFilter;
pub use policy::{decide, RouteDecision, HOME_PATH, MAINTENANCE_PATH};
