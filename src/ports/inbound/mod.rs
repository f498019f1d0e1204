/// Inbound ports (Driving ports) - Use case interfaces
pub mod policy_evaluation_port;

pub use policy_evaluation_port::PolicyEvaluationPort;
