/// Adapters layer - Infrastructure implementations of the ports
pub mod outbound;
