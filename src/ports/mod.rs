/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what a render adapter drives; outbound ports are what
/// the application needs from the outside world (dataset, storage, console).
pub mod inbound;
pub mod outbound;
