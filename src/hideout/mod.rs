/// Hideout planning core: the station graph and everything computed from it.
///
/// `domain` holds the value objects and the graph aggregate; `services`
/// holds the pure algorithms (loading, closure, aggregation, selection,
/// highlight projection). Nothing in here performs I/O.
pub mod domain;
pub mod services;
