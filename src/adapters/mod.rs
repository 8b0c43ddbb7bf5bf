// Adapters layer: concrete implementations of the domain ports against
// external systems. Currently a single HTTP adapter for the AWX v2 REST API.

pub mod http;
