// Domain layer: typed AWX records and the collaborator ports the client is built on.

pub mod model;
pub mod ports;
