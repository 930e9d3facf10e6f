// Domain layer: the Person model and the storage port. No AWS types here.

pub mod model;
pub mod ports;
