// Domain layer: entry records, the session signal, and the ports the
// session talks through. No dependencies beyond std and async-trait.

pub mod model;
pub mod ports;
