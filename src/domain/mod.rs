// Domain layer: the student record, report shapes and the ports the pipeline talks through.

pub mod model;
pub mod ports;
