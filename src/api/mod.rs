// HTTP endpoints exposed by the relay

pub mod analyze;
