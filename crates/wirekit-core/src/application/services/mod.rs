//! Application services.

pub mod registrar;

pub use registrar::{RegistrarService, ScanReport, SkippedType};
