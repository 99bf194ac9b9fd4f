mod af_rib;
#[allow(clippy::module_inception)]
pub mod rib;

pub use rib::Rib;
