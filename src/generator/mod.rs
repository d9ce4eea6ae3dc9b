pub mod catenary;

mod lissajous;
mod watts;

pub use lissajous::{Lissajous, LissajousAlt};
pub use watts::Watts;
