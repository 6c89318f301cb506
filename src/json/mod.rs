//! JSON Import/Export eines Liniennetzplans.
//!
//! Das Dateiformat trennt Haltestellen (`stops`) und Linien (`routes`);
//! Linienzugehörigkeiten der Haltestellen werden beim Import neu berechnet.

mod dto;
pub mod parser;
pub mod writer;

pub use parser::parse_scheme;
pub use writer::write_scheme;
