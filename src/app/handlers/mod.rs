//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drag;
pub mod editing;
pub mod file_io;
pub mod history;
pub mod options;
pub mod routes;
pub mod segments;
pub mod selection;
