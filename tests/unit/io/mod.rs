pub mod cli;
pub mod error;
pub mod report;
pub mod svg;
pub mod visualization;
