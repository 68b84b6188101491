pub mod overlay;
pub mod sweep;
pub mod template;
