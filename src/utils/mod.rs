pub mod style;
pub mod theme;
