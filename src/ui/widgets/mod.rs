//! Small building blocks shared by the render functions: the loading
//! spinner and the theme-derived styles.

pub mod spinner;
pub mod styling;
