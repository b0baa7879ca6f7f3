pub mod comp;
pub mod form;
