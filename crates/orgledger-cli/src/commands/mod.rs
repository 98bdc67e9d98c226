pub mod replay;
pub mod show;
pub mod validate;
