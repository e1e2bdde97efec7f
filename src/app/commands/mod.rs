pub mod action;
pub mod apply;
pub mod load;
pub mod outputs;
