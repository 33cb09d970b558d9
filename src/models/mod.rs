pub mod contact;
pub mod defaults;
pub mod portfolio;
pub mod visitor;
