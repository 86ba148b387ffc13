pub mod organization;
pub mod plans;
