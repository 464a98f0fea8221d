pub mod employer;
pub mod shift;
pub mod site;
pub mod status;
