pub mod company;
pub mod job_post;
pub mod location;
pub mod machinery;
pub mod pagination;
pub mod service;
pub mod unit_type;
pub mod validation;
