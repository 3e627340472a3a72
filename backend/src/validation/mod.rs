pub mod company;
pub mod job_post;
pub mod machinery;
pub mod merge;
