pub mod companies;
pub mod forms;
pub mod job_posts;
pub mod uploads;
