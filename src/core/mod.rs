pub mod auth;
pub mod calendar;
pub mod detail;
pub mod home;
pub mod log;
pub mod pipeline;
pub mod poller;
