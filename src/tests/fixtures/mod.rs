pub mod app;
pub mod logs;
