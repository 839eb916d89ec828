pub mod admin;
pub mod auth;
pub mod collection;
pub mod config;
pub mod dashboard;
pub mod deduction;
pub mod dispatch;
pub mod event;
pub mod shared;
