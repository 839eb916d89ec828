mod admin;
mod auth;
mod collection;
mod config;
mod deduction;
mod event;

pub use admin::{
    AdminCategoryCommands, AdminCommands, AdminEventCommands, AdminsCommands, LogCommands,
};
pub use auth::{AuthCommands, LoginArgs};
pub use collection::CollectionCommands;
pub use config::ConfigCommands;
pub use deduction::DeductionCommands;
pub use event::EventCommands;
