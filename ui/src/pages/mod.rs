//! Top-level pages, one per route

pub mod about;
pub mod chat;
pub mod contact;
pub mod home;
pub mod login;
pub mod status;
