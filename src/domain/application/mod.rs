pub mod application_hooks;
pub mod dto;
