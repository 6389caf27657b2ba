pub mod dto;
pub mod landscape_service;
