pub mod application_api_repository_trait;
pub mod application_entity;
pub mod application_fs_adapter;
pub mod application_repository;
