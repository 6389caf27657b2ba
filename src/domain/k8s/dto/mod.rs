pub mod create_resource_request;
