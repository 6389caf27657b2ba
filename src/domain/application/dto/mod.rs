pub mod application_descriptor;
