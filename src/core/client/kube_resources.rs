/// Re-export the Kubernetes resource types this service works with from k8s-openapi
/// so the rest of the crate has a single import path for them.

pub use k8s_openapi::api::core::v1::{
    Container,
    ContainerPort,
    EnvVar,
    PodSpec,
    PodTemplateSpec,
    Service,
    ServicePort,
    ServiceSpec,
};

pub use k8s_openapi::api::apps::v1::{
    Deployment,
    DeploymentSpec,
    ReplicaSet,
};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    LabelSelector,
    ObjectMeta,
};

pub use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
