//! Manifests for the resources this service creates.
//!
//! Deployments, their pods and the matching service all carry
//! `application=<name>`; replica sets inherit it from the pod template, which is
//! what the landscape delete matches on.

use std::collections::BTreeMap;

use crate::core::client::kube_resources::{
    Container, ContainerPort, Deployment, DeploymentSpec, EnvVar, IntOrString, LabelSelector,
    ObjectMeta, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use crate::domain::k8s::dto::create_resource_request::CreateResourceRequest;

pub const APPLICATION_LABEL: &str = "application";

fn application_labels(name: Option<&str>) -> Option<BTreeMap<String, String>> {
    name.map(|n| BTreeMap::from([(APPLICATION_LABEL.to_string(), n.to_string())]))
}

pub fn build_deployment(request: &CreateResourceRequest, container_port: i32) -> Deployment {
    let name = request.name.as_deref();
    let labels = application_labels(name);

    let env: Vec<EnvVar> = request
        .env_pairs()
        .into_iter()
        .map(|(name, value)| EnvVar {
            name,
            value,
            ..EnvVar::default()
        })
        .collect();

    let container = Container {
        name: name.unwrap_or_default().to_string(),
        image: request.image.clone(),
        env: if env.is_empty() { None } else { Some(env) },
        ports: Some(vec![ContainerPort {
            container_port,
            ..ContainerPort::default()
        }]),
        ..Container::default()
    };

    Deployment {
        metadata: ObjectMeta {
            name: request.name.clone(),
            labels: labels.clone(),
            ..ObjectMeta::default()
        },
        spec: Some(DeploymentSpec {
            replicas: request.replicas,
            selector: LabelSelector {
                match_labels: labels.clone(),
                ..LabelSelector::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels,
                    ..ObjectMeta::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..PodSpec::default()
                }),
            },
            ..DeploymentSpec::default()
        }),
        ..Deployment::default()
    }
}

/// NodePort service in front of the deployment of the same name.
pub fn build_service(name: Option<&str>, port: i32) -> Service {
    let labels = application_labels(name);

    Service {
        metadata: ObjectMeta {
            name: name.map(str::to_string),
            labels: labels.clone(),
            ..ObjectMeta::default()
        },
        spec: Some(ServiceSpec {
            type_: Some("NodePort".to_string()),
            selector: labels,
            ports: Some(vec![ServicePort {
                name: Some("http".to_string()),
                protocol: Some("TCP".to_string()),
                port,
                target_port: Some(IntOrString::Int(port)),
                ..ServicePort::default()
            }]),
            ..ServiceSpec::default()
        }),
        ..Service::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_is_labelled_and_selects_its_pods() {
        let request = CreateResourceRequest::from_body(
            br#"{"name":"app1","replicas":3,"image":"nginx","env":[{"name":"A","value":"1"}]}"#,
        );
        let deployment = build_deployment(&request, 8080);

        let expected = application_labels(Some("app1"));
        assert_eq!(deployment.metadata.name.as_deref(), Some("app1"));
        assert_eq!(deployment.metadata.labels, expected);

        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(3));
        assert_eq!(spec.selector.match_labels, expected);
        assert_eq!(spec.template.metadata.unwrap().labels, expected);

        let pod_spec = spec.template.spec.unwrap();
        let container = &pod_spec.containers[0];
        assert_eq!(container.name, "app1");
        assert_eq!(container.image.as_deref(), Some("nginx"));
        let env = container.env.as_ref().unwrap();
        assert_eq!(env[0].name, "A");
        assert_eq!(env[0].value.as_deref(), Some("1"));
    }

    #[test]
    fn empty_request_is_forwarded_without_filling_in_gaps() {
        let deployment = build_deployment(&CreateResourceRequest::default(), 8080);
        assert!(deployment.metadata.name.is_none());
        assert!(deployment.metadata.labels.is_none());
        assert!(deployment.spec.unwrap().replicas.is_none());
    }

    #[test]
    fn service_is_node_port_on_the_application_label() {
        let service = build_service(Some("app1"), 9090);
        let spec = service.spec.unwrap();
        assert_eq!(spec.type_.as_deref(), Some("NodePort"));
        assert_eq!(spec.selector, application_labels(Some("app1")));

        let ports = spec.ports.unwrap();
        let port = &ports[0];
        assert_eq!(port.port, 9090);
        assert_eq!(port.target_port, Some(IntOrString::Int(9090)));
        assert!(port.node_port.is_none());
    }
}
