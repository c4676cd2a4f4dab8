//! Helper functions for building the pods an Application asks for.

use cluster_client::ObjectKey;
use crds::Application;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Name of the pod for replica `index` of an Application
pub fn pod_name(app_name: &str, index: u32) -> String {
    format!("{app_name}-{index}")
}

/// Pod for replica `index`, carrying the Application's labels and template spec
///
/// No owner reference is set; deleting the Application leaves its pods behind.
pub fn build_pod(app: &Application, key: &ObjectKey, index: u32) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(pod_name(&key.name, index)),
            namespace: Some(key.namespace.clone()),
            labels: app.metadata.labels.clone(),
            ..Default::default()
        },
        spec: app.spec.template.spec.clone(),
        ..Default::default()
    }
}

/// Pods for replicas `0..replicas`, in index order
pub fn desired_pods<'a>(app: &'a Application, key: &'a ObjectKey) -> impl Iterator<Item = Pod> + 'a {
    (0..app.replica_count()).map(move |index| build_pod(app, key, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_application;

    #[test]
    fn test_pod_name() {
        assert_eq!(pod_name("web", 0), "web-0");
        assert_eq!(pod_name("web", 12), "web-12");
    }

    #[test]
    fn test_build_pod_copies_labels_and_spec() {
        let app = create_test_application("web", "ns1", 3, &[("app", "web"), ("tier", "frontend")]);
        let key = ObjectKey::new("ns1", "web");

        let pod = build_pod(&app, &key, 2);

        assert_eq!(pod.metadata.name.as_deref(), Some("web-2"));
        assert_eq!(pod.metadata.namespace.as_deref(), Some("ns1"));
        assert_eq!(pod.metadata.labels, app.metadata.labels);
        assert_eq!(pod.spec, app.spec.template.spec);
        assert!(pod.metadata.owner_references.is_none());
        assert!(pod.status.is_none());
    }

    #[test]
    fn test_build_pod_without_labels() {
        let app = create_test_application("web", "ns1", 1, &[]);
        let pod = build_pod(&app, &ObjectKey::new("ns1", "web"), 0);
        assert!(pod.metadata.labels.is_none());
    }

    #[test]
    fn test_template_metadata_not_copied() {
        let mut app = create_test_application("web", "ns1", 1, &[("app", "web")]);
        app.spec.template.metadata = Some(ObjectMeta {
            labels: Some([("from".to_string(), "template".to_string())].into()),
            ..Default::default()
        });

        let pod = build_pod(&app, &ObjectKey::new("ns1", "web"), 0);
        assert_eq!(pod.metadata.labels, app.metadata.labels);
    }

    #[test]
    fn test_desired_pods_order() {
        let app = create_test_application("web", "ns1", 4, &[]);
        let key = ObjectKey::new("ns1", "web");

        let names: Vec<_> = desired_pods(&app, &key)
            .filter_map(|pod| pod.metadata.name)
            .collect();
        assert_eq!(names, vec!["web-0", "web-1", "web-2", "web-3"]);
    }

    #[test]
    fn test_desired_pods_zero_replicas() {
        let app = create_test_application("web", "ns1", 0, &[]);
        assert_eq!(desired_pods(&app, &ObjectKey::new("ns1", "web")).count(), 0);
    }
}
