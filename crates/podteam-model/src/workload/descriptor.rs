use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::{Extra, Nullable, StringMap, WorkloadIdentity};

/// Pod as seen by the admission webhook.
///
/// Only the fields the classifier reads or the mutator writes are typed.
/// Everything else is captured in `extra` at every level, and typed fields
/// keep an explicit `null` apart from an absent key, so a decoded descriptor
/// serializes back to the document it came from and a diff against the
/// original payload only shows what was actually changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadDescriptor {
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub api_version: Nullable<String>,

    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub kind: Nullable<String>,

    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub metadata: Nullable<ObjectMeta>,

    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub spec: Nullable<PodSpec>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Subset of Kubernetes `ObjectMeta`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,

    /// Name prefix used by controllers; `name` is usually empty at admission time when set.
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub generate_name: Nullable<String>,

    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub namespace: Nullable<String>,

    /// Free-form metadata. Build provenance lives here.
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub annotations: Nullable<StringMap>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Subset of Kubernetes `PodSpec`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub containers: Nullable<Vec<Container>>,

    /// Scheduling hints: the pod only fits nodes carrying all of these labels.
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub node_selector: Nullable<StringMap>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Subset of Kubernetes `Container`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub name: Nullable<String>,

    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image: Nullable<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Container {
    /// Container with only an image reference set.
    pub fn with_image(image: impl Into<String>) -> Self {
        Self {
            image: Some(Some(image.into())),
            ..Default::default()
        }
    }

    /// Image reference, or an empty string when unset.
    pub fn image(&self) -> &str {
        present(&self.image).map(String::as_str).unwrap_or_default()
    }
}

impl WorkloadDescriptor {
    /// Declared `kind`, if any.
    pub fn kind(&self) -> Option<&str> {
        present(&self.kind).map(String::as_str)
    }

    /// Declared `apiVersion`, if any.
    pub fn api_version(&self) -> Option<&str> {
        present(&self.api_version).map(String::as_str)
    }

    /// Namespace and name, for log lines only.
    pub fn identity(&self) -> WorkloadIdentity {
        let meta = present(&self.metadata);
        let name = meta
            .and_then(|m| present(&m.name))
            .filter(|n| !n.is_empty())
            .or_else(|| meta.and_then(|m| present(&m.generate_name)));

        WorkloadIdentity::new(
            meta.and_then(|m| present(&m.namespace)).map(String::as_str).unwrap_or_default(),
            name.map(String::as_str).unwrap_or_default(),
        )
    }

    /// Value of an annotation, if present.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        present(&self.metadata)
            .and_then(|m| present(&m.annotations))
            .and_then(|a| a.get(key))
    }

    /// Insert or overwrite an annotation, creating metadata as needed.
    pub fn set_annotation<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let meta = present_mut(&mut self.metadata);
        present_mut(&mut meta.annotations).insert(key, value)
    }

    /// Containers in declaration order; empty when the spec has none.
    pub fn containers(&self) -> &[Container] {
        present(&self.spec)
            .and_then(|s| present(&s.containers))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Append a container, creating the spec as needed.
    pub fn push_container(&mut self, container: Container) {
        let spec = present_mut(&mut self.spec);
        present_mut(&mut spec.containers).push(container);
    }

    /// Current value of a node selector entry.
    pub fn scheduling_hint(&self, key: &str) -> Option<&str> {
        present(&self.spec)
            .and_then(|s| present(&s.node_selector))
            .and_then(|n| n.get(key))
    }

    /// Write a node selector entry, returning the previous value.
    ///
    /// The spec and the node selector map are created when absent or `null`, so this never
    /// fails regardless of what the caller initialized.
    pub fn set_scheduling_hint<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let spec = present_mut(&mut self.spec);
        present_mut(&mut spec.node_selector).insert(key, value)
    }
}

fn present<T>(field: &Nullable<T>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}

// Absent and `null` both become a default value.
fn present_mut<T: Default>(field: &mut Nullable<T>) -> &mut T {
    field.get_or_insert_with(|| None).get_or_insert_with(T::default)
}
