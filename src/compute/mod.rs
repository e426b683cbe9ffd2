//! Compute resources: instances and instance pools.

pub mod actions;
pub mod probes;

use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{fetch_all, Filterable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Legal filter attributes for compute instances.
pub const INSTANCE_ATTRIBUTES: &[&str] = &[
    "availability_domain",
    "compartment_id",
    "display_name",
    "fault_domain",
    "id",
    "image_id",
    "launch_mode",
    "lifecycle_state",
    "region",
    "shape",
    "time_created",
];

/// A compute instance as returned by the control plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub availability_domain: Option<String>,
    pub compartment_id: Option<String>,
    pub fault_domain: Option<String>,
    pub image_id: Option<String>,
    pub launch_mode: Option<String>,
    pub region: Option<String>,
    pub shape: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for Instance {
    const KIND: &'static str = "instances";

    fn attribute_names() -> &'static [&'static str] {
        INSTANCE_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "availability_domain" => self.availability_domain.clone().map(Value::String),
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "display_name" => self.display_name.clone().map(Value::String),
            "fault_domain" => self.fault_domain.clone().map(Value::String),
            "id" => Some(Value::String(self.id.clone())),
            "image_id" => self.image_id.clone().map(Value::String),
            "launch_mode" => self.launch_mode.clone().map(Value::String),
            "lifecycle_state" => self.lifecycle_state.clone().map(Value::String),
            "region" => self.region.clone().map(Value::String),
            "shape" => self.shape.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            _ => None,
        }
    }
}

/// Legal filter attributes for instance pools.
pub const INSTANCE_POOL_ATTRIBUTES: &[&str] = &[
    "compartment_id",
    "display_name",
    "id",
    "instance_configuration_id",
    "lifecycle_state",
    "size",
    "time_created",
];

/// A managed instance pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePool {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub instance_configuration_id: Option<String>,
    pub size: Option<i64>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for InstancePool {
    const KIND: &'static str = "instance pools";

    fn attribute_names() -> &'static [&'static str] {
        INSTANCE_POOL_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "display_name" => self.display_name.clone().map(Value::String),
            "id" => Some(Value::String(self.id.clone())),
            "instance_configuration_id" => {
                self.instance_configuration_id.clone().map(Value::String)
            }
            "lifecycle_state" => self.lifecycle_state.clone().map(Value::String),
            "size" => self.size.map(|s| json!(s)),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            _ => None,
        }
    }
}

/// Return a complete, unfiltered list of instances in the compartment.
pub async fn get_instances(client: &OciClient, compartment_id: &str) -> Result<Vec<Instance>> {
    fetch_all(|page| {
        client.get_page(
            client.core_url("instances", &[("compartmentId", compartment_id)]),
            page,
        )
    })
    .await
}

/// Return a complete, unfiltered list of instance pools in the compartment.
pub async fn get_instance_pools(
    client: &OciClient,
    compartment_id: &str,
) -> Result<Vec<InstancePool>> {
    fetch_all(|page| {
        client.get_page(
            client.core_url("instancePools", &[("compartmentId", compartment_id)]),
            page,
        )
    })
    .await
}
