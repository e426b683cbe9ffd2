//! Virtual-network resources: route tables and NAT/internet/service
//! gateways. All four kinds are scoped by compartment and VCN.

pub mod actions;
pub mod probes;

use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{fetch_all, Filterable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Legal filter attributes for route tables.
pub const ROUTE_TABLE_ATTRIBUTES: &[&str] = &[
    "compartment_id",
    "display_name",
    "id",
    "lifecycle_state",
    "time_created",
    "vcn_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTable {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub vcn_id: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for RouteTable {
    const KIND: &'static str = "route tables";

    fn attribute_names() -> &'static [&'static str] {
        ROUTE_TABLE_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "display_name" => self.display_name.clone().map(Value::String),
            "id" => Some(Value::String(self.id.clone())),
            "lifecycle_state" => self.lifecycle_state.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            "vcn_id" => self.vcn_id.clone().map(Value::String),
            _ => None,
        }
    }
}

/// Legal filter attributes for NAT gateways.
pub const NAT_GATEWAY_ATTRIBUTES: &[&str] = &[
    "block_traffic",
    "compartment_id",
    "display_name",
    "id",
    "lifecycle_state",
    "nat_ip",
    "time_created",
    "vcn_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NatGateway {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub vcn_id: Option<String>,
    pub nat_ip: Option<String>,
    pub block_traffic: Option<bool>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for NatGateway {
    const KIND: &'static str = "NAT gateways";

    fn attribute_names() -> &'static [&'static str] {
        NAT_GATEWAY_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "block_traffic" => self.block_traffic.map(Value::Bool),
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "display_name" => self.display_name.clone().map(Value::String),
            "id" => Some(Value::String(self.id.clone())),
            "lifecycle_state" => self.lifecycle_state.clone().map(Value::String),
            "nat_ip" => self.nat_ip.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            "vcn_id" => self.vcn_id.clone().map(Value::String),
            _ => None,
        }
    }
}

/// Legal filter attributes for internet gateways.
pub const INTERNET_GATEWAY_ATTRIBUTES: &[&str] = &[
    "compartment_id",
    "display_name",
    "id",
    "is_enabled",
    "lifecycle_state",
    "time_created",
    "vcn_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternetGateway {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub vcn_id: Option<String>,
    pub is_enabled: Option<bool>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for InternetGateway {
    const KIND: &'static str = "internet gateways";

    fn attribute_names() -> &'static [&'static str] {
        INTERNET_GATEWAY_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "display_name" => self.display_name.clone().map(Value::String),
            "id" => Some(Value::String(self.id.clone())),
            "is_enabled" => self.is_enabled.map(Value::Bool),
            "lifecycle_state" => self.lifecycle_state.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            "vcn_id" => self.vcn_id.clone().map(Value::String),
            _ => None,
        }
    }
}

/// Legal filter attributes for service gateways.
pub const SERVICE_GATEWAY_ATTRIBUTES: &[&str] = &[
    "block_traffic",
    "compartment_id",
    "display_name",
    "id",
    "lifecycle_state",
    "time_created",
    "vcn_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceGateway {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub vcn_id: Option<String>,
    pub block_traffic: Option<bool>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for ServiceGateway {
    const KIND: &'static str = "service gateways";

    fn attribute_names() -> &'static [&'static str] {
        SERVICE_GATEWAY_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "block_traffic" => self.block_traffic.map(Value::Bool),
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "display_name" => self.display_name.clone().map(Value::String),
            "id" => Some(Value::String(self.id.clone())),
            "lifecycle_state" => self.lifecycle_state.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            "vcn_id" => self.vcn_id.clone().map(Value::String),
            _ => None,
        }
    }
}

async fn list_vcn_scoped<T: serde::de::DeserializeOwned>(
    client: &OciClient,
    path: &str,
    compartment_id: &str,
    vcn_id: &str,
) -> Result<Vec<T>> {
    fetch_all(|page| {
        client.get_page(
            client.core_url(
                path,
                &[("compartmentId", compartment_id), ("vcnId", vcn_id)],
            ),
            page,
        )
    })
    .await
}

/// Return a complete, unfiltered list of route tables of a VCN in the
/// compartment.
pub async fn get_route_tables(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
) -> Result<Vec<RouteTable>> {
    list_vcn_scoped(client, "routeTables", compartment_id, vcn_id).await
}

/// Return a complete, unfiltered list of NAT gateways of a VCN in the
/// compartment.
pub async fn get_nat_gateways(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
) -> Result<Vec<NatGateway>> {
    list_vcn_scoped(client, "natGateways", compartment_id, vcn_id).await
}

/// Return a complete, unfiltered list of internet gateways of a VCN in the
/// compartment.
pub async fn get_internet_gateways(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
) -> Result<Vec<InternetGateway>> {
    list_vcn_scoped(client, "internetGateways", compartment_id, vcn_id).await
}

/// Return a complete, unfiltered list of service gateways of a VCN in the
/// compartment.
pub async fn get_service_gateways(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
) -> Result<Vec<ServiceGateway>> {
    list_vcn_scoped(client, "serviceGateways", compartment_id, vcn_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nat_gateway_block_traffic_is_a_bool_attribute() {
        let gateway: NatGateway = serde_json::from_value(json!({
            "id": "ocid1.natgateway.oc1..aaaa",
            "displayName": "nat-0",
            "lifecycleState": "AVAILABLE",
            "vcnId": "ocid1.vcn.oc1..bbbb",
            "natIp": "129.146.1.1",
            "blockTraffic": false
        }))
        .unwrap();

        assert_eq!(gateway.attribute("block_traffic"), Some(Value::Bool(false)));
        assert_eq!(
            gateway.attribute("nat_ip"),
            Some(Value::String("129.146.1.1".into()))
        );
    }
}
