//! Actions deleting virtual-network constructs.
//!
//! Each kind supports deletion by explicit id or by filter search: the VCN
//! is listed, the filter set applied, and the first match deleted.

use super::{
    get_internet_gateways, get_nat_gateways, get_route_tables, get_service_gateways,
};
use crate::error::{ActivityError, Result};
use crate::oci::OciClient;
use crate::pipeline::{filter_resources, FilterSet, Filterable};
use serde_json::Value;
use std::future::Future;

/// Search a VCN for the first resource matching the filters and delete it.
async fn delete_first_match<T, F, Fut>(
    client: &OciClient,
    filters: &FilterSet,
    discover: F,
    delete_path: impl Fn(&T) -> String,
) -> Result<Value>
where
    T: Filterable + Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let unfiltered = discover().await?;
    let filtered = filter_resources(&unfiltered, filters)?;

    let Some(target) = filtered.first() else {
        return Err(ActivityError::NoMatch(T::KIND));
    };

    let url = client.core_url(&delete_path(target), &[]);
    let response = client.delete(&url).await?;
    tracing::debug!("Deleted one of the {} matching the filters", T::KIND);
    Ok(response)
}

/// Delete a given route table using its id.
pub async fn delete_route_table_by_id(client: &OciClient, rt_id: &str) -> Result<Value> {
    let url = client.core_url(&format!("routeTables/{}", rt_id), &[]);
    let response = client.delete(&url).await?;
    tracing::debug!("Route table {} deleted", rt_id);
    Ok(response)
}

/// Search a VCN for a route table using the given filters and delete it.
pub async fn delete_route_table_by_filters(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
    filters: &FilterSet,
) -> Result<Value> {
    delete_first_match(
        client,
        filters,
        || get_route_tables(client, compartment_id, vcn_id),
        |rt: &super::RouteTable| format!("routeTables/{}", rt.id),
    )
    .await
}

/// Delete a given NAT gateway using its id.
pub async fn delete_nat_gateway_by_id(client: &OciClient, nw_id: &str) -> Result<Value> {
    let url = client.core_url(&format!("natGateways/{}", nw_id), &[]);
    let response = client.delete(&url).await?;
    tracing::debug!("NAT gateway {} deleted", nw_id);
    Ok(response)
}

/// Search a VCN for a NAT gateway using the given filters and delete it.
pub async fn delete_nat_gateway_by_filters(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
    filters: &FilterSet,
) -> Result<Value> {
    delete_first_match(
        client,
        filters,
        || get_nat_gateways(client, compartment_id, vcn_id),
        |gw: &super::NatGateway| format!("natGateways/{}", gw.id),
    )
    .await
}

/// Delete a given internet gateway using its id.
pub async fn delete_internet_gateway_by_id(client: &OciClient, ig_id: &str) -> Result<Value> {
    let url = client.core_url(&format!("internetGateways/{}", ig_id), &[]);
    let response = client.delete(&url).await?;
    tracing::debug!("Internet gateway {} deleted", ig_id);
    Ok(response)
}

/// Search a VCN for an internet gateway using the given filters and delete
/// it.
pub async fn delete_internet_gateway_by_filters(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
    filters: &FilterSet,
) -> Result<Value> {
    delete_first_match(
        client,
        filters,
        || get_internet_gateways(client, compartment_id, vcn_id),
        |gw: &super::InternetGateway| format!("internetGateways/{}", gw.id),
    )
    .await
}

/// Delete a given service gateway using its id.
pub async fn delete_service_gateway_by_id(client: &OciClient, sg_id: &str) -> Result<Value> {
    let url = client.core_url(&format!("serviceGateways/{}", sg_id), &[]);
    let response = client.delete(&url).await?;
    tracing::debug!("Service gateway {} deleted", sg_id);
    Ok(response)
}

/// Search a VCN for a service gateway using the given filters and delete
/// it.
pub async fn delete_service_gateway_by_filters(
    client: &OciClient,
    compartment_id: &str,
    vcn_id: &str,
    filters: &FilterSet,
) -> Result<Value> {
    delete_first_match(
        client,
        filters,
        || get_service_gateways(client, compartment_id, vcn_id),
        |gw: &super::ServiceGateway| format!("serviceGateways/{}", gw.id),
    )
    .await
}
