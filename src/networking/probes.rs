//! Read-only probes over virtual-network resources.

use super::{
    get_internet_gateways, get_nat_gateways, get_route_tables, get_service_gateways,
};
use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{apply_filters, FilterSet};

/// Return the number of route tables in the VCN matching the given filters.
pub async fn count_route_tables(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
    vcn_id: &str,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let route_tables = get_route_tables(client, &compartment_id, vcn_id).await?;
    Ok(apply_filters(route_tables, filters)?.len())
}

/// Return the number of NAT gateways in the VCN matching the given filters.
pub async fn count_nat_gateways(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
    vcn_id: &str,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let gateways = get_nat_gateways(client, &compartment_id, vcn_id).await?;
    Ok(apply_filters(gateways, filters)?.len())
}

/// Return the number of internet gateways in the VCN matching the given
/// filters.
pub async fn count_internet_gateways(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
    vcn_id: &str,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let gateways = get_internet_gateways(client, &compartment_id, vcn_id).await?;
    Ok(apply_filters(gateways, filters)?.len())
}

/// Return the number of service gateways in the VCN matching the given
/// filters.
pub async fn count_service_gateways(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
    vcn_id: &str,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let gateways = get_service_gateways(client, &compartment_id, vcn_id).await?;
    Ok(apply_filters(gateways, filters)?.len())
}
