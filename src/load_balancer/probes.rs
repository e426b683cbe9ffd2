//! Read-only probes over load balancer resources.

use super::{get_backend_sets, get_load_balancers};
use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{apply_filters, FilterSet};

/// Return the number of load balancers in the compartment matching the
/// given filters.
pub async fn count_load_balancers(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let load_balancers = get_load_balancers(client, &compartment_id).await?;
    Ok(apply_filters(load_balancers, filters)?.len())
}

/// Return the number of backend sets behind the given load balancer
/// matching the given filters. The load balancer id falls back to the
/// profile default.
pub async fn count_backend_sets(
    client: &OciClient,
    filters: Option<&FilterSet>,
    load_balancer_id: Option<&str>,
) -> Result<usize> {
    let load_balancer_id = client.load_balancer(load_balancer_id)?;
    let backend_sets = get_backend_sets(client, &load_balancer_id).await?;
    Ok(apply_filters(backend_sets, filters)?.len())
}
