//! Read-only probes over compute resources.

use super::{get_instance_pools, get_instances};
use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{apply_filters, FilterSet};

/// Return the number of instances in the compartment matching the given
/// filters.
pub async fn count_instances(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let instances = get_instances(client, &compartment_id).await?;
    Ok(apply_filters(instances, filters)?.len())
}

/// Return the number of instance pools in the compartment matching the
/// given filters.
pub async fn count_instance_pools(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let pools = get_instance_pools(client, &compartment_id).await?;
    Ok(apply_filters(pools, filters)?.len())
}
