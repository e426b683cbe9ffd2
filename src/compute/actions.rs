//! Actions disrupting compute instances and instance pools.

use super::{get_instance_pools, get_instances, Instance, InstancePool};
use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{apply_filters, pick_random, resolve_targets, FilterSet};
use serde_json::Value;

/// Stop a given compute instance. `force` issues a hard STOP instead of a
/// graceful SOFTSTOP.
pub async fn stop_instance(client: &OciClient, instance_id: &str, force: bool) -> Result<Value> {
    let action = if force { "STOP" } else { "SOFTSTOP" };
    let url = client.core_url(
        &format!("instances/{}", instance_id),
        &[("action", action)],
    );
    client.post(&url, None).await
}

/// Stop a random compute instance within a given compartment. When filters
/// are provided, the candidate set is reduced to the instances matching
/// them.
pub async fn stop_random_instance(
    client: &OciClient,
    filters: Option<&FilterSet>,
    compartment_id: Option<&str>,
    force: bool,
) -> Result<Value> {
    let compartment_id = client.compartment(compartment_id)?;

    let instances = get_instances(client, &compartment_id).await?;
    let candidates = apply_filters(instances, filters)?;
    let target = pick_random(&candidates)?;

    tracing::debug!(
        "Picked instance '{}' from compartment '{}' to be stopped",
        target.id,
        compartment_id
    );
    stop_instance(client, &target.id, force).await
}

/// Stop the given compute instances. Without an explicit identifier list,
/// every instance in the compartment matching the filter criteria is
/// stopped.
pub async fn stop_instances_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    instance_ids: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    let compartment_id = client.compartment(compartment_id)?;

    if instance_ids.as_ref().map_or(true, |ids| ids.is_empty()) {
        tracing::warn!(
            "Going to stop all instances in compartment '{}' matching the filter criteria",
            compartment_id
        );
    }
    let targets = resolve_targets(
        instance_ids,
        filters,
        || get_instances(client, &compartment_id),
        |instance: &Instance| instance.id.clone(),
    )
    .await?;

    let mut responses = Vec::with_capacity(targets.len());
    for instance_id in &targets {
        tracing::debug!(
            "Stopping instance '{}' in compartment '{}'",
            instance_id,
            compartment_id
        );
        responses.push(stop_instance(client, instance_id, false).await?);
    }

    Ok(responses)
}

/// The disruptive operations an instance pool supports as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOperation {
    Start,
    Stop,
    Terminate,
    Reset,
    SoftReset,
}

impl PoolOperation {
    fn verb(self) -> &'static str {
        match self {
            PoolOperation::Start => "start",
            PoolOperation::Stop => "stop",
            PoolOperation::Terminate => "terminate",
            PoolOperation::Reset => "reset",
            PoolOperation::SoftReset => "softreset",
        }
    }
}

async fn instance_pool_operation(
    client: &OciClient,
    pool_id: &str,
    operation: PoolOperation,
) -> Result<Value> {
    match operation {
        // Termination is a delete of the pool resource itself.
        PoolOperation::Terminate => {
            let url = client.core_url(&format!("instancePools/{}", pool_id), &[]);
            client.delete(&url).await
        }
        _ => {
            let url = client.core_url(
                &format!("instancePools/{}/actions/{}", pool_id, operation.verb()),
                &[],
            );
            client.post(&url, None).await
        }
    }
}

async fn instance_pool_bulk(
    client: &OciClient,
    operation: PoolOperation,
    filters: Option<&FilterSet>,
    pool_ids: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    let compartment_id = client.compartment(compartment_id)?;

    if pool_ids.as_ref().map_or(true, |ids| ids.is_empty()) {
        tracing::warn!(
            "Going to {} all instance pools in compartment '{}' matching the filter criteria",
            operation.verb(),
            compartment_id
        );
    }
    let targets = resolve_targets(
        pool_ids,
        filters,
        || get_instance_pools(client, &compartment_id),
        |pool: &InstancePool| pool.id.clone(),
    )
    .await?;

    // Unlike the simple per-id loop this accumulates every response, so a
    // partially applied bulk operation is visible to the caller.
    let mut responses = Vec::with_capacity(targets.len());
    for pool_id in &targets {
        tracing::debug!(
            "Applying '{}' to instance pool '{}' in compartment '{}'",
            operation.verb(),
            pool_id,
            compartment_id
        );
        responses.push(instance_pool_operation(client, pool_id, operation).await?);
    }

    Ok(responses)
}

/// Start the given instance pool.
pub async fn start_instance_pool(client: &OciClient, instance_pool_id: &str) -> Result<Value> {
    instance_pool_operation(client, instance_pool_id, PoolOperation::Start).await
}

/// Stop the given instance pool.
pub async fn stop_instance_pool(client: &OciClient, instance_pool_id: &str) -> Result<Value> {
    instance_pool_operation(client, instance_pool_id, PoolOperation::Stop).await
}

/// Terminate the given instance pool.
pub async fn terminate_instance_pool(client: &OciClient, instance_pool_id: &str) -> Result<Value> {
    instance_pool_operation(client, instance_pool_id, PoolOperation::Terminate).await
}

/// Reset the given instance pool.
pub async fn reset_instance_pool(client: &OciClient, instance_pool_id: &str) -> Result<Value> {
    instance_pool_operation(client, instance_pool_id, PoolOperation::Reset).await
}

/// Soft-reset the given instance pool.
pub async fn softreset_instance_pool(client: &OciClient, instance_pool_id: &str) -> Result<Value> {
    instance_pool_operation(client, instance_pool_id, PoolOperation::SoftReset).await
}

/// Start every targeted instance pool in the compartment.
pub async fn start_all_instance_pools_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    instance_pool_ids: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    instance_pool_bulk(
        client,
        PoolOperation::Start,
        filters,
        instance_pool_ids,
        compartment_id,
    )
    .await
}

/// Stop every targeted instance pool in the compartment.
pub async fn stop_all_instance_pools_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    instance_pool_ids: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    instance_pool_bulk(
        client,
        PoolOperation::Stop,
        filters,
        instance_pool_ids,
        compartment_id,
    )
    .await
}

/// Terminate every targeted instance pool in the compartment.
pub async fn terminate_all_instance_pools_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    instance_pool_ids: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    instance_pool_bulk(
        client,
        PoolOperation::Terminate,
        filters,
        instance_pool_ids,
        compartment_id,
    )
    .await
}

/// Reset every targeted instance pool in the compartment.
pub async fn reset_all_instance_pools_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    instance_pool_ids: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    instance_pool_bulk(
        client,
        PoolOperation::Reset,
        filters,
        instance_pool_ids,
        compartment_id,
    )
    .await
}

/// Soft-reset every targeted instance pool in the compartment.
pub async fn softreset_all_instance_pools_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    instance_pool_ids: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    instance_pool_bulk(
        client,
        PoolOperation::SoftReset,
        filters,
        instance_pool_ids,
        compartment_id,
    )
    .await
}
