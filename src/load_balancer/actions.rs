//! Actions deleting load balancers and their components.
//!
//! Components are addressed by operator-chosen name, so every name segment
//! is percent-encoded before it enters the request path.

use crate::error::Result;
use crate::oci::OciClient;
use serde_json::Value;
use urlencoding::encode;

/// Delete a given backend server from a backend set.
pub async fn delete_backend_server(
    client: &OciClient,
    load_balancer_id: &str,
    backend_set_name: &str,
    backend_name: &str,
) -> Result<Value> {
    let url = client.lb_url(
        &format!(
            "loadBalancers/{}/backendSets/{}/backends/{}",
            load_balancer_id,
            encode(backend_set_name),
            encode(backend_name)
        ),
        &[],
    );
    client.delete(&url).await
}

/// Delete a given backend set.
pub async fn delete_backend_set(
    client: &OciClient,
    load_balancer_id: &str,
    backend_set_name: &str,
) -> Result<Value> {
    let url = client.lb_url(
        &format!(
            "loadBalancers/{}/backendSets/{}",
            load_balancer_id,
            encode(backend_set_name)
        ),
        &[],
    );
    client.delete(&url).await
}

/// Delete a given hostname from a load balancer.
pub async fn delete_hostname(
    client: &OciClient,
    load_balancer_id: &str,
    hostname_name: &str,
) -> Result<Value> {
    let url = client.lb_url(
        &format!(
            "loadBalancers/{}/hostnames/{}",
            load_balancer_id,
            encode(hostname_name)
        ),
        &[],
    );
    client.delete(&url).await
}

/// Delete a given listener from a load balancer.
pub async fn delete_listener(
    client: &OciClient,
    load_balancer_id: &str,
    listener_name: &str,
) -> Result<Value> {
    let url = client.lb_url(
        &format!(
            "loadBalancers/{}/listeners/{}",
            load_balancer_id,
            encode(listener_name)
        ),
        &[],
    );
    client.delete(&url).await
}

/// Delete a given load balancer.
pub async fn delete_load_balancer(client: &OciClient, load_balancer_id: &str) -> Result<Value> {
    let url = client.lb_url(&format!("loadBalancers/{}", load_balancer_id), &[]);
    let response = client.delete(&url).await?;
    tracing::debug!("Load balancer {} deleted", load_balancer_id);
    Ok(response)
}

/// Delete a given path route set.
pub async fn delete_path_route_set(
    client: &OciClient,
    load_balancer_id: &str,
    path_route_set_name: &str,
) -> Result<Value> {
    let url = client.lb_url(
        &format!(
            "loadBalancers/{}/pathRouteSets/{}",
            load_balancer_id,
            encode(path_route_set_name)
        ),
        &[],
    );
    client.delete(&url).await
}

/// Delete a given routing policy.
pub async fn delete_routing_policy(
    client: &OciClient,
    load_balancer_id: &str,
    routing_policy_name: &str,
) -> Result<Value> {
    let url = client.lb_url(
        &format!(
            "loadBalancers/{}/routingPolicies/{}",
            load_balancer_id,
            encode(routing_policy_name)
        ),
        &[],
    );
    client.delete(&url).await
}
