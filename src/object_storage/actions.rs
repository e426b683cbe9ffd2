//! Actions deleting buckets and stored objects.

use super::{get_buckets, get_objects, Bucket, StoredObject};
use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{resolve_targets, FilterSet};
use serde_json::Value;
use urlencoding::encode;

/// Delete a given bucket.
pub async fn delete_bucket(
    client: &OciClient,
    namespace: &str,
    bucket_name: &str,
) -> Result<Value> {
    let url = client.object_storage_url(
        &format!("n/{}/b/{}", encode(namespace), encode(bucket_name)),
        &[],
    );
    client.delete(&url).await
}

/// Delete the given buckets. Without an explicit name list, every bucket in
/// the compartment matching the filter criteria is deleted.
pub async fn delete_buckets_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    namespace: &str,
    bucket_names: Option<Vec<String>>,
    compartment_id: Option<&str>,
) -> Result<Vec<Value>> {
    let compartment_id = client.compartment(compartment_id)?;

    if bucket_names.as_ref().map_or(true, |names| names.is_empty()) {
        tracing::warn!(
            "Going to delete all buckets in compartment '{}' matching the filter criteria",
            compartment_id
        );
    }
    let targets = resolve_targets(
        bucket_names,
        filters,
        || get_buckets(client, namespace, &compartment_id),
        |bucket: &Bucket| bucket.name.clone(),
    )
    .await?;

    let mut responses = Vec::with_capacity(targets.len());
    for bucket_name in &targets {
        tracing::debug!(
            "Deleting bucket '{}' from compartment '{}'",
            bucket_name,
            compartment_id
        );
        responses.push(delete_bucket(client, namespace, bucket_name).await?);
    }

    Ok(responses)
}

/// Delete a given object.
pub async fn delete_object(
    client: &OciClient,
    namespace: &str,
    bucket_name: &str,
    object_name: &str,
) -> Result<Value> {
    // Object names routinely carry '/', '#', and spaces; encode every
    // segment so the request reaches the named object and nothing else.
    let url = client.object_storage_url(
        &format!(
            "n/{}/b/{}/o/{}",
            encode(namespace),
            encode(bucket_name),
            encode(object_name)
        ),
        &[],
    );
    client.delete(&url).await
}

/// Delete the given objects. Without an explicit name list, every object in
/// the bucket matching the filter criteria is deleted.
pub async fn delete_objects_in_compartment(
    client: &OciClient,
    filters: Option<&FilterSet>,
    namespace: &str,
    bucket_name: &str,
    object_names: Option<Vec<String>>,
) -> Result<Vec<Value>> {
    if object_names.as_ref().map_or(true, |names| names.is_empty()) {
        tracing::warn!(
            "Going to delete all objects in bucket '{}' matching the filter criteria",
            bucket_name
        );
    }
    let targets = resolve_targets(
        object_names,
        filters,
        || get_objects(client, namespace, bucket_name),
        |object: &StoredObject| object.name.clone(),
    )
    .await?;

    let mut responses = Vec::with_capacity(targets.len());
    for object_name in &targets {
        tracing::debug!(
            "Deleting object '{}' from bucket '{}'",
            object_name,
            bucket_name
        );
        responses.push(delete_object(client, namespace, bucket_name, object_name).await?);
    }

    Ok(responses)
}
