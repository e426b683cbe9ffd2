//! Read-only probes over object storage resources.

use super::{get_buckets, get_objects};
use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{apply_filters, FilterSet};

/// Return the number of buckets in the compartment matching the given
/// filters.
pub async fn count_buckets(
    client: &OciClient,
    filters: Option<&FilterSet>,
    namespace: &str,
    compartment_id: Option<&str>,
) -> Result<usize> {
    let compartment_id = client.compartment(compartment_id)?;
    let buckets = get_buckets(client, namespace, &compartment_id).await?;
    Ok(apply_filters(buckets, filters)?.len())
}

/// Return the number of objects in the bucket matching the given filters.
pub async fn count_objects(
    client: &OciClient,
    filters: Option<&FilterSet>,
    namespace: &str,
    bucket_name: &str,
) -> Result<usize> {
    let objects = get_objects(client, namespace, bucket_name).await?;
    Ok(apply_filters(objects, filters)?.len())
}
