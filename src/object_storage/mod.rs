//! Object storage resources: buckets and the objects stored in them.
//!
//! Buckets are listed by namespace and compartment; objects by namespace
//! and bucket. Object listings use a `nextStartWith` cursor in the response
//! body instead of the usual pagination header.

pub mod actions;
pub mod probes;

use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{fetch_all, Filterable, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use urlencoding::encode;

/// Legal filter attributes for buckets.
pub const BUCKET_ATTRIBUTES: &[&str] = &[
    "compartment_id",
    "created_by",
    "etag",
    "name",
    "namespace",
    "time_created",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub name: String,
    pub namespace: Option<String>,
    pub compartment_id: Option<String>,
    pub created_by: Option<String>,
    pub etag: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for Bucket {
    const KIND: &'static str = "buckets";

    fn attribute_names() -> &'static [&'static str] {
        BUCKET_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "created_by" => self.created_by.clone().map(Value::String),
            "etag" => self.etag.clone().map(Value::String),
            "name" => Some(Value::String(self.name.clone())),
            "namespace" => self.namespace.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            _ => None,
        }
    }
}

/// Legal filter attributes for stored objects.
pub const OBJECT_ATTRIBUTES: &[&str] = &[
    "etag",
    "md5",
    "name",
    "size",
    "storage_tier",
    "time_created",
];

/// A stored object summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    pub name: String,
    pub size: Option<u64>,
    pub md5: Option<String>,
    pub etag: Option<String>,
    pub storage_tier: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for StoredObject {
    const KIND: &'static str = "objects";

    fn attribute_names() -> &'static [&'static str] {
        OBJECT_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "etag" => self.etag.clone().map(Value::String),
            "md5" => self.md5.clone().map(Value::String),
            "name" => Some(Value::String(self.name.clone())),
            "size" => self.size.map(|s| json!(s)),
            "storage_tier" => self.storage_tier.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            _ => None,
        }
    }
}

/// Object listing response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectListing {
    objects: Vec<StoredObject>,
    next_start_with: Option<String>,
}

/// Return a complete, unfiltered list of buckets in the compartment.
pub async fn get_buckets(
    client: &OciClient,
    namespace: &str,
    compartment_id: &str,
) -> Result<Vec<Bucket>> {
    fetch_all(|page| {
        client.get_page(
            client.object_storage_url(
                &format!("n/{}/b", encode(namespace)),
                &[("compartmentId", compartment_id)],
            ),
            page,
        )
    })
    .await
}

async fn list_objects_page(
    client: &OciClient,
    namespace: &str,
    bucket_name: &str,
    start: Option<String>,
) -> Result<Page<StoredObject>> {
    // Bucket names are operator-chosen; keep reserved characters literal.
    let path = format!("n/{}/b/{}/o", encode(namespace), encode(bucket_name));
    let fields = ("fields", "name,size,md5,etag,timeCreated,storageTier");
    let url = match &start {
        Some(cursor) => client.object_storage_url(&path, &[fields, ("start", cursor)]),
        None => client.object_storage_url(&path, &[fields]),
    };

    let (body, _) = client.get(&url).await?;
    let listing: ObjectListing = serde_json::from_value(body)?;
    Ok(Page {
        items: listing.objects,
        next_page: listing.next_start_with,
    })
}

/// Return a complete, unfiltered list of objects in the bucket.
pub async fn get_objects(
    client: &OciClient,
    namespace: &str,
    bucket_name: &str,
) -> Result<Vec<StoredObject>> {
    fetch_all(|start| list_objects_page(client, namespace, bucket_name, start)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_listing_carries_its_own_cursor() {
        let listing: ObjectListing = serde_json::from_value(json!({
            "objects": [
                {"name": "reports/2020-03.csv", "size": 1024},
                {"name": "reports/2020-04.csv", "size": 2048}
            ],
            "nextStartWith": "reports/2020-05.csv"
        }))
        .unwrap();
        assert_eq!(listing.objects.len(), 2);
        assert_eq!(
            listing.next_start_with.as_deref(),
            Some("reports/2020-05.csv")
        );
    }

    #[test]
    fn object_size_is_a_number_attribute() {
        let object = StoredObject {
            name: "a.txt".into(),
            size: Some(42),
            md5: None,
            etag: None,
            storage_tier: Some("Standard".into()),
            time_created: None,
        };
        assert_eq!(object.attribute("size"), Some(json!(42)));
        assert_eq!(object.attribute("md5"), None);
    }
}
