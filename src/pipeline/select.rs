//! Selector/consumer stage.
//!
//! Downstream operations consume a filtered collection in one of three ways:
//! counting it (probes call `len` directly), picking a single target
//! uniformly at random, or resolving a bulk target list. Destruction itself
//! happens per resource id in the action functions, never here.

use super::filter::{apply_filters, FilterSet, Filterable};
use crate::error::{ActivityError, Result};
use rand::Rng;
use std::future::Future;

/// Pick one resource uniformly at random.
///
/// An empty candidate collection fails before the RNG is consulted; that is
/// a defined precondition, not an implementation accident.
pub fn pick_random<T: Filterable>(resources: &[T]) -> Result<&T> {
    if resources.is_empty() {
        return Err(ActivityError::NoMatch(T::KIND));
    }
    let index = rand::thread_rng().gen_range(0..resources.len());
    Ok(&resources[index])
}

/// Resolve the identifier list a bulk operation should act on.
///
/// An explicit, non-empty identifier list bypasses discovery entirely.
/// Otherwise the collection is discovered and filtered, and an empty match
/// is a terminal error: a bulk disruption with nothing to disrupt means the
/// operator's filters found nothing.
pub async fn resolve_targets<T, F, Fut>(
    explicit: Option<Vec<String>>,
    filters: Option<&FilterSet>,
    discover: F,
    id_of: impl Fn(&T) -> String,
) -> Result<Vec<String>>
where
    T: Filterable + Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if let Some(ids) = explicit {
        if !ids.is_empty() {
            return Ok(ids);
        }
    }

    let discovered = discover().await?;
    let matched = apply_filters(discovered, filters)?;
    if matched.is_empty() {
        return Err(ActivityError::NoMatch(T::KIND));
    }

    Ok(matched.iter().map(id_of).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[derive(Debug, Clone)]
    struct Target {
        id: String,
        state: Option<String>,
    }

    impl Filterable for Target {
        const KIND: &'static str = "targets";

        fn attribute_names() -> &'static [&'static str] {
            &["id", "state"]
        }

        fn attribute(&self, name: &str) -> Option<Value> {
            match name {
                "id" => Some(Value::String(self.id.clone())),
                "state" => self.state.clone().map(Value::String),
                _ => None,
            }
        }
    }

    fn target(id: &str, state: &str) -> Target {
        Target {
            id: id.into(),
            state: Some(state.into()),
        }
    }

    #[test]
    fn random_pick_on_singleton_is_deterministic() {
        let candidates = vec![target("t1", "RUNNING")];
        assert_eq!(pick_random(&candidates).unwrap().id, "t1");
    }

    #[test]
    fn random_pick_on_empty_fails_first() {
        let candidates: Vec<Target> = vec![];
        assert!(matches!(
            pick_random(&candidates),
            Err(ActivityError::NoMatch("targets"))
        ));
    }

    #[test]
    fn random_pick_stays_within_candidates() {
        let candidates = vec![target("t1", "RUNNING"), target("t2", "STOPPED")];
        for _ in 0..32 {
            let picked = pick_random(&candidates).unwrap();
            assert!(picked.id == "t1" || picked.id == "t2");
        }
    }

    #[tokio::test]
    async fn explicit_ids_bypass_discovery() {
        let ids = resolve_targets::<Target, _, _>(
            Some(vec!["t9".into()]),
            None,
            || async { panic!("discovery must not run for explicit targets") },
            |t| t.id.clone(),
        )
        .await
        .unwrap();
        assert_eq!(ids, vec!["t9".to_string()]);
    }

    #[tokio::test]
    async fn empty_explicit_list_falls_back_to_discovery() {
        let pool = vec![target("t1", "RUNNING"), target("t2", "STOPPED")];
        let mut filters = FilterSet::new();
        filters.insert("state".into(), json!("RUNNING"));

        let ids = resolve_targets(
            Some(vec![]),
            Some(&filters),
            || async move { Ok(pool) },
            |t: &Target| t.id.clone(),
        )
        .await
        .unwrap();
        assert_eq!(ids, vec!["t1".to_string()]);
    }

    #[tokio::test]
    async fn no_match_after_discovery_is_terminal() {
        let pool = vec![target("t1", "RUNNING")];
        let mut filters = FilterSet::new();
        filters.insert("state".into(), json!("TERMINATED"));

        let result = resolve_targets(
            None,
            Some(&filters),
            || async move { Ok(pool) },
            |t: &Target| t.id.clone(),
        )
        .await;
        assert!(matches!(result, Err(ActivityError::NoMatch("targets"))));
    }
}
