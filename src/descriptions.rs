//! Decile description buckets and percentage-to-bucket selection.
//!
//! Each axis carries ten canned description texts, one per percentage decile.
//! The dataset is loaded and validated once and treated as immutable for the
//! life of the process.

use crate::error::{ChromatypeError, DataErrorKind, ErrorContext, Result};
use crate::model::{TraitAxis, World};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Number of buckets per axis.
pub const BUCKET_COUNT: usize = 10;

/// Map a percentage in [0, 100] to a bucket index in [0, 9].
///
/// Decile-ceiling convention: each bucket owns the half-open decile below its
/// upper bound, so 10.0 still selects bucket 0 and 10.1 selects bucket 1.
/// 100 maps to bucket 9, and out-of-range inputs clamp to the nearest bucket.
#[must_use]
pub fn bucket_index(percentage: f64) -> usize {
    ((percentage / 10.0).ceil() as i64 - 1).clamp(0, BUCKET_COUNT as i64 - 1) as usize
}

/// Ten description texts per axis.
#[derive(Debug, Clone)]
pub struct DescriptionBuckets {
    r: Vec<String>,
    g: Vec<String>,
    b: Vec<String>,
}

impl DescriptionBuckets {
    #[must_use]
    pub fn axis(&self, axis: TraitAxis) -> &[String] {
        match axis {
            TraitAxis::R => &self.r,
            TraitAxis::G => &self.g,
            TraitAxis::B => &self.b,
        }
    }

    /// Select the description for a percentage on one axis.
    #[must_use]
    pub fn describe(&self, axis: TraitAxis, percentage: f64) -> &str {
        &self.axis(axis)[bucket_index(percentage)]
    }

    fn from_value(value: &Value, context: &str) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ChromatypeError::data(
                context.to_string(),
                DataErrorKind::InvalidJson("expected an object of axis bucket lists".to_string()),
            )
        })?;

        let mut buckets = [Vec::new(), Vec::new(), Vec::new()];
        for (slot, axis) in TraitAxis::ALL.into_iter().enumerate() {
            let key = axis.letter().to_string();
            let entries = object
                .get(&key)
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    ChromatypeError::data(
                        context.to_string(),
                        DataErrorKind::MissingCollection { collection: key.clone() },
                    )
                })?;
            let texts: Vec<String> = entries
                .iter()
                .map(|e| {
                    e.as_str().map(str::to_string).ok_or_else(|| {
                        ChromatypeError::data(
                            context.to_string(),
                            DataErrorKind::InvalidJson(format!(
                                "axis {key} bucket entries must be strings"
                            )),
                        )
                    })
                })
                .collect::<Result<_>>()?;
            if texts.len() < BUCKET_COUNT {
                return Err(ChromatypeError::data(
                    context.to_string(),
                    DataErrorKind::ShortDescriptionSet {
                        axis: key,
                        found: texts.len(),
                    },
                ));
            }
            if texts.len() > BUCKET_COUNT {
                tracing::warn!(
                    axis = %axis,
                    found = texts.len(),
                    "Description set has extra buckets; entries beyond 10 are unreachable"
                );
            }
            buckets[slot] = texts;
        }
        let [r, g, b] = buckets;
        Ok(Self { r, g, b })
    }
}

/// Complete description dataset: a comprehensive bucket set, plus optional
/// per-world sets for multi-world deployments.
#[derive(Debug, Clone)]
pub struct DescriptionSet {
    comprehensive: DescriptionBuckets,
    worlds: BTreeMap<World, DescriptionBuckets>,
}

impl DescriptionSet {
    /// Load and validate a description dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ChromatypeError::io(path, e))?;
        Self::from_json(&content)
            .with_context(|| format!("loading descriptions from {}", path.display()))
    }

    /// Parse a description dataset: either a flat `{R, G, B}` structure or a
    /// nested one keyed by world name plus `"comprehensive"`.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let object = value.as_object().ok_or_else(|| {
            ChromatypeError::data(
                "description dataset",
                DataErrorKind::InvalidJson("expected a top-level object".to_string()),
            )
        })?;

        // Flat variant: axis keys at the top level.
        if object.contains_key("R") {
            return Ok(Self {
                comprehensive: DescriptionBuckets::from_value(&value, "description dataset")?,
                worlds: BTreeMap::new(),
            });
        }

        // Nested variant: world keys plus the comprehensive aggregate.
        let comprehensive_value = object.get("comprehensive").ok_or_else(|| {
            ChromatypeError::data(
                "description dataset",
                DataErrorKind::MissingCollection {
                    collection: "comprehensive".to_string(),
                },
            )
        })?;
        let comprehensive =
            DescriptionBuckets::from_value(comprehensive_value, "comprehensive descriptions")?;

        let mut worlds = BTreeMap::new();
        for world in World::ALL {
            if let Some(world_value) = object.get(world.suffix()) {
                let buckets = DescriptionBuckets::from_value(
                    world_value,
                    &format!("{world} descriptions"),
                )?;
                worlds.insert(world, buckets);
            }
        }
        Ok(Self {
            comprehensive,
            worlds,
        })
    }

    #[must_use]
    pub const fn comprehensive(&self) -> &DescriptionBuckets {
        &self.comprehensive
    }

    #[must_use]
    pub fn world(&self, world: World) -> Option<&DescriptionBuckets> {
        self.worlds.get(&world)
    }

    /// Comprehensive description for one axis at a percentage.
    #[must_use]
    pub fn describe(&self, axis: TraitAxis, percentage: f64) -> &str {
        self.comprehensive.describe(axis, percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_index(0.0), 0);
        assert_eq!(bucket_index(10.0), 0);
        assert_eq!(bucket_index(10.1), 1);
        assert_eq!(bucket_index(50.0), 4);
        assert_eq!(bucket_index(90.0), 8);
        assert_eq!(bucket_index(90.1), 9);
        assert_eq!(bucket_index(100.0), 9);
    }

    #[test]
    fn test_bucket_matches_decile_table() {
        // The closed-form expression must agree with the original lookup
        // table at every half-integer percentage.
        fn table(p: f64) -> usize {
            if p <= 10.0 {
                0
            } else if p <= 20.0 {
                1
            } else if p <= 30.0 {
                2
            } else if p <= 40.0 {
                3
            } else if p <= 50.0 {
                4
            } else if p <= 60.0 {
                5
            } else if p <= 70.0 {
                6
            } else if p <= 80.0 {
                7
            } else if p <= 90.0 {
                8
            } else {
                9
            }
        }
        let mut p = 0.0;
        while p <= 100.0 {
            assert_eq!(bucket_index(p), table(p), "diverged at {p}");
            p += 0.5;
        }
    }

    #[test]
    fn test_bucket_clamps_out_of_range() {
        assert_eq!(bucket_index(-3.0), 0);
        assert_eq!(bucket_index(250.0), 9);
    }

    fn flat_json(buckets_per_axis: usize) -> String {
        let entries: Vec<String> = (0..buckets_per_axis)
            .map(|i| format!("\"bucket {i}\""))
            .collect();
        let list = entries.join(",");
        format!("{{\"R\": [{list}], \"G\": [{list}], \"B\": [{list}]}}")
    }

    #[test]
    fn test_flat_load_and_describe() {
        let set = DescriptionSet::from_json(&flat_json(10)).expect("valid set");
        assert_eq!(set.describe(TraitAxis::R, 0.0), "bucket 0");
        assert_eq!(set.describe(TraitAxis::G, 53.1), "bucket 5");
        assert_eq!(set.describe(TraitAxis::B, 100.0), "bucket 9");
        assert!(set.world(World::Inner).is_none());
    }

    #[test]
    fn test_short_set_is_fatal() {
        let err = DescriptionSet::from_json(&flat_json(4)).unwrap_err();
        assert!(err.to_string().contains("quiz data"), "{err}");
    }

    #[test]
    fn test_nested_variant() {
        let flat = flat_json(10);
        let content = format!(
            "{{\"inner\": {flat}, \"social\": {flat}, \"comprehensive\": {flat}}}"
        );
        let set = DescriptionSet::from_json(&content).expect("valid nested set");
        assert!(set.world(World::Inner).is_some());
        assert!(set.world(World::Relational).is_none());
        assert_eq!(set.describe(TraitAxis::R, 45.0), "bucket 4");
    }

    #[test]
    fn test_nested_requires_comprehensive() {
        let flat = flat_json(10);
        let content = format!("{{\"inner\": {flat}}}");
        assert!(DescriptionSet::from_json(&content).is_err());
    }
}
