//! Edge payloads that can supply a weight by attribute name

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::graph::WeightKey;

/// Weight used when an edge does not carry the requested attribute
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Edge payload that may hold named numeric attributes
pub trait EdgeAttributes {
    /// Value of attribute `key`, if this edge has one
    fn attribute(&self, key: &str) -> Option<f64>;

    /// Weight of this edge under `weight`, defaulting to 1
    fn weight_for(&self, weight: WeightKey<'_>) -> f64 {
        weight
            .and_then(|key| self.attribute(key))
            .unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

impl EdgeAttributes for () {
    fn attribute(&self, _key: &str) -> Option<f64> {
        None
    }
}

// A bare number is the edge's only attribute, so any key resolves to it.
macro_rules! numeric_attributes {
    ($($ty:ty),*) => {
        $(
            impl EdgeAttributes for $ty {
                fn attribute(&self, _key: &str) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric_attributes!(f64, f32, u32, u64, usize, i32, i64);

impl EdgeAttributes for HashMap<String, f64> {
    fn attribute(&self, key: &str) -> Option<f64> {
        self.get(key).copied()
    }
}

impl EdgeAttributes for BTreeMap<String, f64> {
    fn attribute(&self, key: &str) -> Option<f64> {
        self.get(key).copied()
    }
}

impl EdgeAttributes for Value {
    fn attribute(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }
}

impl<T: EdgeAttributes + ?Sized> EdgeAttributes for &T {
    fn attribute(&self, key: &str) -> Option<f64> {
        (**self).attribute(key)
    }
}
