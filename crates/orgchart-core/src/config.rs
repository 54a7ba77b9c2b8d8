use serde::{Deserialize, Serialize};

/// Spacing and weighting knobs for [`crate::layout_with`].
///
/// Every field has a default, so a config file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between neighbouring nodes of one layer.
    pub nodesep: f64,
    /// Gap between layers.
    pub ranksep: f64,
    /// Gap next to routing points of edges that skip layers.
    pub edgesep: f64,
    /// Weight of real parent/child edges.
    pub hierarchy_weight: f64,
    /// Weight of the sibling ordering edges; must dominate `hierarchy_weight`.
    pub ordering_weight: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            nodesep: 50.0,
            ranksep: 50.0,
            edgesep: 20.0,
            hierarchy_weight: 1.0,
            ordering_weight: 100.0,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Copy that layout can use as-is: negative values become `0`, non-finite ones fall back to
    /// the default. Negative spacing would let boxes of one layer overlap.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let fix = |field: &'static str, value: f64, default: f64| {
            if !value.is_finite() {
                tracing::warn!(field, value, "non-finite layout setting; using the default");
                default
            } else if value < 0.0 {
                tracing::warn!(field, value, "negative layout setting; clamping to 0");
                0.0
            } else {
                value
            }
        };
        Self {
            nodesep: fix("nodesep", self.nodesep, defaults.nodesep),
            ranksep: fix("ranksep", self.ranksep, defaults.ranksep),
            edgesep: fix("edgesep", self.edgesep, defaults.edgesep),
            hierarchy_weight: fix(
                "hierarchy_weight",
                self.hierarchy_weight,
                defaults.hierarchy_weight,
            ),
            ordering_weight: fix("ordering_weight", self.ordering_weight, defaults.ordering_weight),
        }
    }
}
