//! Revolve job files.
//!
//! A job bundles the profile edges with the sweep parameters. Both TOML
//! and JSON are accepted; the format follows the file extension.
//!
//! ```toml
//! polylines = [[[1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [2.0, 0.0, 1.0]]]
//!
//! [params]
//! angle = 180.0
//! segments = 12
//!
//! [params.axis]
//! origin = [0.0, 0.0, 0.0]
//! direction = [0.0, 0.0, 1.0]
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use lathe_chain::Edge;
use lathe_math::Point3;
use lathe_revolve::RevolveParams;
use serde::{Deserialize, Serialize};

/// Profile and parameters for one revolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevolveJob {
    /// Loose segments.
    pub edges: Vec<Edge>,
    /// Polylines, each expanded to consecutive edges.
    pub polylines: Vec<Vec<Point3>>,
    /// Sweep parameters.
    pub params: RevolveParams,
}

impl RevolveJob {
    /// Load a job from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "toml" => Self::from_toml(&text),
            "json" => Self::from_json(&text),
            _ => bail!("unknown job format: {}", path.display()),
        }
        .with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a TOML job.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a JSON job.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// All edges: the loose ones first, then the polyline segments.
    pub fn all_edges(&self) -> Vec<Edge> {
        let mut edges = self.edges.clone();
        for line in &self.polylines {
            edges.extend(line.windows(2).map(|w| Edge::new(w[0], w[1])));
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_revolve::AxisSpec;

    #[test]
    fn test_toml_job() {
        let job = RevolveJob::from_toml(
            r#"
            polylines = [[[1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [2.0, 0.0, 1.0]]]

            [[edges]]
            start = [5.0, 0.0, 0.0]
            end = [6.0, 0.0, 0.0]

            [params]
            angle = 180.0
            segments = 12

            [params.axis]
            origin = [0.0, 0.0, 0.0]
            direction = [0.0, 1.0, 0.0]
            "#,
        )
        .unwrap();
        assert_eq!(job.params.angle, 180.0);
        assert!(matches!(job.params.axis, AxisSpec::Direction { .. }));
        let edges = job.all_edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].start, Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_json_job_defaults() {
        let job = RevolveJob::from_json(
            r#"{ "edges": [ { "start": [1, 0, 0], "end": [1, 0, 1] } ] }"#,
        )
        .unwrap();
        assert_eq!(job.all_edges().len(), 1);
        assert_eq!(job.params, RevolveParams::default());
    }
}
