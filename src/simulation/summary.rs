use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// Expected cumulative regret of one agent at each step.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RegretCurve {
    /// Display label of the agent.
    pub name: String,
    /// `cumulative_regret[t]` is the mean over trials of the regret summed over steps `0..=t`.
    pub cumulative_regret: Vec<f64>,
}

impl RegretCurve {
    /// Cumulative regret at the final step.
    pub fn final_regret(&self) -> Option<f64> {
        self.cumulative_regret.last().copied()
    }

    /// Mean per-step regret at each step; the differences of the cumulative curve.
    pub fn step_regret(&self) -> Vec<f64> {
        let mut prev = 0.0;
        self.cumulative_regret
            .iter()
            .map(|&total| {
                let step = total - prev;
                prev = total;
                step
            })
            .collect()
    }
}

/// Regret curves of every agent in an experiment, indexed by agent position.
///
/// Agents are identified by index rather than name so two agents may share a label.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RegretCurves {
    curves: Vec<RegretCurve>,
}

impl RegretCurves {
    pub fn new(curves: Vec<RegretCurve>) -> Self {
        Self { curves }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Curve of the agent at position `agent`.
    pub fn get(&self, agent: usize) -> Option<&RegretCurve> {
        self.curves.get(agent)
    }

    pub fn iter(&self) -> std::slice::Iter<RegretCurve> {
        self.curves.iter()
    }

    /// Number of steps in each curve.
    pub fn num_steps(&self) -> usize {
        self.curves
            .first()
            .map_or(0, |curve| curve.cumulative_regret.len())
    }

    /// Summary of the final cumulative regret of each agent.
    pub fn summary(&self) -> RegretSummary {
        RegretSummary {
            final_regrets: self
                .curves
                .iter()
                .map(|curve| (curve.name.clone(), curve.final_regret().unwrap_or(0.0)))
                .collect(),
        }
    }
}

impl Index<usize> for RegretCurves {
    type Output = RegretCurve;

    fn index(&self, agent: usize) -> &Self::Output {
        &self.curves[agent]
    }
}

impl<'a> IntoIterator for &'a RegretCurves {
    type Item = &'a RegretCurve;
    type IntoIter = std::slice::Iter<'a, RegretCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl IntoIterator for RegretCurves {
    type Item = RegretCurve;
    type IntoIter = std::vec::IntoIter<RegretCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.into_iter()
    }
}

/// Final cumulative regret of each agent.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RegretSummary {
    /// `(name, final cumulative regret)` in agent order.
    pub final_regrets: Vec<(String, f64)>,
}

impl fmt::Display for RegretSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        let width = self
            .final_regrets
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);
        for (i, (name, regret)) in self.final_regrets.iter().enumerate() {
            writeln!(
                f,
                "{:>2}  {:<width$}  {:.precision$}",
                i,
                name,
                regret,
                width = width,
                precision = precision
            )?;
        }
        Ok(())
    }
}
