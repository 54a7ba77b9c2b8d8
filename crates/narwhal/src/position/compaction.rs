//! Separation-constrained 1-D placement.
//!
//! Given ordered boxes with preferred centers, find centers `x` minimizing
//! `Σ weight[i] · (x[i] − target[i])²` subject to `x[i + 1] − x[i] ≥ gap[i]`. Subtracting the
//! cumulative gaps turns this into isotonic regression, which pool-adjacent-violators solves
//! exactly in linear time.

#[derive(Debug, Clone, Copy)]
struct Block {
    weight: f64,
    weighted_sum: f64,
    len: usize,
}

impl Block {
    fn mean(&self) -> f64 {
        self.weighted_sum / self.weight
    }
}

/// Non-positive or non-finite weights are clamped to a small positive value.
pub fn place(targets: &[f64], weights: &[f64], gaps: &[f64]) -> Vec<f64> {
    let n = targets.len();
    if n == 0 {
        return Vec::new();
    }

    let mut offsets: Vec<f64> = Vec::with_capacity(n);
    let mut acc = 0.0;
    for i in 0..n {
        if i > 0 {
            acc += gaps.get(i - 1).copied().unwrap_or(0.0).max(0.0);
        }
        offsets.push(acc);
    }

    let mut blocks: Vec<Block> = Vec::with_capacity(n);
    for i in 0..n {
        let w = weights.get(i).copied().unwrap_or(1.0);
        let w = if w.is_finite() && w > 0.0 { w } else { 1e-6 };
        blocks.push(Block {
            weight: w,
            weighted_sum: w * (targets[i] - offsets[i]),
            len: 1,
        });
        while blocks.len() >= 2 {
            let last = blocks[blocks.len() - 1];
            let prev = blocks[blocks.len() - 2];
            if prev.mean() <= last.mean() {
                break;
            }
            blocks.pop();
            if let Some(merged) = blocks.last_mut() {
                merged.weight += last.weight;
                merged.weighted_sum += last.weighted_sum;
                merged.len += last.len;
            }
        }
    }

    let mut out: Vec<f64> = Vec::with_capacity(n);
    for block in blocks {
        let mean = block.mean();
        for _ in 0..block.len {
            out.push(mean + offsets[out.len()]);
        }
    }
    out
}
