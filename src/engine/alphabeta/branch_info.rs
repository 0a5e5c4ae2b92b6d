use std::ops::Index;

/// This represents the information for a certain depth.
/// - `visited` is the number of nodes that were actually searched with that
///   many plies remaining.
/// - `prunes` is the number of those nodes that were cut off early.
/// - `skipped` is the number of candidate moves that were never searched
///   because of those cut-offs.
#[derive(Clone, Copy, Default, Debug)]
pub struct LayerInfo {
    pub visited: u64,
    pub prunes: u64,
    pub skipped: u64,
}

/// Per-depth node counts, indexed by remaining depth.
pub struct BranchInfo(Vec<LayerInfo>);

impl Index<usize> for BranchInfo {
    type Output = LayerInfo;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl BranchInfo {
    pub fn new(depth: u8) -> Self { BranchInfo(vec![LayerInfo::default(); depth as usize + 1]) }

    fn layer(&mut self, depth: u8) -> &mut LayerInfo {
        let depth = depth as usize;
        if self.0.len() <= depth {
            self.0.resize(depth + 1, LayerInfo::default());
        }
        &mut self.0[depth]
    }

    pub fn visit(&mut self, depth: u8) { self.layer(depth).visited += 1; }

    pub fn prune(&mut self, depth: u8, skipped: usize) {
        let layer = self.layer(depth);
        layer.prunes += 1;
        layer.skipped += skipped as u64;
    }

    pub fn total_visited(&self) -> u64 { self.0.iter().map(|l| l.visited).sum() }

    pub fn statistics(&self) -> String {
        let mut s = String::new();

        s.push_str("Pruning statistics:\n");

        for depth in (0..self.0.len()).rev() {
            let LayerInfo { visited, prunes, skipped } = self.0[depth];
            if visited == 0 {
                continue;
            }
            s.push_str(&format!(
                "\t{} plies left: {} nodes, {} ({}%) cut off, {} moves skipped\n",
                depth,
                visited,
                prunes,
                (prunes * 100).checked_div(visited).unwrap_or(0),
                skipped
            ));
        }

        s
    }

    pub fn reset_statistics(&mut self) { self.0 = vec![LayerInfo::default(); self.0.len()]; }
}
