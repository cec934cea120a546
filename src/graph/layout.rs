//! src/graph/layout.rs
//!
//! Seeded force-directed (Fruchterman-Reingold) layout.
//!
//! Positions are rescaled so the layout is centered on the origin and fits in
//! `[-1, 1]` on both axes. The same graph and seed always produce the same
//! positions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::path::WeightedGraph;
use crate::config::LayoutConfig;

/// Node name with its layout position.
pub type Placement = (String, (f64, f64));

pub fn spring_layout(graph: &WeightedGraph<'_>, config: &LayoutConfig) -> Vec<Placement> {
    let mut names: Vec<&str> = graph.nodes().collect();
    names.sort_unstable();
    let n = names.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![(names[0].to_string(), (0.0, 0.0))],
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random::<f64>(), rng.random::<f64>()))
        .collect();

    let index = |name: &str| names.binary_search(&name).ok();
    let links: Vec<(usize, usize)> = graph
        .all_edges()
        .filter_map(|(a, b, _)| Some((index(a)?, index(b)?)))
        .collect();

    // optimal pairwise distance
    let k = (1.0 / n as f64).sqrt();
    let iterations = config.iterations.max(1);
    let mut temp = 0.1;
    let cooling = temp / (iterations as f64 + 1.0);

    for _ in 0..iterations {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let d = (dx * dx + dy * dy).sqrt().max(0.01);
                let f = k * k / d;
                disp[i].0 += dx / d * f;
                disp[i].1 += dy / d * f;
                disp[j].0 -= dx / d * f;
                disp[j].1 -= dy / d * f;
            }
        }

        for &(i, j) in &links {
            let dx = pos[i].0 - pos[j].0;
            let dy = pos[i].1 - pos[j].1;
            let d = (dx * dx + dy * dy).sqrt().max(0.01);
            let f = d * d / k;
            disp[i].0 -= dx / d * f;
            disp[i].1 -= dy / d * f;
            disp[j].0 += dx / d * f;
            disp[j].1 += dy / d * f;
        }

        for (p, (dx, dy)) in pos.iter_mut().zip(disp) {
            let len = (dx * dx + dy * dy).sqrt().max(0.01);
            let step = len.min(temp);
            p.0 += dx / len * step;
            p.1 += dy / len * step;
        }
        temp -= cooling;
    }

    rescale(&mut pos);
    names
        .into_iter()
        .map(str::to_string)
        .zip(pos)
        .collect()
}

/// Center on the mean and scale so the largest coordinate magnitude is 1.
fn rescale(pos: &mut [(f64, f64)]) {
    let n = pos.len() as f64;
    let (mx, my) = pos
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
    let (mx, my) = (mx / n, my / n);

    let mut lim = 0.0f64;
    for p in pos.iter_mut() {
        p.0 -= mx;
        p.1 -= my;
        lim = lim.max(p.0.abs()).max(p.1.abs());
    }
    if lim > f64::EPSILON {
        for p in pos.iter_mut() {
            p.0 /= lim;
            p.1 /= lim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::path::build_graph;
    use crate::graph::store::GraphStore;

    fn triangle() -> GraphStore {
        let mut s = GraphStore::default();
        s.add_edge("A", "B", "1").unwrap();
        s.add_edge("B", "C", "2").unwrap();
        s.add_edge("A", "C", "10").unwrap();
        s.add_edge("C", "D", "1").unwrap();
        s
    }

    #[test]
    fn layout_is_deterministic() {
        let s = triangle();
        let g = build_graph(&s);
        let cfg = LayoutConfig::default();
        assert_eq!(spring_layout(&g, &cfg), spring_layout(&g, &cfg));
    }

    #[test]
    fn layout_fits_unit_square() {
        let s = triangle();
        let placed = spring_layout(&build_graph(&s), &LayoutConfig::default());
        assert_eq!(placed.len(), 4);
        for (_, (x, y)) in &placed {
            assert!(x.is_finite() && y.is_finite());
            assert!(x.abs() <= 1.0 + 1e-9 && y.abs() <= 1.0 + 1e-9);
        }
        let names: Vec<&str> = placed.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn empty_graph_has_no_placements() {
        let s = GraphStore::default();
        assert!(spring_layout(&build_graph(&s), &LayoutConfig::default()).is_empty());
    }
}
