use rand::seq::SliceRandom;
use rand::Rng;

use crate::{define_node_id, DenseId, RemForest, UnionFind};

define_node_id!(pub(crate) Node, u32, "a node id for testing the engines");

fn n(u: usize) -> Node {
    Node::from_usize(u)
}

fn random_edges(nodes: usize, count: usize) -> Vec<(usize, usize)> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| (rng.random_range(0..nodes), rng.random_range(0..nodes)))
        .collect()
}

#[test]
fn baseline_two_chains_then_bridge() {
    let mut uf = UnionFind::<Node>::new(200);
    let ids1 = (0..100).map(n).collect::<Vec<_>>();
    let ids2 = (100..200).map(n).collect::<Vec<_>>();

    for ids in [&ids1, &ids2] {
        ids.windows(2).for_each(|w| {
            assert!(uf.merge(w[0], w[1]));
            assert_eq!(uf.find(w[0]), uf.find(w[1]));
        });
    }

    assert!(ids1.windows(2).all(|w| uf.find(w[0]) == uf.find(w[1])));
    assert!(ids2.windows(2).all(|w| uf.find(w[0]) == uf.find(w[1])));
    assert_ne!(uf.find(ids1[0]), uf.find(ids2[0]));

    assert!(uf.merge(ids1[5], ids2[20]));

    let target = uf.find(ids1[0]);
    assert!(ids1
        .iter()
        .chain(ids2.iter())
        .all(|&id| uf.find(id) == target));
}

#[test]
fn baseline_union_by_rank() {
    let mut uf = UnionFind::<Node>::new(8);
    // Equal ranks: the first argument survives and gains a rank.
    assert_eq!(uf.union(n(0), n(1)), n(0));
    assert_eq!(uf.union(n(2), n(3)), n(2));
    // Rank 1 vs rank 0: the ranked root survives regardless of order.
    assert_eq!(uf.union(n(4), n(0)), n(0));
    // Rank 1 vs rank 1: first argument wins the tie again.
    assert_eq!(uf.union(n(0), n(2)), n(0));
    assert_eq!(uf.find(n(3)), n(0));
    assert_eq!(uf.find(n(4)), n(0));
}

#[test]
fn baseline_find_compresses() {
    let mut uf = UnionFind::<Node>::new(64);
    for (a, b) in random_edges(64, 128) {
        uf.merge(n(a), n(b));
    }
    let roots: Vec<Node> = (0..64).map(|i| uf.find(n(i))).collect();
    let forest = uf.into_forest();
    // Once find has visited a node, its stored parent is the root itself.
    for (i, root) in roots.iter().enumerate() {
        assert_eq!(forest.parent(n(i)), *root);
    }
}

#[test]
fn worked_example_all_sequential_engines() {
    let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)];
    let expected = [true, true, true, true, false];

    let mut uf = UnionFind::<Node>::new(5);
    let mut rem = RemForest::<Node>::new(5);
    let mut rem_plain = RemForest::<Node>::new(5);
    for (&(a, b), &want) in edges.iter().zip(expected.iter()) {
        assert_eq!(uf.merge(n(a), n(b)), want);
        assert_eq!(rem.merge(n(a), n(b)), want);
        assert_eq!(rem_plain.merge_no_splice(n(a), n(b)), want);
    }
    assert_eq!(uf.into_forest().component_count(), 1);
    assert_eq!(rem.into_forest().component_count(), 1);
    assert_eq!(rem_plain.into_forest().component_count(), 1);
}

#[test]
fn self_loops_never_merge() {
    let mut uf = UnionFind::<Node>::new(4);
    let mut rem = RemForest::<Node>::new(4);
    for i in 0..4 {
        assert!(!uf.merge(n(i), n(i)));
        assert!(!rem.merge(n(i), n(i)));
        assert!(!rem.merge_no_splice(n(i), n(i)));
    }
    assert_eq!(uf.into_forest().component_count(), 4);
    assert_eq!(rem.into_forest().component_count(), 4);
}

#[test]
fn rem_agrees_with_baseline_on_random_streams() {
    const NODES: usize = 500;
    for _ in 0..10 {
        let edges = random_edges(NODES, 1000);
        let mut uf = UnionFind::<Node>::new(NODES);
        let mut rem = RemForest::<Node>::new(NODES);
        let mut rem_plain = RemForest::<Node>::new(NODES);
        let mut uf_count = 0u64;
        let mut rem_count = 0u64;
        let mut plain_count = 0u64;
        for &(a, b) in &edges {
            if uf.merge(n(a), n(b)) {
                uf_count += 1;
            }
            if rem.merge(n(a), n(b)) {
                rem_count += 1;
            }
            if rem_plain.merge_no_splice(n(a), n(b)) {
                plain_count += 1;
            }
        }
        assert_eq!(uf_count, rem_count);
        assert_eq!(uf_count, plain_count);

        let mut uf_forest = uf.into_forest();
        let mut rem_forest = rem.into_forest();
        assert_eq!(uf_forest.component_count(), rem_forest.component_count());
        assert_eq!(uf_forest.component_count() + uf_count, NODES as u64);
        for a in (0..NODES).step_by(7) {
            for b in (0..NODES).step_by(13) {
                assert_eq!(
                    uf_forest.same_component(n(a), n(b)),
                    rem_forest.same_component(n(a), n(b))
                );
            }
        }
    }
}

#[test]
fn rem_parent_chains_increase() {
    const NODES: usize = 300;
    let mut rem = RemForest::<Node>::new(NODES);
    for (a, b) in random_edges(NODES, 800) {
        rem.merge(n(a), n(b));
    }
    let forest = rem.into_forest();
    for i in 0..NODES {
        // The ordering rule: parents never point downwards.
        assert!(forest.parent(n(i)) >= n(i));
        // Every chain reaches a root within `NODES` steps.
        let mut cur = n(i);
        let mut steps = 0;
        while forest.parent(cur) != cur {
            cur = forest.parent(cur);
            steps += 1;
            assert!(steps <= NODES);
        }
    }
}

#[test]
fn baseline_partition_is_order_independent() {
    const NODES: usize = 40;
    let mut edges = random_edges(NODES, 60);
    let mut first = UnionFind::<Node>::new(NODES);
    for &(a, b) in &edges {
        first.merge(n(a), n(b));
    }
    let mut rng = rand::rng();
    edges.shuffle(&mut rng);
    let mut second = UnionFind::<Node>::new(NODES);
    for &(a, b) in &edges {
        second.merge(n(a), n(b));
    }
    let mut first = first.into_forest();
    let mut second = second.into_forest();
    for a in 0..NODES {
        for b in 0..NODES {
            assert_eq!(
                first.same_component(n(a), n(b)),
                second.same_component(n(a), n(b))
            );
        }
    }
}

#[test]
fn empty_and_single_node_forests() {
    let uf = UnionFind::<Node>::new(0);
    assert!(uf.is_empty());
    assert_eq!(uf.into_forest().component_count(), 0);

    let mut rem = RemForest::<Node>::new(1);
    assert_eq!(rem.len(), 1);
    assert!(!rem.merge(n(0), n(0)));
    let mut forest = rem.into_forest();
    assert_eq!(forest.component_count(), 1);
    assert_eq!(forest.root_of(n(0)), n(0));
}

#[test]
fn forest_queries_on_disconnected_input() {
    let mut rem = RemForest::<Node>::new(6);
    assert!(rem.merge(n(0), n(1)));
    assert!(rem.merge(n(2), n(3)));
    let mut forest = rem.into_forest();
    assert_eq!(forest.component_count(), 4);
    assert!(forest.same_component(n(0), n(1)));
    assert!(!forest.same_component(n(0), n(2)));
    assert!(!forest.same_component(n(4), n(5)));
}
