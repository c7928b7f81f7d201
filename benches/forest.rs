use divan::{Bencher, counter::ItemsCount};
use rand::Rng;
use remspan::{EdgeList, Strategy, compute_forest};

fn main() {
    divan::main()
}

const NODES: [usize; 3] = [10000, 100000, 1000000];

fn random_edge_list(nodes: u64) -> EdgeList {
    let mut rng = rand::rng();
    EdgeList::from_pairs(
        (0..nodes * 2).map(|_| (rng.random_range(0..nodes), rng.random_range(0..nodes))),
    )
}

#[divan::bench_group(sample_count = 20)]
mod serial {
    use super::*;

    #[divan::bench(consts = NODES)]
    fn baseline<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::Sequential, 1);
    }

    #[divan::bench(consts = NODES)]
    fn rem<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::RemSequential, 1);
    }
}

#[divan::bench_group(sample_count = 20)]
mod parallel {
    use super::*;

    #[divan::bench(consts = NODES)]
    fn lock_guarded_1threads<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::RemLockGuarded, 1);
    }

    #[divan::bench(consts = NODES)]
    fn lock_guarded_4threads<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::RemLockGuarded, 4);
    }

    #[divan::bench(consts = NODES)]
    fn lock_guarded_8threads<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::RemLockGuarded, 8);
    }

    #[divan::bench(consts = NODES)]
    fn speculate_repair_1threads<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::RemSpeculateRepair, 1);
    }

    #[divan::bench(consts = NODES)]
    fn speculate_repair_4threads<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::RemSpeculateRepair, 4);
    }

    #[divan::bench(consts = NODES)]
    fn speculate_repair_8threads<const N: usize>(bench: Bencher) {
        run_strategy(bench, N, Strategy::RemSpeculateRepair, 8);
    }
}

fn run_strategy(bench: Bencher, nodes: usize, strategy: Strategy, workers: usize) {
    bench
        .with_inputs(|| random_edge_list(nodes as u64))
        .input_counter(|edges| ItemsCount::new(edges.edge_count()))
        .bench_local_refs(|edges| {
            compute_forest(edges.node_count(), edges.edges(), strategy, workers)
        })
}
