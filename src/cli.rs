#[cfg(feature = "bin")]
pub mod bin {
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use clap::Parser;
    use concurrency::LockTable;

    use crate::*;

    #[derive(Debug, Parser)]
    #[command(version, about = env!("CARGO_PKG_DESCRIPTION"))]
    struct Args {
        /// The edge-list file to read, one `u v` pair per line
        input: PathBuf,
        /// The merge strategy to run
        #[clap(short, long, default_value_t = Strategy::Sequential)]
        strategy: Strategy,
        /// Number of worker threads for the parallel strategies. Passing `0` will use the maximum
        /// inferred parallelism available on the current system.
        #[clap(short = 'j', long, default_value = "1")]
        threads: usize,
        /// Write the merged edges to this file as `u v` lines
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Number of stripes in the lock-guarded strategy's lock table, rounded up to a power of
        /// two
        #[clap(long, default_value_t = LockTable::DEFAULT_STRIPES)]
        lock_stripes: usize,
    }

    /// Run the spanning-forest driver from the command line.
    ///
    /// Prints the merged-edge count to stdout; everything else goes through
    /// the logger.
    pub fn cli() {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .format_timestamp(None)
            .format_target(false)
            .parse_default_env()
            .init();

        let args = Args::parse();
        let threads = if args.threads == 0 {
            std::thread::available_parallelism().map_or(1, |n| n.get())
        } else {
            args.threads
        };

        let start = Instant::now();
        let edges = match EdgeList::read_text(&args.input) {
            Ok(edges) => edges,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1)
            }
        };
        log::info!(
            "read {} edges over {} nodes in {:?}",
            edges.edge_count(),
            edges.node_count(),
            start.elapsed()
        );

        let start = Instant::now();
        let run = compute_forest_with_lock_stripes(
            edges.node_count(),
            edges.edges(),
            args.strategy,
            threads,
            args.lock_stripes,
        );
        log::info!(
            "{} merged {} edges in {:?}",
            args.strategy,
            run.merged,
            start.elapsed()
        );

        if let Some(path) = &args.output {
            if let Err(err) = write_output(path, &run) {
                log::error!("IO error: {}: {err}", path.display());
                std::process::exit(1)
            }
            log::info!("wrote merged edges to {}", path.display());
        }
        println!("{}", run.merged);
    }

    fn write_output(path: &Path, run: &ForestRun) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        run.write_edges(&mut writer)?;
        writer.flush()
    }
}
