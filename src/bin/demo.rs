//! Demonstration driver for the tree: seeds a BST from a literal or random
//! array of integers in [1, 100] and exercises the whole API.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bstree::error::TreeResult;
use bstree::tree::Tree;

#[derive(Parser)]
#[command(name = "bstree-demo")]
#[command(about = "Builds a binary search tree from sample data and walks its API")]
struct Args {
    /// How many random values in [1, 100] to seed the tree with.
    #[arg(long, default_value = "13", conflicts_with = "values")]
    count: usize,

    /// Seed for the random generator, for reproducible runs.
    #[arg(long, conflicts_with = "values")]
    seed: Option<u64>,

    /// Comma-separated literal values to build the tree from instead.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    values: Option<Vec<i64>>,
}

fn main() -> TreeResult<()> {
    env_logger::init();
    let args = Args::parse();

    let values = match args.values {
        Some(values) => values,
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            (0..args.count).map(|_| rng.random_range(1..=100)).collect()
        }
    };

    println!("Building a tree from {values:?}");
    let mut tree = Tree::build(&values)?;
    print!("{tree}");
    println!("Balanced: {}", tree.is_balanced());

    println!("Level order: {:?}", tree.level_order());
    println!("Pre order:   {:?}", tree.pre_order());
    println!("In order:    {:?}", tree.in_order());
    println!("Post order:  {:?}", tree.post_order());

    println!("\nInserting a handful of values above 100 to skew the tree");
    for value in [101, 157, 203, 230] {
        tree.insert(value);
    }
    print!("{tree}");
    println!("Balanced: {}", tree.is_balanced());

    println!("\nRebalancing");
    tree.rebalance();
    print!("{tree}");
    println!("Balanced: {}", tree.is_balanced());
    println!("Height: {}", tree.height());

    // The smallest value is always present after the inserts above.
    let smallest = tree.in_order()[0];
    let node = tree.find(Some(smallest))?;
    println!("\nFound {} at depth {}", node.value(), tree.depth(node)?);

    tree.remove(smallest);
    println!("After removing {smallest}: {:?}", tree.in_order());

    Ok(())
}
