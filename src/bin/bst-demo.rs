use clap::Parser;
use log::{error, info};

use adt_bst::{Error, Handle, Result};

#[derive(Parser)]
#[command(name = "bst-demo")]
#[command(about = "Walks a binary search tree through its operations")]
struct Args {
    /// Elements to insert, in order. Repeats are ignored by the tree.
    #[arg(long, value_delimiter = ',', default_value = "4,1,18,9,4,7,14,3,1")]
    insert: Vec<i32>,

    /// Elements to look up after inserting.
    #[arg(long, value_delimiter = ',', default_value = "18,5,7")]
    lookup: Vec<i32>,

    /// Elements to remove after the first print.
    #[arg(long, value_delimiter = ',', default_value = "18,4")]
    remove: Vec<i32>,

    /// Spaces per level of height when printing the tree.
    #[arg(long, default_value = "4")]
    indent: usize,
}

fn print_shape(handle: &Handle<i32>) -> Result<()> {
    println!("BST Size: {}", handle.size()?);
    println!("BST Height: {}", handle.height()?);
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let indent = " ".repeat(args.indent);
    let mut handle = Handle::create();

    for x in &args.insert {
        handle.insert(*x)?;
    }
    info!("inserted {} elements", args.insert.len());

    for x in &args.lookup {
        println!("Contains {x}? {}", handle.contains(x));
    }
    print_shape(&handle)?;
    if !handle.is_empty() {
        println!("Maximum value: {}", handle.maximum()?);
        println!("Minimum value: {}", handle.minimum()?);
    }
    handle.print_with(&indent);

    let removing = args
        .remove
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" and ");
    println!("Removing {removing}...");
    for (done, x) in args.remove.iter().enumerate() {
        match handle.remove(x) {
            Err(Error::EmptyTree) => {
                info!(
                    "tree is empty, skipping the last {} removals",
                    args.remove.len() - done
                );
                break;
            }
            result => result?,
        }
    }
    print_shape(&handle)?;
    handle.print_with(&indent);

    handle.clear()?;
    handle.print_with(&indent);

    handle.destroy()?;
    handle.print_with(&indent);
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("demo failed: {e}");
        std::process::exit(1);
    }
}
