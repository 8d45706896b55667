//! CLI entry point for canopy

use std::fs;
use std::path::PathBuf;
use std::process;

use canopy::{HtmlFormatter, TreeWalker, print_json, render_document};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Generate a self-contained HTML tree view of a directory, newest first")]
#[command(version)]
struct Args {
    /// Directory to scan
    path: PathBuf,

    /// Destination HTML file
    #[arg(short, long, default_value = "dir_tree.html")]
    output: PathBuf,

    /// Print the tree as JSON to stdout instead of writing an HTML file
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Resolve to an absolute, symlink-free path; failure here is the only
    // fatal input error
    let root = match args.path.canonicalize() {
        Ok(p) => p,
        Err(_) => {
            eprintln!("canopy: path does not exist: {}", args.path.display());
            process::exit(1);
        }
    };

    if args.json {
        // Keep stdout clean for the JSON document
        let tree = TreeWalker::new().walk(&root);
        if let Err(e) = print_json(&tree) {
            eprintln!("canopy: error writing output: {}", e);
            process::exit(1);
        }
        return;
    }

    println!("Building tree for {} ...", root.display());
    let tree = TreeWalker::new().walk(&root);

    println!("Rendering HTML ...");
    let fragment = HtmlFormatter::new().format(&tree);
    let document = render_document(&root, &fragment);

    if let Err(e) = fs::write(&args.output, document) {
        eprintln!(
            "canopy: cannot write {}: {}",
            args.output.display(),
            e
        );
        process::exit(1);
    }

    println!("Done. Open {} in a browser.", args.output.display());
}
