use std::env;
use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};

use treefold::model::{Bst, LevelTree, TraversalOrder};
use treefold::parser;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("usage: {} [filename]", args[0]);
        process::exit(1);
    }

    let values = match args.get(1) {
        Some(path) => parser::read_values_file(path)
            .with_context(|| format!("cannot read '{path}'"))?,
        None => parser::read_values(io::stdin().lock()).context("cannot read stdin")?,
    };

    let bst = Bst::from_values(values.iter().copied());
    let level_tree = LevelTree::from_values(values.iter().copied());

    let stdout = io::stdout().lock();
    let mut out = io::BufWriter::new(stdout);

    writeln!(out, "Input values:")?;
    write_sequence(&mut out, &values)?;

    writeln!(out, "\nBST Traversals:")?;
    write_traversals(&mut out, |order| bst.traverse(order).collect())?;

    writeln!(out, "\nBinary Tree Traversals:")?;
    write_traversals(&mut out, |order| level_tree.traverse(order).collect())?;

    out.flush()?;
    Ok(())
}

/// Writes one labeled line per traversal order.
fn write_traversals<W, F>(out: &mut W, mut traverse: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(TraversalOrder) -> Vec<i32>,
{
    for (label, order) in [
        ("Preorder: ", TraversalOrder::Preorder),
        ("Inorder: ", TraversalOrder::Inorder),
        ("Postorder: ", TraversalOrder::Postorder),
    ] {
        write!(out, "{label}")?;
        write_sequence(out, &traverse(order))?;
    }
    Ok(())
}

/// Renders a sequence as space-separated values followed by a line break.
/// An empty sequence renders as just the line break.
fn write_sequence<W: Write>(out: &mut W, values: &[i32]) -> io::Result<()> {
    let mut first = true;
    for value in values {
        if first {
            write!(out, "{value}")?;
            first = false;
        } else {
            write!(out, " {value}")?;
        }
    }
    writeln!(out)
}
