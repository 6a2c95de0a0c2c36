//! Lazy pipeline example: nothing runs until the terminal call.

use seqwrap::{Seed, Wrap};

fn main() -> anyhow::Result<()> {
    // Endless source; `take` bounds it before any eager operation.
    let squares = Wrap::naturals::<u64>()
        .map(|n| n * n)
        .filter(|sq, _| sq % 2 == 1)
        .take(5)
        .to_vec();
    println!("odd squares: {:?}", squares);

    // Heterogeneous zip, then a keyed map.
    let names = ["ada", "grace", "edsger"];
    let born = [1815, 1906, 1930];
    let by_name = Wrap::zip((names, born)).to_map()?;
    for (name, year) in &by_name {
        println!("{name} -> {year}");
    }

    let total = Wrap::range_to(1, 11).reduce(|acc, n, _| acc + n, Seed::Unseeded)?;
    println!("1 + ... + 10 = {total}");

    let banner = Wrap::cycle(["-", "="]).take(20).join("");
    println!("{banner}");

    Ok(())
}
