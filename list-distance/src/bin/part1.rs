use list_distance::{init_tracing, run, Part};
use miette::Context;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init_tracing();

    run(Part::One, std::io::stdin().lock(), std::io::stdout().lock()).context("process part 1")
}
