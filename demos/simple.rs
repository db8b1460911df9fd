use clap::Parser;

use fds_rs::closure::{closure_checked, transitive, trivial, Limits};
use fds_rs::fd::Fd;
use fds_rs::fdset::FdSet;

#[derive(Parser)]
struct Args {
    /// Largest attribute universe to accept before refusing.
    #[arg(long, default_value_t = 20)]
    max_attributes: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let fds: FdSet = [Fd::new(["A"], ["B"]), Fd::new(["B"], ["C"])]
        .into_iter()
        .collect();
    println!("input = {}", fds);
    println!("universe = {}", fds.attributes());

    let t = trivial(&fds);
    println!("trivial = {}", t);

    let tr = transitive(&fds);
    println!("transitive = {}", tr);

    let limits = Limits {
        max_attributes: args.max_attributes,
    };
    let closed = closure_checked(&fds, &limits)?;
    println!("closure ({} FDs) = {}", closed.len(), closed);

    Ok(())
}
