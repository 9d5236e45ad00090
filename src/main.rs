use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;

use envelope::*;

// Each squaring doubles the rendered text
const MAX_SQUARINGS: u32 = 16;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let app = App::parse();

    match app.command {
        Command::Tree { squarings, census } => tree(squarings, census),
        Command::Fleet => fleet(),
        Command::Array { len, index } => array(len, index),
    }
}

#[derive(Parser)]
#[clap(name = "envelope", about = "Shared expression tree demos")]
struct App {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build (-5) * (3 + 4) and square it in place
    #[clap(alias = "t")]
    Tree {
        #[clap(short, long, default_value = "1")]
        squarings: u32,
        /// Print node and share counts
        #[clap(short, long)]
        census: bool,
    },
    /// Weigh a fleet of mixed vehicles
    #[clap(alias = "f")]
    Fleet,
    /// Look up an element of a fixed-size array
    #[clap(alias = "a")]
    Array {
        #[clap(short, long, default_value = "10")]
        len: usize,
        #[clap(short, long)]
        index: usize,
    },
}

fn tree(squarings: u32, census: bool) -> anyhow::Result<()> {
    if squarings > MAX_SQUARINGS {
        bail!("At most {} squarings are allowed", MAX_SQUARINGS);
    }
    let mut t = Expr::binary("*", Expr::unary("-", 5), Expr::binary("+", 3, 4));
    for _ in 0..squarings {
        let squared = Expr::binary("*", t.clone(), t.clone());
        t.assign(&squared);
    }
    let text = t.text().context("Unable to render expression")?;
    println!("{}", text.bright_white());
    if census {
        println!("{} {}", "live nodes:".blue(), live_nodes());
        println!("{} {}", "root shares:".blue(), t.share_count());
    }
    Ok(())
}

fn fleet() -> anyhow::Result<()> {
    let fleet = Fleet::new()
        .with(Automobile {
            curb_weight: 1_200.0,
        })
        .with(Truck {
            tare: 8_000.0,
            cargo: 1_500.0,
        })
        .with(Aircraft {
            empty_weight: 41_000.0,
            fuel: 6_000.0,
        });
    for vehicle in fleet.iter() {
        println!("{}", vehicle.to_string().bright_white());
    }
    let total = fleet.total_weight().context("Unable to weigh fleet")?;
    println!("{} {}kg", "total:".blue(), total);
    Ok(())
}

fn array(len: usize, index: usize) -> anyhow::Result<()> {
    let values = BoundedArray::<i64>::new(len);
    match values.get(index) {
        Ok(value) => println!("{}", value.to_string().blue()),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}
