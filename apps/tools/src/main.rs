use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hanoi::{solve, snapshot, DiskCount};
use server_api::{render_svg, RenderConfig};

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, global = true, default_value_t = 3, allow_negative_numbers = true)]
    disks: i64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every move of the solution.
    Moves,
    /// Print the pegs after `step` moves.
    State {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i64,
    },
    /// Print the SVG frame after `step` moves.
    Svg {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let disks = DiskCount::new(cli.disks).context("invalid --disks")?;
    let moves = solve(disks);

    match cli.command {
        Command::Moves => {
            for (i, mv) in moves.iter().enumerate() {
                println!("{}: {mv}", i + 1);
            }
        }
        Command::State { step } => {
            let snap = snapshot(disks, &moves, step);
            println!("step {} / {}", snap.step, moves.len());
            for (peg, pegged) in snap.state.iter() {
                let ids: Vec<String> = pegged.iter().map(|disk| disk.0.to_string()).collect();
                println!("{peg}: [{}]", ids.join(", "));
            }
        }
        Command::Svg { step } => {
            let snap = snapshot(disks, &moves, step);
            println!("{}", render_svg(&snap.state, disks, &RenderConfig::default()));
        }
    }

    Ok(())
}
