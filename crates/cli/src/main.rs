//! U-Packing job runner CLI

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use u_packing_cli::{Job, PackResponse};
use u_packing_core::solver::{BinOrder, Config, ItemOrder, Solver};
use u_packing_core::Error;
use u_packing_d3::Packer3D;

#[derive(Parser)]
#[command(name = "pack-runner")]
#[command(about = "Packs boxes into the first container that holds them all")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the items of a JSON job file
    Pack {
        /// Path to the JSON job file
        file: PathBuf,

        /// Order in which items are placed
        #[arg(long, value_enum, default_value = "as-given")]
        item_order: ItemOrderArg,

        /// Order in which bins are tried
        #[arg(long, value_enum, default_value = "as-given")]
        bin_order: BinOrderArg,

        /// Run bin trials in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Print the JSON response instead of a text report
        #[arg(long)]
        json: bool,

        /// Output file for the JSON response
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a sample job file
    Sample,
}

#[derive(Clone, Copy, ValueEnum)]
enum ItemOrderArg {
    /// As listed in the job file
    AsGiven,
    /// Largest volume first
    VolumeDesc,
}

impl From<ItemOrderArg> for ItemOrder {
    fn from(arg: ItemOrderArg) -> Self {
        match arg {
            ItemOrderArg::AsGiven => ItemOrder::AsGiven,
            ItemOrderArg::VolumeDesc => ItemOrder::VolumeDescending,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BinOrderArg {
    /// As listed in the job file
    AsGiven,
    /// Smallest volume first
    VolumeAsc,
}

impl From<BinOrderArg> for BinOrder {
    fn from(arg: BinOrderArg) -> Self {
        match arg {
            BinOrderArg::AsGiven => BinOrder::AsGiven,
            BinOrderArg::VolumeAsc => BinOrder::VolumeAscending,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            file,
            item_order,
            bin_order,
            parallel,
            json,
            output,
        } => {
            let job = Job::from_file(&file)?;
            let (bins, items) = job.build()?;
            log::info!(
                "loaded {} bins and {} items from {}",
                bins.len(),
                items.len(),
                file.display()
            );

            let config = Config::new()
                .with_item_order(item_order.into())
                .with_bin_order(bin_order.into())
                .with_parallel_trials(parallel);
            let packer = Packer3D::new(config);

            let outcome = packer.solve(&bins, &items);
            let response = match &outcome {
                Ok(result) => PackResponse::from_result(result),
                Err(err) => {
                    let trials = match err {
                        Error::NoFittingBin { bins, .. } => *bins,
                        _ => 0,
                    };
                    PackResponse::failure(err, trials)
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", response.to_text());
            }

            if let Some(path) = output {
                response.save_json(&path)?;
                println!("Response saved to: {}", path.display());
            }

            outcome?;
        }

        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&Job::sample())?);
        }
    }

    Ok(())
}
