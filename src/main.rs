use fallsim::{report, Body, DescentLog, Scenario, ScenarioConfig, DEFAULT_KH};
use fallsim::bench_simulate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Point-mass fall toward a spherical body, explicit vs two-step integration")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one scenario, either a named preset or a YAML file
    Run {
        #[arg(short, long, conflicts_with = "file_name")]
        preset: Option<String>,

        #[arg(short, default_value = "vertical_drop.yaml")]
        file_name: String,
    },
    /// Run the four presets in order
    All,
    /// Time the simulator over a ladder of step sizes
    Bench,
    /// Summarize a lander descent log
    Descent {
        path: PathBuf,

        #[arg(long, default_value_t = DEFAULT_KH)]
        kh: f64,
    },
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<Scenario> {
    // Plain paths win, otherwise look in the bundled scenarios directory
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(Scenario::from_config(cfg)?)
}

fn run(scenario: &Scenario) {
    let output = scenario.run();
    print!("{}", report(&scenario.name, &scenario.body, &output));
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Run { preset, file_name } => {
            let scenario = match preset {
                Some(name) => Scenario::preset(&name, Body::MARS)?,
                None => load_scenario_from_yaml(&file_name)?,
            };
            run(&scenario);
        }
        Command::All => {
            for scenario in Scenario::presets(Body::MARS) {
                run(&scenario);
            }
        }
        Command::Bench => bench_simulate(),
        Command::Descent { path, kh } => {
            let log = DescentLog::from_path(&path)
                .with_context(|| format!("failed to read descent log {}", path.display()))?;
            match log.summary(kh) {
                Some(summary) => println!("{summary}"),
                None => println!("{}: no records", path.display()),
            }
        }
    }

    Ok(())
}
