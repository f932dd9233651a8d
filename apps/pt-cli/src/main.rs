use clap::{Parser, Subcommand};
use pt_app::{compile_scenario, describe_scenario, AppResult, PlaybackWorker, ScenarioRuntime};
use pt_playback::Frame;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "Penning trap ion trajectory animation (headless frontend)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Print the derived trajectory quantities for a scenario
    Describe {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run the playback loop, printing frames to stdout
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Print every N-th advancing frame
        #[arg(long, default_value_t = 100)]
        print_every: usize,
        /// Start running even if the scenario says to start paused
        #[arg(long)]
        start_running: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Describe { scenario_path } => cmd_describe(&scenario_path),
        Commands::Run {
            scenario_path,
            print_every,
            start_running,
        } => cmd_run(&scenario_path, print_every.max(1), start_running),
    }
}

fn load_runtime(scenario_path: &Path) -> AppResult<ScenarioRuntime> {
    let scenario = pt_project::load_yaml(scenario_path)?;
    compile_scenario(&scenario)
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = pt_project::load_yaml(scenario_path)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_describe(scenario_path: &Path) -> AppResult<()> {
    let runtime = load_runtime(scenario_path)?;
    println!("{}", describe_scenario(&runtime));
    Ok(())
}

fn cmd_run(scenario_path: &Path, print_every: usize, start_running: bool) -> AppResult<()> {
    let mut runtime = load_runtime(scenario_path)?;
    if start_running {
        runtime.playback.start_paused = false;
    }

    println!("{}", describe_scenario(&runtime));
    println!();
    println!(
        "Playing '{}': {} steps of {:e} s at {} ticks/s{}",
        runtime.name,
        runtime.playback.step_count,
        runtime.playback.step_size_s,
        runtime.playback.initial_rate_tps,
        if runtime.playback.start_paused {
            " (paused)"
        } else {
            ""
        },
    );

    let worker = PlaybackWorker::start(&runtime)?;

    // Input collaborator: stdin lines become playback commands through the
    // configured key map. The thread ends when stdin closes or the
    // controller goes away.
    let input_map = runtime.input.clone();
    let commands = worker.commands.clone();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match input_map.command_for(line.trim()) {
                Some(command) => {
                    if commands.send(command).is_err() {
                        break;
                    }
                }
                None => eprintln!("unbound key: {:?}", line.trim()),
            }
        }
    });

    let mut last_readout = (true, f64::NAN);
    for frame in worker.frames.iter() {
        print_frame(&frame, print_every, last_readout);
        last_readout = (frame.paused, frame.rate_tps);
    }

    let advanced = worker.join();
    println!("Playback finished after {advanced} steps");
    Ok(())
}

fn print_frame(frame: &Frame, print_every: usize, last_readout: (bool, f64)) {
    if frame.paused {
        // Re-emitted readout: only echo it when something changed.
        if last_readout != (true, frame.rate_tps) {
            println!(
                "[paused] t = {:.9} s   rate = {} ticks/s",
                frame.time_s, frame.rate_tps
            );
        }
    } else if frame.step % print_every == 0 {
        println!(
            "t = {:.9} s   pos = ({:+.4}, {:+.4}, {:+.4})   rate = {} ticks/s",
            frame.time_s, frame.position.x, frame.position.y, frame.position.z, frame.rate_tps
        );
    }
}
