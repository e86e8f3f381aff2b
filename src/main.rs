//! Pet Academy - Entry Point
//!
//! Loads the configuration, builds the world and either runs a fixed number
//! of ticks headless or drops into an interactive command loop.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use pet_academy::command::executor::{reasoning_lines, run_traced, status_lines, HELP_TEXT};
use pet_academy::command::{parse, Command, CommandExecutor};
use pet_academy::core::config::SimulationConfig;
use pet_academy::core::error::Result;
use pet_academy::core::logging::log_filter;
use pet_academy::ecs::world::World;
use pet_academy::simulation::schedule::FixedRate;
use pet_academy::simulation::tick::run_simulation_tick;

/// Autonomous virtual pets that show the rules behind their choices
#[derive(Parser, Debug)]
#[command(name = "pet-academy")]
#[command(about = "Watch virtual pets decide what to do, and read the rules they follow")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many ticks without prompting, then print the final state
    #[arg(long)]
    ticks: Option<u32>,

    /// Print the final state as JSON (headless mode only)
    #[arg(long)]
    json: bool,

    /// Show decision reasoning (every tick when headless)
    #[arg(long)]
    code: bool,

    /// Log filter, e.g. "pet_academy=debug" [default: RUST_LOG, then pet_academy=info]
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            args.log.as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        ))
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut world = World::from_config(config)?;
    world.show_reasoning = args.code;
    tracing::info!(
        pets = world.pet_count(),
        seed = world.config.seed,
        "Pet Academy starting..."
    );

    match args.ticks {
        Some(n) => run_headless(&mut world, n, args.json),
        None => run_interactive(&mut world),
    }
}

fn run_headless(world: &mut World, ticks: u32, json: bool) -> Result<()> {
    // Reasoning goes to stderr when stdout carries JSON
    for line in run_traced(world, ticks) {
        if json {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    if json {
        println!("{}", world.view().to_json()?);
    } else {
        for line in status_lines(world) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn run_interactive(world: &mut World) -> Result<()> {
    println!("\n=== PET ACADEMY ===");
    println!("Your pets decide for themselves. Type 'code' to see how.");
    println!();
    println!("Commands: {}", HELP_TEXT);
    println!("Also: watch <seconds>, json, help");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let command = match parse(input) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Watch(seconds) => watch(world, seconds),
            command => match CommandExecutor::execute(world, &command) {
                Ok(result) => {
                    for line in result.lines {
                        println!("{}", line);
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
    }

    println!(
        "\nGoodbye! {} pets, {} ticks elapsed.",
        world.pet_count(),
        world.current_tick
    );
    Ok(())
}

/// Run ticks in real time at the configured rate, printing status each second
fn watch(world: &mut World, seconds: f32) {
    let duration = match Duration::try_from_secs_f32(seconds) {
        Ok(duration) => duration,
        Err(e) => {
            println!("Cannot watch for {} seconds: {}", seconds, e);
            return;
        }
    };
    let mut schedule = FixedRate::new(world.config.tick_rate_hz);
    let start = Instant::now();
    let mut last = Instant::now();
    let mut last_report = world.current_tick;

    while start.elapsed() < duration {
        thread::sleep(schedule.interval());
        let now = Instant::now();
        for _ in 0..schedule.advance(now - last) {
            let events = run_simulation_tick(world);
            if world.current_tick - last_report >= u64::from(world.config.tick_rate_hz) {
                last_report = world.current_tick;
                for line in status_lines(world).into_iter().chain(reasoning_lines(world, &events)) {
                    println!("{}", line);
                }
            }
        }
        last = now;
    }
    println!("Watched until tick {}.", world.current_tick);
}
