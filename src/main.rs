use std::path::PathBuf;

use clap::Parser;
use lunge::app::SandboxApp;
use lunge::config::GameConfig;

#[derive(Parser)]
#[command(name = "lunge", about = "Headless player controller sandbox")]
struct Args {
    /// Level, tuning and input script
    #[arg(long, default_value = "assets/sandbox.toml")]
    config: PathBuf,

    /// Ticks to simulate (defaults to simulation.ticks from the config)
    #[arg(long)]
    ticks: Option<u64>,

    /// Only print the summary, not every transition
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = GameConfig::load(&args.config)?;
    let ticks = args.ticks.unwrap_or(config.simulation.ticks);
    log::info!("running {} for {ticks} ticks", args.config.display());

    let mut app = SandboxApp::new(config)?;
    let summary = app.run(ticks);

    if !args.quiet {
        for t in &summary.transitions {
            println!(
                "tick {:>5}  t={:>7.3}s  {:?} -> {:?}{}",
                t.tick,
                t.time,
                t.from,
                t.to,
                if t.deferred { "  (deferred)" } else { "" }
            );
        }
    }

    println!("--- {} ticks, {} transitions", summary.ticks, summary.transitions.len());
    for (state, n) in &summary.ticks_in_state {
        println!("{state:>12}: {n} ticks");
    }
    println!("highest combo step: {}", summary.max_combo_step);
    println!(
        "final: {:?} at ({:.2}, {:.2})",
        summary.final_state, summary.final_position.x, summary.final_position.y
    );
    log::info!("done");
    Ok(())
}
