mod config;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use config::{SimConfig, load_scenario};
use lazer::{GameEvent, SimulationLoop, World, WorldStats};
use script::{FramePacer, ScriptedInput};

#[derive(Parser)]
#[command(name = "lazer-sim")]
#[command(about = "Headless Lazer simulation driver")]
struct Args {
    #[arg(short, long, default_value_t = lazer::DEFAULT_TICK_RATE)]
    tick_rate: u32,

    #[arg(short, long, default_value_t = 20.0, help = "Simulated seconds to run")]
    duration: f32,

    #[arg(short, long, help = "JSON scenario with player, viewport and waves")]
    scenario: Option<PathBuf>,

    #[arg(long, default_value_t = 1.5, help = "Seconds the fire button is held per cycle")]
    fire_hold: f32,

    #[arg(long, default_value_t = 0.5, help = "Seconds the fire button is released per cycle")]
    fire_release: f32,

    #[arg(long, help = "Vary frame length to exercise tick accumulation")]
    frame_jitter: bool,

    #[arg(long, help = "Print every game event as a JSON line")]
    events: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let world = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => SimConfig::default().world,
    };

    let config = SimConfig {
        tick_rate: args.tick_rate,
        duration_secs: args.duration,
        fire_hold_secs: args.fire_hold,
        fire_release_secs: args.fire_release,
        frame_jitter: args.frame_jitter,
        print_events: args.events,
        world,
    };

    let stats = run(&config)?;
    print_summary(&stats, config.tick_rate);
    Ok(())
}

fn run(config: &SimConfig) -> Result<WorldStats> {
    let world = World::new(config.world.clone()).context("building world")?;
    let script = ScriptedInput::new(config.fire_hold_secs, config.fire_release_secs);
    let mut pacer = FramePacer::new(config.tick_rate, config.frame_jitter);

    let mut sim = SimulationLoop::new(world, config.tick_rate, |state| {
        script.frame_at(state.elapsed())
    })?;

    log::info!(
        "running {:.1}s at {} ticks/s{}",
        config.duration_secs,
        config.tick_rate,
        if config.frame_jitter { " with frame jitter" } else { "" }
    );

    let mut clock = 0.0f32;
    while clock < config.duration_secs {
        let frame = pacer.next_frame();
        clock += frame;

        for event in sim.update(frame)? {
            if config.print_events {
                println!("{}", serde_json::to_string(&event)?);
            }
            match &event {
                GameEvent::EnemyDespawned { enemy_id, reason, .. } => {
                    log::debug!("enemy {} despawned: {}", enemy_id, reason.as_str());
                }
                GameEvent::PlayerDestroyed { .. } => {
                    log::warn!("player destroyed after {:.2}s", sim.state().elapsed());
                }
                _ => {}
            }
        }

        if sim.state().world.is_over() {
            log::info!("simulation over after {:.2}s", sim.state().elapsed());
            break;
        }
    }

    let world = sim.into_world();
    Ok(*world.stats())
}

fn print_summary(stats: &WorldStats, tick_rate: u32) {
    println!("ticks:              {} ({:.2}s)", stats.ticks, stats.ticks as f32 / tick_rate as f32);
    println!("projectiles fired:  {}", stats.projectiles_fired);
    println!("enemies spawned:    {}", stats.enemies_spawned);
    println!("enemies destroyed:  {}", stats.enemies_destroyed);
    println!("enemies escaped:    {}", stats.enemies_escaped);
    println!("enemies collided:   {}", stats.enemies_collided);
    println!("player hits:        {}", stats.player_hits);
}
