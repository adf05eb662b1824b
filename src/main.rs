//! Ball Drop headless runner
//!
//! Simulates clicks on the spawn button at a fixed cadence and steps the
//! physics for a fixed number of frames.
//!
//! Usage: `ball-drop [settings.json]`. Set `RUST_LOG=debug` for spawn logs.

use std::io::{BufWriter, Write};
use std::time::Instant;

use ball_drop::renderer::{InstanceBuffer, JsonLinesRenderer};
use ball_drop::sim::SimState;
use ball_drop::{
    CenteredControls, FixedLayout, FrameDriver, LayoutProvider, OutputMode, Renderer, Settings,
};

/// Totals over a whole run
#[derive(Debug, Default)]
struct RunSummary {
    frames: u64,
    balls: usize,
    grounded: usize,
    obstacle_hits: usize,
    ball_contacts: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::from_file(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    log::info!(
        "Ball Drop starting: seed {}, viewport {}x{}, {} frames, output {}",
        settings.seed,
        settings.viewport.width,
        settings.viewport.height,
        settings.frames,
        settings.output.as_str()
    );

    let start = Instant::now();
    match settings.output {
        OutputMode::JsonLines => {
            let out = BufWriter::new(std::io::stdout().lock());
            let renderer = JsonLinesRenderer::new(out).with_stats(settings.frame_stats);
            let (summary, renderer) = run(&settings, renderer)?;
            renderer.into_inner().flush()?;
            log::info!("{:?}", summary);
        }
        OutputMode::Summary => {
            let (summary, buffer) = run(&settings, InstanceBuffer::new())?;
            println!(
                "{} frames, {} balls ({} resting on the floor)",
                summary.frames, summary.balls, summary.grounded
            );
            println!(
                "{} obstacle hits, {} ball contacts, {} bytes of instance data in the last frame",
                summary.obstacle_hits,
                summary.ball_contacts,
                buffer.as_bytes().len()
            );
        }
    }
    log::info!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

fn run<R: Renderer>(settings: &Settings, renderer: R) -> anyhow::Result<(RunSummary, R)> {
    let layout: Box<dyn LayoutProvider> = match settings.fixed_layout() {
        Some(layout) => Box::new(FixedLayout(layout)),
        None => Box::new(CenteredControls::new(settings.viewport)),
    };
    let state = SimState::new(settings.seed, settings.viewport);
    let mut driver = FrameDriver::new(state, layout, renderer);

    let mut summary = RunSummary::default();
    for frame in 0..settings.frames {
        if settings.spawns_before(frame, driver.state().spawned()) {
            driver.spawn();
        }
        let stats = driver.frame()?;

        summary.frames = stats.frame;
        summary.balls = stats.balls;
        summary.grounded = stats.grounded;
        summary.obstacle_hits += stats.obstacle_hits;
        summary.ball_contacts += stats.ball_contacts;
    }

    let (_, _, renderer) = driver.into_parts();
    Ok((summary, renderer))
}
