use clap::{Parser, Subcommand};
use jogdial::geom::{self, Point};
use jogdial::ring::RingFrame;
use jogdial::wheel::WheelFrame;
use jogdial::{ClockRing, InputEvent, JogWheel, PointerId, RingEvent, WheelEvent, config};

const CENTER: Point = Point { x: 200.0, y: 200.0 };
const RADIUS: f64 = 150.0;
const FRAME_MS: u64 = 1000 / 60;

#[derive(Parser, Debug)]
#[command(name = "jogdial-demo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Replay a synthetic drag around the jog wheel and print what the host
    /// would see.
    Spin {
        /// Number of wedges around the dial
        #[arg(short, long, default_value_t = 4)]
        targets: usize,

        /// The wedge to press on
        #[arg(long, default_value_t = 0)]
        target: usize,

        /// Degrees of rotation to sweep; negative spins counter-clockwise
        #[arg(short, long, default_value_t = 360.0)]
        degrees: f64,

        /// How long the drag takes, in milliseconds
        #[arg(long, default_value_t = 1000)]
        duration_ms: u64,

        /// Starting value for every target
        #[arg(long, default_value_t = 0)]
        start_value: i64,
    },
    /// Sweep a duration around the clock ring.
    Clock {
        /// Wall-clock start, minutes since midnight
        #[arg(long, default_value_t = 600)]
        start: u16,

        /// Degrees past the start angle to drag to
        #[arg(short, long, default_value_t = 90.0)]
        sweep: f64,
    },
    /// Write the default config file if none exists and print its path.
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Spin {
            targets,
            target,
            degrees,
            duration_ms,
            start_value,
        } => spin(targets, target, degrees, duration_ms, start_value),
        Commands::Clock { start, sweep } => clock(start, sweep),
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn spin(
    targets: usize,
    target: usize,
    degrees: f64,
    duration_ms: u64,
    start_value: i64,
) -> anyhow::Result<()> {
    anyhow::ensure!(target < targets, "target {target} out of range");

    let dial_config = config::load_or_default();
    let mut wheel = JogWheel::with_config(targets, dial_config.wheel);
    wheel.set_center(CENTER);
    wheel.set_values(vec![start_value; targets]);

    let mut now = 0;
    let mut angle = wheel.layout().target_to_angle(target);
    apply_wheel(
        &mut wheel,
        InputEvent::Press {
            pointer: PointerId::PRIMARY,
            position: geom::point_on_circle(CENTER, RADIUS, angle),
            timestamp_ms: now,
        },
    );

    let frames = duration_ms.div_ceil(FRAME_MS).max(1);
    let step = degrees / frames as f64;
    for _ in 0..frames {
        now += FRAME_MS;
        angle += step;
        apply_wheel(
            &mut wheel,
            InputEvent::Move {
                pointer: PointerId::PRIMARY,
                position: geom::point_on_circle(CENTER, RADIUS, angle),
                timestamp_ms: now,
            },
        );
        if wheel.next_tick_ms().is_some_and(|due| now >= due) {
            wheel.tick(now);
        }
    }

    let frame = WheelFrame::capture(&wheel);
    log::info!(
        "peak multiplier {:.2}, {} ticks on screen",
        frame.multiplier,
        frame.ticks.len()
    );

    apply_wheel(
        &mut wheel,
        InputEvent::Release {
            pointer: PointerId::PRIMARY,
            position: geom::point_on_circle(CENTER, RADIUS, angle),
            timestamp_ms: now + FRAME_MS,
        },
    );
    Ok(())
}

fn apply_wheel(wheel: &mut JogWheel, event: InputEvent) {
    let action = wheel.handle_event(event);
    match action.event {
        Some(WheelEvent::Selecting { target, value }) => {
            log::debug!("selecting {value} on target {target}")
        }
        Some(WheelEvent::Selected { target, value }) => {
            wheel.set_value(target, value);
            println!("target {target} selected {value}");
        }
        Some(WheelEvent::Cancelled) => println!("cancelled"),
        None => {}
    }
}

fn clock(start: u16, sweep: f64) -> anyhow::Result<()> {
    let dial_config = config::load_or_default();
    let mut ring = ClockRing::with_config(dial_config.ring);
    ring.set_layout(400.0, 400.0);
    ring.set_start(start);

    let dial_radius = 213.0;
    let mut angle = ring.start_angle() as f64;
    let mut now = 0;
    apply_ring(
        &mut ring,
        InputEvent::Press {
            pointer: PointerId::PRIMARY,
            position: geom::point_on_circle(CENTER, dial_radius, angle + 1.0),
            timestamp_ms: now,
        },
    );
    let steps = (sweep.abs() / 3.0).ceil() as u64;
    for _ in 0..steps {
        now += FRAME_MS;
        angle += sweep / steps as f64;
        apply_ring(
            &mut ring,
            InputEvent::Move {
                pointer: PointerId::PRIMARY,
                position: geom::point_on_circle(CENTER, dial_radius, angle),
                timestamp_ms: now,
            },
        );
    }
    apply_ring(
        &mut ring,
        InputEvent::Release {
            pointer: PointerId::PRIMARY,
            position: geom::point_on_circle(CENTER, dial_radius, angle),
            timestamp_ms: now + FRAME_MS,
        },
    );

    let frame = RingFrame::capture(&ring);
    println!(
        "{} {} (sweep {:.0}°, ends {})",
        frame.duration.text,
        frame.duration.unit,
        frame.sweep_angle,
        end_time(start, frame.minutes),
    );
    Ok(())
}

fn apply_ring(ring: &mut ClockRing, event: InputEvent) {
    for ring_event in ring.handle_event(event).events {
        match ring_event {
            RingEvent::MinutesChanged(minutes) => log::debug!("duration {minutes} minutes"),
            RingEvent::VolumeChanged(volume) => log::debug!("volume {volume:.2}"),
            RingEvent::VolumeSliding(sliding) => log::debug!("volume sliding: {sliding}"),
        }
    }
}

fn end_time(start_minute_of_day: u16, minutes: u16) -> String {
    let end = (start_minute_of_day + minutes) % 1440;
    format!("{:02}:{:02}", end / 60, end % 60)
}
