use crate::geom::angle_delta;

/// Samples in the velocity window; about 170ms of history at 60Hz.
pub const LOG_SIZE: usize = 10;

/// Converts |rpm| into a drag multiplier.
pub const SPEED_SCALE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    timestamp_ms: u64,
    degrees: f64,
}

/// Estimates how fast the user is spinning, in signed revolutions per minute.
///
/// Keeps a circular log of `(timestamp, angle)` readings: the entry at
/// `index` is the oldest, the one before it the most recent. A small window
/// deliberately smooths over per-frame touch noise instead of reporting an
/// instant, jittery velocity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RpmTracker {
    log: [Option<Sample>; LOG_SIZE],
    index: usize,
    rpm: Option<f64>,
}

impl RpmTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest estimate, or `None` before the first sample of a gesture.
    pub fn rpm(&self) -> Option<f64> {
        self.rpm
    }

    /// Records a reading and recomputes the estimate by summing the deltas
    /// between adjacent log entries. Clobbering the oldest entry with the
    /// newest before the walk lets `LOG_SIZE` cells cover `LOG_SIZE + 1`
    /// readings. Zero elapsed time (a single sample) yields exactly 0.
    pub fn sample(&mut self, timestamp_ms: u64, degrees: f64) -> f64 {
        let mut last = self.log[self.index];
        self.log[self.index] = Some(Sample {
            timestamp_ms,
            degrees,
        });

        let mut total_degrees = 0.0;
        let mut total_time_ms = 0i64;
        for j in 0..LOG_SIZE {
            let next = self.log[(self.index + j + 1) % LOG_SIZE];
            if let (Some(previous), Some(next)) = (last, next) {
                total_degrees += angle_delta(previous.degrees, next.degrees);
                total_time_ms += next.timestamp_ms as i64 - previous.timestamp_ms as i64;
            }
            last = next;
        }

        let rpm = if total_time_ms != 0 {
            total_degrees * 60_000.0 / total_time_ms as f64 / 360.0
        } else {
            0.0
        };
        self.rpm = Some(rpm);
        self.index = (self.index + 1) % LOG_SIZE;
        rpm
    }

    /// Clears the log so a future gesture starts clean.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The multiplier applied to incoming angular deltas: at least one, so slow
/// drags keep one-degree-per-degree precision, and proportional to spin speed
/// above that. Unknown velocity is neutral.
pub fn speed_multiplier(rpm: Option<f64>, speed_scale: f64) -> f64 {
    match rpm {
        Some(rpm) => (rpm.abs() * speed_scale).max(1.0),
        None => 1.0,
    }
}
