use std::time::{Duration, Instant};

use crate::animation::sampling::linspace;
use crate::config::AnimationConfig;
use crate::error::AnimationError;
use crate::wave::{wave, wave_into, WaveParams};

/// Where the driver is within the frame sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Not started, or wrapped around after the last frame
    Idle,
    /// Next tick renders `frame`
    Stepping { frame: usize },
    /// Last frame rendered and looping is off
    Complete,
}

/// One rendered animation frame
#[derive(Debug)]
pub struct Frame<'a> {
    pub index: usize,
    pub time: f64,
    pub positions: &'a [f64],
    pub displacement: &'a [f64],
}

/// Steps the wave through the frame time sequence.
///
/// Owns the spatial grid and a single displacement buffer that every tick
/// overwrites; callers copy what they need out of the returned [`Frame`].
pub struct AnimationDriver {
    grid: Vec<f64>,
    frame_times: Vec<f64>,
    params: WaveParams,
    displacement: Vec<f64>,
    looping: bool,
    state: DriverState,
}

impl AnimationDriver {
    pub fn new(config: &AnimationConfig, params: WaveParams) -> Self {
        let grid = linspace(config.x_range.0, config.x_range.1, config.grid_points);
        let frame_times = linspace(config.time_range.0, config.time_range.1, config.frame_count);
        let displacement = vec![0.0; grid.len()];

        Self {
            grid,
            frame_times,
            params,
            displacement,
            looping: config.looping,
            state: DriverState::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn frame_times(&self) -> &[f64] {
        &self.frame_times
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Displacement at t = 0, used to seed the line before the first tick
    pub fn initial_displacement(&self) -> Vec<f64> {
        wave(&self.grid, 0.0, &self.params)
    }

    /// Begin stepping from the first frame
    pub fn start(&mut self) {
        self.state = if self.frame_times.is_empty() {
            DriverState::Complete
        } else {
            DriverState::Stepping { frame: 0 }
        };
        log::debug!("Animation started with {} frames", self.frame_times.len());
    }

    /// Render the next frame.
    ///
    /// Returns `Ok(None)` once the sequence is complete. An `Idle` driver
    /// starts itself, which is how a looping run wraps around.
    pub fn tick(&mut self) -> Result<Option<Frame<'_>>, AnimationError> {
        if self.state == DriverState::Idle {
            self.start();
        }

        let index = match self.state {
            DriverState::Stepping { frame } => frame,
            DriverState::Idle | DriverState::Complete => return Ok(None),
        };

        let time = self.frame_times[index];
        wave_into(&self.grid, time, &self.params, &mut self.displacement);

        if self.displacement.iter().any(|y| !y.is_finite()) {
            self.state = DriverState::Complete;
            return Err(AnimationError::NonFinite { frame: index, time });
        }

        self.state = if index + 1 < self.frame_times.len() {
            DriverState::Stepping { frame: index + 1 }
        } else if self.looping {
            log::debug!("Frame sequence exhausted, looping");
            DriverState::Idle
        } else {
            DriverState::Complete
        };

        log::trace!("Frame {} at t = {:.4}", index, time);

        Ok(Some(Frame {
            index,
            time,
            positions: &self.grid,
            displacement: &self.displacement,
        }))
    }
}

/// Deadline of the frame after one that was due at `prev` and ran at `now`.
///
/// On-time frames stay on the fixed `interval` grid. A frame that ran past
/// its successor's deadline restarts the grid from `now`, so missed frames
/// are dropped rather than replayed in a burst.
pub fn next_deadline(prev: Instant, now: Instant, interval: Duration) -> Instant {
    let next = prev + interval;
    if next < now {
        now + interval
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn driver(looping: bool) -> AnimationDriver {
        let config = AnimationConfig {
            looping,
            ..AnimationConfig::default()
        };
        AnimationDriver::new(&config, WaveParams::default())
    }

    #[test]
    fn test_default_sequences() {
        let driver = driver(true);
        assert_eq!(driver.grid().len(), 1000);
        assert_eq!(driver.grid()[0], -10.0);
        assert_eq!(driver.grid()[999], 10.0);
        assert_eq!(driver.frame_times().len(), 100);
        assert_eq!(driver.frame_times()[0], 0.0);
        assert_eq!(driver.frame_times()[99], TAU);
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn test_full_run_matches_direct_evaluation() {
        let mut driver = driver(false);
        let grid = driver.grid().to_vec();
        let times = driver.frame_times().to_vec();
        let params = driver.params().clone();

        let mut frames = Vec::new();
        while let Some(frame) = driver.tick().unwrap() {
            assert_eq!(frame.index, frames.len());
            assert_eq!(frame.time, times[frame.index]);
            assert_eq!(frame.positions, &grid[..]);
            frames.push(frame.displacement.to_vec());
        }

        assert_eq!(frames.len(), 100);
        for (frame, &t) in frames.iter().zip(&times) {
            assert_eq!(frame.len(), 1000);
            assert_eq!(frame, &wave(&grid, t, &params));
        }
        for i in 0..frames.len() {
            for j in (i + 1)..frames.len() {
                assert_ne!(frames[i], frames[j], "frames {} and {} coincide", i, j);
            }
        }
    }

    #[test]
    fn test_state_transitions_without_looping() {
        let mut driver = driver(false);
        driver.start();
        assert_eq!(driver.state(), DriverState::Stepping { frame: 0 });

        driver.tick().unwrap();
        assert_eq!(driver.state(), DriverState::Stepping { frame: 1 });

        for _ in 1..100 {
            assert!(driver.tick().unwrap().is_some());
        }
        assert_eq!(driver.state(), DriverState::Complete);
        assert!(driver.tick().unwrap().is_none());
    }

    #[test]
    fn test_looping_wraps_to_first_frame() {
        let mut driver = driver(true);
        let first = driver.tick().unwrap().unwrap().displacement.to_vec();
        for _ in 1..100 {
            driver.tick().unwrap();
        }
        assert_eq!(driver.state(), DriverState::Idle);

        let frame = driver.tick().unwrap().unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.time, 0.0);
        assert_eq!(frame.displacement, &first[..]);
    }

    #[test]
    fn test_empty_frame_sequence_completes() {
        let config = AnimationConfig {
            frame_count: 0,
            ..AnimationConfig::default()
        };
        let mut driver = AnimationDriver::new(&config, WaveParams::default());
        driver.start();
        assert_eq!(driver.state(), DriverState::Complete);
        assert!(driver.tick().unwrap().is_none());
    }

    #[test]
    fn test_initial_displacement_is_time_zero() {
        let driver = driver(true);
        let expected = wave(driver.grid(), 0.0, driver.params());
        assert_eq!(driver.initial_displacement(), expected);
    }

    #[test]
    fn test_next_deadline_on_time() {
        let prev = Instant::now();
        let interval = Duration::from_millis(100);
        let now = prev + Duration::from_millis(3);
        assert_eq!(next_deadline(prev, now, interval), prev + interval);
    }

    #[test]
    fn test_next_deadline_exactly_at_next_frame() {
        let prev = Instant::now();
        let interval = Duration::from_millis(100);
        assert_eq!(next_deadline(prev, prev + interval, interval), prev + interval);
    }

    #[test]
    fn test_next_deadline_late_skips_missed_frames() {
        let prev = Instant::now();
        let interval = Duration::from_millis(100);
        let now = prev + Duration::from_millis(350);
        assert_eq!(next_deadline(prev, now, interval), now + interval);
    }

    #[test]
    fn test_default_frame_interval() {
        let config = AnimationConfig::default();
        assert_eq!(config.frame_interval, Duration::from_millis(100));
        assert!(config.looping);
    }

    #[test]
    fn test_non_finite_aborts() {
        let params = WaveParams::new(f64::NAN, -0.3, 1.0, 2.0, 1.0, 9.92);
        let mut driver = AnimationDriver::new(&AnimationConfig::default(), params);
        let err = driver.tick().unwrap_err();
        assert_eq!(err, AnimationError::NonFinite { frame: 0, time: 0.0 });
        assert_eq!(driver.state(), DriverState::Complete);
    }
}
