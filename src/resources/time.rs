use bevy::prelude::*;

use crate::utils::SMOOTH_DELTA_WEIGHT;

/// Per-frame delta times shared by the controllers.
///
/// `delta` is the plain frame delta; `smoothed_delta` is an exponential
/// moving average that damps single-frame spikes in interpolation factors.
#[derive(Resource, Reflect, Debug, Clone, Default)]
#[reflect(Resource)]
pub struct FrameClock {
    delta: f32,
    smoothed_delta: f32,
    frame_count: u64,
    samples: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, delta: f32) {
        self.delta = delta.max(0.0);
        self.frame_count += 1;

        if self.delta <= 0.0 {
            return;
        }

        if self.samples == 0 {
            self.smoothed_delta = self.delta;
        } else {
            self.smoothed_delta += (self.delta - self.smoothed_delta) * SMOOTH_DELTA_WEIGHT;
        }
        self.samples += 1;
    }

    pub fn delta_secs(&self) -> f32 {
        self.delta
    }

    pub fn smoothed_delta_secs(&self) -> f32 {
        self.smoothed_delta
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
