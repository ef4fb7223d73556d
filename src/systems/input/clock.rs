use bevy::prelude::*;

use crate::resources::FrameClock;

pub fn frame_clock_system(time: Res<Time>, mut clock: ResMut<FrameClock>) {
    clock.update(time.delta_secs());
}
