use crate::common::TestApp;
use tilt_gravity::components::{ContactEvent, ContactPhase};

/// Waits for a specific condition to be met within a maximum number of steps
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&TestApp) -> bool,
{
    for _ in 0..max_steps {
        if condition(test_app) {
            return true;
        }
        test_app.run_frame();
    }
    condition(test_app)
}

/// Reports a contact phase for the player body
pub fn send_player_contact(test_app: &mut TestApp, phase: ContactPhase) {
    let player = test_app.player.expect("test app has no player");
    test_app.send_event(ContactEvent::new(player, phase));
}

/// Helper to run a simulation for a specific duration
pub fn simulate_duration(test_app: &mut TestApp, duration: f32) {
    let steps = (duration / test_app.time_step).ceil() as usize;
    test_app.run_steps(steps);
}
