use bevy::{
    app::AppExit,
    ecs::{
        change_detection::DetectChanges,
        event::EventReader,
        query::With,
        system::{Commands, Local, Query, Res, ResMut},
    },
    input::{
        ButtonState,
        mouse::{MouseButton, MouseScrollUnit},
        touch::TouchPhase,
    },
    log::{debug, info},
    math::Vec2,
    window::{PrimaryWindow, Window, WindowEvent},
};

use crate::camera::{components::OrbitCamera, config::OrbitSettings};
use crate::input::tracker::InputTracker;

/// Acquires the input subscription: the tracker exists for as long as the
/// orbit controls are live.
pub fn init_input_tracker(
    mut commands: Commands,
    settings: Res<OrbitSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let mut tracker = InputTracker::new(&settings);
    if let Ok(window) = windows.single() {
        tracker.set_viewport(window.width(), window.height());
    }
    info!("Orbit controls live, viewport {}", tracker.viewport());
    commands.insert_resource(tracker);
}

/// Releases the input subscription once the app is exiting.
pub fn teardown_on_exit(mut commands: Commands, mut exits: EventReader<AppExit>) {
    if exits.read().next().is_some() {
        commands.remove_resource::<InputTracker>();
        info!("Orbit controls torn down");
    }
}

// Feeds window input into the tracker in arrival order, one event at a time.
pub fn track_pointer_input(
    mut tracker: ResMut<InputTracker>,
    settings: Res<OrbitSettings>,
    mut cursor: Local<Option<Vec2>>,
    mut active_touch: Local<Option<u64>>,
    mut window_events: EventReader<WindowEvent>,
    cameras: Query<&OrbitCamera>,
) {
    if settings.is_changed() {
        tracker.reclamp(&settings);
    }

    let distance = cameras
        .single()
        .map(OrbitCamera::distance)
        .unwrap_or(settings.initial_distance);

    for event in window_events.read() {
        match event {
            WindowEvent::WindowResized(resized) => {
                tracker.set_viewport(resized.width, resized.height);
            }
            WindowEvent::MouseButtonInput(input) if input.button == MouseButton::Left => {
                match input.state {
                    ButtonState::Pressed => {
                        if let Some(position) = *cursor {
                            tracker.on_drag_start(position);
                            debug!("Drag started at {position}");
                        }
                    }
                    ButtonState::Released => {
                        if tracker.is_dragging() {
                            debug!("Drag ended");
                        }
                        tracker.on_drag_end();
                    }
                }
            }
            WindowEvent::CursorMoved(moved) => {
                *cursor = Some(moved.position);
                tracker.on_drag_move(moved.position, distance, &settings);
                tracker.on_touch_move(moved.position);
            }
            WindowEvent::CursorLeft(_) => {
                *cursor = None;
                tracker.on_drag_cancel();
                tracker.clear_pointer();
            }
            WindowEvent::WindowFocused(focus) if !focus.focused => {
                tracker.on_drag_cancel();
            }
            WindowEvent::MouseWheel(wheel) => {
                let delta = match wheel.unit {
                    MouseScrollUnit::Line => wheel.y * settings.wheel_line_units,
                    MouseScrollUnit::Pixel => wheel.y,
                };
                tracker.on_wheel(delta, &settings);
            }
            WindowEvent::TouchInput(touch) => {
                // single pointer only: the first finger down owns the drag
                if active_touch.is_some_and(|id| id != touch.id) {
                    continue;
                }
                match touch.phase {
                    TouchPhase::Started => {
                        *active_touch = Some(touch.id);
                        tracker.on_drag_start(touch.position);
                        tracker.on_touch_move(touch.position);
                    }
                    TouchPhase::Moved => {
                        tracker.on_drag_move(touch.position, distance, &settings);
                        tracker.on_touch_move(touch.position);
                    }
                    TouchPhase::Ended => {
                        *active_touch = None;
                        tracker.on_drag_end();
                    }
                    TouchPhase::Canceled => {
                        *active_touch = None;
                        tracker.on_drag_cancel();
                    }
                }
            }
            _ => {}
        }
    }
}
