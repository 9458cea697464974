mod plugin;
mod sim;

use air_roll_trainer::settings::config;
use air_roll_trainer::{DrawList, GameMode};
use glam::{IVec2, Vec3};
use sim::SimHost;

/// Host frame time (120 fps). The plugin ticks at its own 50 Hz inside this.
const FRAME_DT: f32 = 1.0 / 120.0;
const SESSION_SECS: f32 = 7.0;
const REPORT_EVERY: u32 = 60;

enum ScriptEvent {
    Enter(GameMode),
    Set(&'static str, f32),
    MoveBall(Vec3),
}

fn script() -> Vec<(f32, ScriptEvent)> {
    vec![
        (0.5, ScriptEvent::Enter(GameMode::Freeplay)),
        (2.0, ScriptEvent::Set(config::SLOWDOWN_PERCENT, 30.0)),
        (3.0, ScriptEvent::Set(config::ENABLED, 0.0)),
        (3.5, ScriptEvent::Set(config::ENABLED, 1.0)),
        (4.0, ScriptEvent::MoveBall(Vec3::new(-600.0, -1200.0, 1400.0))),
        (5.0, ScriptEvent::Enter(GameMode::Menu)),
        (5.5, ScriptEvent::Enter(GameMode::CustomTraining)),
        (6.0, ScriptEvent::Set(config::HINT_SENSITIVITY, 1.0)),
    ]
}

fn main() {
    let mut host = SimHost::new();
    let mut canvas = DrawList::new(IVec2::new(1920, 1080));

    plugin::plugin_on_load(&mut host);
    if let Some(manifest) = plugin::plugin_settings_manifest() {
        println!("settings manifest:\n{manifest}");
    }
    plugin::plugin_load_settings(&mut host, r#"{ "art_slowdown_pct": 50.0 }"#);

    let mut events = script().into_iter().peekable();
    let frames = (SESSION_SECS / FRAME_DT) as u32;
    for frame in 0..frames {
        let t = frame as f32 * FRAME_DT;
        while let Some((_, event)) = events.next_if(|(at, _)| *at <= t) {
            apply(&mut host, event, t);
        }

        host.step(FRAME_DT);
        plugin::plugin_on_tick(&mut host, FRAME_DT);

        canvas.clear();
        plugin::plugin_on_draw(&mut host, &mut canvas);

        if frame % REPORT_EVERY == 0 {
            report(t, &host, &canvas);
        }
    }

    plugin::plugin_on_unload(&mut host);
    println!("final game speed: {}", host.game_speed);
}

fn apply(host: &mut SimHost, event: ScriptEvent, t: f32) {
    match event {
        ScriptEvent::Enter(mode) => {
            println!("[{t:5.2}] enter {mode:?}");
            host.enter(mode);
        }
        ScriptEvent::Set(name, value) => {
            println!("[{t:5.2}] set {name} = {value}");
            plugin::plugin_set_setting(host, name, value);
        }
        ScriptEvent::MoveBall(location) => {
            println!("[{t:5.2}] ball moved to {location}");
            host.ball = location;
        }
    }
}

fn report(t: f32, host: &SimHost, canvas: &DrawList) {
    if canvas.is_empty() {
        println!("[{t:5.2}] speed {:.2} | overlay hidden", host.game_speed);
        return;
    }
    let stats: Vec<&str> = canvas.labels().iter().map(|l| l.text.as_str()).collect();
    let hint = if canvas.lines().count() > 1 { "hint" } else { "no hint" };
    println!(
        "[{t:5.2}] speed {:.2} | {} | {}",
        host.game_speed,
        hint,
        stats.join(", ")
    );
}
