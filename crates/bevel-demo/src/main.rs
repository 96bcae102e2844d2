//! Headless walkthrough of the bevel controls.
//!
//! Builds a small window layout, replays a scripted sequence of pointer
//! events and animation ticks, and logs what each frame would draw.

use std::time::Duration;

use anyhow::{Context, Result};
use bevel_engine::logging::{init_logging, LoggingConfig};
use bevel_ui::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut ui = UiScene::new(TickerConfig::default()).clear_color(named::white_smoke());
    let ids = build(&mut ui)?;
    ui.start();

    frame(&mut ui, "initial");

    for (label, id) in [("low", ids.radios[0]), ("high", ids.radios[2]), ("high again", ids.radios[2])] {
        let center = ui.tree().rect(id).context("radio vanished")?.center();
        ui.pointer_moved(center);
        let changes = ui.click(center, MouseButton::Primary);
        log::info!("click {label}: {} checked-state change(s)", changes.len());
        for c in &changes {
            log::info!("  {:?} -> {}", c.id, c.checked);
        }
    }

    let switch_center = ui.tree().rect(ids.switch).context("switch vanished")?.center();
    ui.click(switch_center, MouseButton::Primary);

    ui.tree_mut()
        .get_mut::<Battery>(ids.battery)
        .context("battery widget missing")?
        .set_value(72.0);
    ui.tree_mut()
        .get_mut::<Spinner>(ids.spinner)
        .context("spinner widget missing")?
        .set_value(64.0);

    let mut frames = 0;
    loop {
        ui.advance(FRAME);
        frames += 1;
        let battery = ui.tree().get::<Battery>(ids.battery).context("battery widget missing")?;
        if !battery.is_animating() {
            log::info!("battery settled at {}% after {frames} frames", battery.current());
            break;
        }
    }
    frame(&mut ui, "after animation");

    drag_window();
    Ok(())
}

struct Ids {
    radios: [WidgetId; 3],
    switch: WidgetId,
    battery: WidgetId,
    spinner: WidgetId,
}

fn build(ui: &mut UiScene) -> Result<Ids> {
    let window = ui.insert(
        Panel::new().background(Color::WHITE).corner_radii(CornerRadii::all(12)),
        Rect::new(0.0, 0.0, 480.0, 320.0),
    );
    let tree = ui.tree_mut();

    for (i, kind) in [ControlBoxKind::Minimize, ControlBoxKind::Maximize, ControlBoxKind::Close]
        .into_iter()
        .enumerate()
    {
        let x = 384.0 + i as f32 * 32.0;
        tree.insert_child(
            window,
            ControlBox::new(kind).on_click(|cmd| log::info!("caption button -> {cmd:?}")),
            Rect::new(x, 0.0, 32.0, 32.0),
        )?;
    }

    let group = tree.insert_child(
        window,
        Panel::new().background(Color::TRANSPARENT),
        Rect::new(16.0, 48.0, 300.0, 40.0),
    )?;
    let mut radios = [group; 3];
    for (i, (slot, label)) in radios.iter_mut().zip(["Low", "Mid", "High"]).enumerate() {
        let button = Button::new(label)
            .role(ControlRole::Radio)
            .border_width(2.0)
            .corner_radii_str(if i == 1 { "0" } else { "16, 4, 4, 16" })
            .context("bad corner radii")?
            .on_checked_changed(move |on| log::debug!("{label} checked = {on}"));
        *slot = tree.insert_child(group, button, Rect::new(16.0 + i as f32 * 100.0, 48.0, 92.0, 36.0))?;
    }

    let switch = tree.insert_child(
        window,
        Switch::new().on_change(|on| log::info!("switch -> {on}")),
        Rect::new(340.0, 52.0, 60.0, 28.0),
    )?;

    let battery = tree.insert_child(
        window,
        Battery::new().shape(BatteryShape::Capsule).motion(MotionProfile::Smooth).glow(true).charging(true),
        Rect::new(16.0, 120.0, 200.0, 60.0),
    )?;

    let spinner = tree.insert_child(
        window,
        Spinner::new().decimals(1),
        Rect::new(260.0, 110.0, 100.0, 100.0),
    )?;

    tree.insert_child(
        window,
        PictureFrame::new().circle(true).image(ImageHandle(1)).border(2.0, named::medium_slate_blue()),
        Rect::new(16.0, 200.0, 96.0, 96.0),
    )?;

    Ok(Ids { radios, switch, battery, spinner })
}

fn frame(ui: &mut UiScene, label: &str) {
    let dirty = ui.take_dirty().len();
    let list = ui.paint();
    let summary: Vec<String> = list.summary().iter().map(|(k, n)| format!("{n} {k}")).collect();
    log::info!("frame '{label}': {dirty} dirty widget(s), {} command(s): {}", list.len(), summary.join(", "));
    for item in list.iter_in_paint_order() {
        log::trace!("  z={:>5} {}", item.key.z.0, item.cmd.kind());
    }
}

fn drag_window() {
    let mut dragger = WindowDragger::new();
    let mut window = WindowGeometry { position: Vec2::new(100.0, 100.0), size: Vec2::new(1920.0, 1080.0) };
    dragger.set_restore_size(Some(Vec2::new(480.0, 320.0)));

    let grab = Vec2::new(40.0, 10.0);
    dragger.press(grab, MouseButton::Primary);
    let start = window.position + grab;
    for step in 1..=3 {
        let screen = start + Vec2::new(step as f32 * 15.0, step as f32 * 5.0);
        // The dragger sees positions relative to the window as it is now.
        let local = screen - window.position;
        if let Some(mv) = dragger.moved(local, window) {
            if let Some(size) = mv.restore_size {
                window.size = size;
            }
            window.position = mv.position;
            log::info!("cursor {screen:?} -> window {:?} size {:?}", window.position, window.size);
        }
    }
    dragger.release(MouseButton::Primary);
}
