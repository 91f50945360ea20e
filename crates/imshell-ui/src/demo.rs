//! The built-in demo window.

use egui::{CollapsingHeader, Context, Slider, Window};

/// Widget state the demo window keeps across frames.
#[derive(Debug, Clone)]
pub struct DemoWindowState {
    float_value: f32,
    toggle_on: bool,
    click_count: u32,
}

impl Default for DemoWindowState {
    fn default() -> Self {
        Self {
            float_value: 0.5,
            toggle_on: true,
            click_count: 0,
        }
    }
}

/// Builds the demo window.
///
/// `open` is cleared by the window's own close button; the caller skips this
/// function entirely while the flag is false. `clear_color` is the frame
/// clear color in RGBA, editable from the window.
pub fn show_demo_window(
    ctx: &Context,
    open: &mut bool,
    clear_color: &mut [f32; 4],
    state: &mut DemoWindowState,
) {
    Window::new("imshell demo")
        .open(open)
        .default_width(320.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.label("An immediate-mode UI, rebuilt and redrawn every frame.");
            ui.separator();

            CollapsingHeader::new("Widgets")
                .default_open(true)
                .show(ui, |ui| {
                    ui.checkbox(&mut state.toggle_on, "Checkbox");
                    ui.add(Slider::new(&mut state.float_value, 0.0..=1.0).text("float"));

                    ui.horizontal(|ui| {
                        if ui.button("Button").clicked() {
                            state.click_count += 1;
                        }
                        ui.label(format!("clicked {} times", state.click_count));
                    });
                });

            CollapsingHeader::new("Style")
                .default_open(false)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Clear color:");
                        ui.color_edit_button_rgba_unmultiplied(clear_color);
                    });
                });

            ui.separator();
            let dt = ctx.input(|i| i.stable_dt);
            ui.label(format!(
                "frame time: {:.2} ms ({:.0} fps)",
                f64::from(dt) * 1000.0,
                f64::from(1.0 / dt.max(1e-6))
            ));
        });
}
