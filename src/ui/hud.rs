use super::UiState;
use crate::config::SlingConfig;
use crate::launch::LaunchState;
use crate::operation::{Operation, Operations};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use bevy_rapier::plugin::{RapierConfiguration, RapierContext};
use bevy_rapier::rapier::pipeline::DebugRenderMode;
use bevy_rapier::render::DebugRenderContext;

pub(super) fn update_ui(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut config: ResMut<SlingConfig>,
    mut rapier_config: ResMut<RapierConfiguration>,
    mut debug_render: ResMut<DebugRenderContext>,
    mut operations: ResMut<Operations>,
    state: Res<LaunchState>,
    physics: Res<RapierContext>,
) {
    egui::Window::new("slingshot")
        .resizable(false)
        .title_bar(false)
        .fixed_pos([5.0, 5.0])
        .show(contexts.ctx_mut(), |ui| {
            ui.label(format!("phase: {}", state.phase.label()));
            ui.label(format!("launches: {}", state.attempts));
            ui.separator();

            ui.horizontal(|ui| {
                let play_pause = if ui_state.running { "⏸ Pause" } else { "▶ Play" };
                if ui.button(play_pause).clicked() {
                    rapier_config.physics_pipeline_active =
                        !rapier_config.physics_pipeline_active;
                    ui_state.running = !ui_state.running;
                }
                if ui.button("⟲ Reset").clicked() {
                    operations.push(Operation::ResetProjectile);
                }
                if ui.button("❌ Clear blocks").clicked() {
                    operations.push(Operation::ClearBlocks);
                }
            });
            ui.separator();

            ui.add(
                egui::Slider::new(&mut config.impulse_scale, 0.01..=1.0).text("impulse scale"),
            );
            ui.add(egui::Slider::new(&mut config.reset_margin, 0.0..=400.0).text("reset margin"));

            ui.collapsing("🐞 Debug render", |ui| {
                debug_render_ui(ui, &mut debug_render);
            });

            ui.collapsing("ℹ Simulation infos", |ui| {
                ui.label(stats_string(&physics));
            });
        });
}

fn debug_render_ui(ui: &mut egui::Ui, debug_render: &mut DebugRenderContext) {
    ui.checkbox(&mut debug_render.enabled, "Enabled");
    ui.separator();

    let mode = &mut debug_render.pipeline.mode;

    let items = [
        (DebugRenderMode::COLLIDER_SHAPES, "Colliders"),
        (DebugRenderMode::RIGID_BODY_AXES, "Bodies"),
        (DebugRenderMode::IMPULSE_JOINTS, "Joints"),
        (DebugRenderMode::CONTACTS, "Contacts"),
    ];

    for (bits, text) in items {
        let mut enabled = mode.contains(bits);
        ui.checkbox(&mut enabled, text);
        mode.set(bits, enabled);
    }
}

fn stats_string(physics: &RapierContext) -> String {
    format!(
        r#"Rigid-bodies: {}
Colliders: {}
Impulse joints: {}"#,
        physics.bodies.len(),
        physics.colliders.len(),
        physics.impulse_joints.len(),
    )
}
