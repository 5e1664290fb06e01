use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the scene manifest to load or fail.
    #[default]
    Loading,
    /// Scene assembled; frame loop and interaction systems active.
    Running,
}

// Transition to Running once a scene configuration has been resolved
pub fn transition_to_running(
    config: Option<Res<crate::engine::assets::scene_manifest::SceneConfig>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if config.is_some() {
        info!("→ Scene configuration ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
