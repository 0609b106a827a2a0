pub mod feedback;
pub mod materials;
pub mod scene;

use bevy::prelude::*;

/// Everything that needs a renderer: scene setup and shape materials.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((scene::ScenePlugin, materials::MaterialsPlugin));
    }
}
