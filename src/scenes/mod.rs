pub mod house;
pub mod owl;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::traits::SceneProvider;

pub use house::HouseScene;
pub use owl::OwlScene;

/// Scenes selectable at launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    #[default]
    House,
    Owl,
}

impl SceneKind {
    pub fn build(self) -> Box<dyn SceneProvider> {
        match self {
            SceneKind::House => Box::new(HouseScene::new()),
            SceneKind::Owl => Box::new(OwlScene::new()),
        }
    }
}

pub fn create_house_scene() -> HouseScene {
    HouseScene::new()
}

pub fn create_owl_scene() -> OwlScene {
    OwlScene::new()
}
