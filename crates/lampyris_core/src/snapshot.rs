use lampyris_data::{Domain, Firefly, FlashState, FunctionKey, Gender, Position};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a renderer needs to draw one firefly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FireflySnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub gender: Gender,
    pub intensity: f64,
    pub state: FlashState,
    pub trail: Vec<Position>,
}

impl From<&Firefly> for FireflySnapshot {
    fn from(f: &Firefly) -> Self {
        Self {
            id: f.id,
            x: f.position.x,
            y: f.position.y,
            value: f.value,
            gender: f.gender,
            intensity: f.flash.intensity,
            state: f.flash.state(),
            trail: f.trail.iter().copied().collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SwarmSnapshot {
    pub generation: u64,
    pub function: FunctionKey,
    pub domain: Domain,
    pub best: Option<FireflySnapshot>,
    pub fireflies: Vec<FireflySnapshot>,
}
