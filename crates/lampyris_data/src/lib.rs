pub mod data;

pub use data::domain::{Domain, Optimum, Position};
pub use data::firefly::{Firefly, Flash, FlashState, Gender, Trail, TRAIL_CAPACITY};
pub use data::params::{
    FunctionKey, ParamUpdate, ParseFunctionKeyError, SwarmParams, SwarmStats,
};
