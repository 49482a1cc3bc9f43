pub use lampyris_core::{FlashLogic, MovementLogic};
pub mod config {
    pub use lampyris_core::config::*;
}
pub mod error {
    pub use lampyris_core::error::*;
}
pub mod flash {
    pub use lampyris_core::flash::*;
}
pub mod lifecycle {
    pub use lampyris_core::lifecycle::*;
}
pub mod metrics {
    pub use lampyris_core::metrics::*;
}
pub mod movement {
    pub use lampyris_core::movement::*;
}
pub mod objective {
    pub use lampyris_core::objective::*;
}
pub mod snapshot {
    pub use lampyris_core::snapshot::*;
}
pub mod swarm {
    pub use lampyris_core::swarm::*;
}
pub mod state {
    pub use lampyris_data::*;
}
