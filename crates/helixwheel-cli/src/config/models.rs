use helixwheel::core::models::sequence::Sequence;
use helixwheel::engine::config::WheelConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub sequence: Sequence,
    pub output: PathBuf,
    pub wheel: WheelConfig,
}

pub struct InspectConfig {
    pub sequence: Sequence,
    pub wheel: WheelConfig,
}
