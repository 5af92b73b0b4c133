pub mod scenario;

pub use self::scenario::{PowerUpReport, ResetScenario, run};
