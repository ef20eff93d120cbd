///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use crate::spin::SpinAnimation;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod config;
pub mod editing;
pub mod error;
pub mod sector;
pub mod spin;
pub mod wheel;
pub mod wheel_data;

pub use config::WheelConfig;
pub use editing::{SectorEditController, SectorEditing, ADD_SECTOR, REMOVE_SECTOR};
pub use error::WheelError;
pub use sector::{Sector, SECTOR_PALETTE};
pub use wheel::{WheelWidget, SPIN_FINISHED, SPIN_WHEEL};
pub use wheel_data::{landing_index, SpinPlan, WheelData, MIN_SECTORS};

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// WheelState
//
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, PartialEq, Debug)]
pub enum WheelState {
    Idle,
    Spinning(SpinAnimation),
}
