///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{widget::Controller, Data, Env, Event, EventCtx, Selector, Widget};

use crate::error::WheelError;
use crate::sector::Sector;
use crate::wheel_data::WheelData;

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Command Selectors
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
pub const ADD_SECTOR: Selector = Selector::new("wheel.add-sector");
pub const REMOVE_SECTOR: Selector<usize> = Selector::new("wheel.remove-sector");

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SectorEditing
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub trait SectorEditing {
    fn wheel_mut(&mut self) -> &mut WheelData;
    fn sector_draft(&self) -> &str;
    fn clear_sector_draft(&mut self);

    /// Adds the drafted label as a new sector and clears the draft.
    fn submit_sector_draft(&mut self) -> Result<Sector, WheelError> {
        let draft = self.sector_draft().to_owned();
        let sector = self.wheel_mut().add_sector(&draft)?.clone();
        self.clear_sector_draft();
        Ok(sector)
    }

    fn remove_sector(&mut self, id: usize) -> Result<Sector, WheelError> {
        self.wheel_mut().remove_sector(id)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SectorEditController
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Default)]
pub struct SectorEditController;

impl SectorEditController {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Data + SectorEditing, W: Widget<T>> Controller<T, W> for SectorEditController {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::Command(cmd) if cmd.is(ADD_SECTOR) => {
                match data.submit_sector_draft() {
                    Ok(sector) => log::info!("Added sector #{} {:?}", sector.id, sector.text),
                    Err(err) => log::debug!("Add sector ignored: {err}"),
                }
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(REMOVE_SECTOR) => {
                if let Some(id) = cmd.get(REMOVE_SECTOR) {
                    match data.remove_sector(*id) {
                        Ok(sector) => log::info!("Removed sector #{} {:?}", sector.id, sector.text),
                        Err(err) => log::debug!("Remove sector ignored: {err}"),
                    }
                }
                ctx.set_handled();
            }
            _ => child.event(ctx, event, data, env),
        }
    }
}
