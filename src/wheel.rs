///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::kurbo::{BezPath, Circle, CircleSegment};
use druid::piet::{Text, TextLayout, TextLayoutBuilder};
use druid::{
    Affine, BoxConstraints, Color, Data, Env, Event, EventCtx, FontFamily, LayoutCtx, LifeCycle,
    LifeCycleCtx, PaintCtx, Point, RenderContext, Selector, Size, TimerToken, UpdateCtx, Widget,
};
use druid_color_thesaurus::{black, gray, white};
use rand::Rng;
use std::f64::consts::FRAC_PI_2;

use crate::config::WheelConfig;
use crate::sector::Sector;
use crate::spin::SpinAnimation;
use crate::wheel_data::{SpinPlan, WheelData};
use crate::WheelState;

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Command Selectors
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
pub const SPIN_WHEEL: Selector = Selector::new("wheel.spin");
/// Sent once per spin, when the landing sector has been committed.
pub const SPIN_FINISHED: Selector<Sector> = Selector::new("wheel.spin-finished");

const FALLBACK_SIZE: f64 = 400.0;
const HUB_RADIUS_RATIO: f64 = 0.08;
const POINTER_HALF_WIDTH: f64 = 12.0;
const POINTER_LENGTH: f64 = 26.0;
const RIM_WIDTH: f64 = 3.0;

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// WheelWidget
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
pub struct WheelWidget {
    config: WheelConfig,
    state: WheelState,
    spin_timer: Option<TimerToken>,
}

impl WheelWidget {
    pub fn new(config: WheelConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("{err}, falling back to the default wheel configuration");
            return Self::new(WheelConfig::default());
        }
        Self {
            config,
            state: WheelState::Idle,
            spin_timer: None,
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    /// Rotation to paint, in degrees.
    fn displayed_rotation(&self, data: &WheelData) -> f64 {
        match &self.state {
            WheelState::Spinning(animation) => animation.rotation(),
            WheelState::Idle => data.cumulative_rotation(),
        }
    }

    /// Starts a spin if the wheel is idle. The caller arms the resolution timer on success.
    fn begin_spin<R: Rng>(&mut self, data: &mut WheelData, rng: &mut R) -> Option<SpinPlan> {
        if let WheelState::Spinning(_) = self.state {
            log::debug!("Spin ignored: the wheel is already spinning");
            return None;
        }
        match data.spin(rng, &self.config) {
            Ok(plan) => {
                log::info!(
                    "Spinning from {:.0} to {:.0} degrees, landing on sector #{}",
                    plan.from,
                    plan.to,
                    plan.landing_index
                );
                self.state = WheelState::Spinning(SpinAnimation::from_plan(&plan, self.config.spin_duration));
                Some(plan)
            }
            Err(err) => {
                log::debug!("Spin ignored: {err}");
                None
            }
        }
    }

    fn arm_spin_timer(&mut self, token: TimerToken) {
        self.spin_timer = Some(token);
    }

    /// Returns true while more animation frames are needed.
    fn advance_animation(&mut self, interval: u64) -> bool {
        match &mut self.state {
            WheelState::Spinning(animation) => {
                animation.advance(interval);
                !animation.is_finished()
            }
            WheelState::Idle => false,
        }
    }

    /// Commits the spin when `token` is the armed resolution timer. Other timers are ignored.
    fn resolve_timer(&mut self, token: TimerToken, data: &mut WheelData) -> Option<Sector> {
        if self.spin_timer != Some(token) {
            return None;
        }
        self.spin_timer = None;
        self.state = WheelState::Idle;
        match data.complete_spin() {
            Ok(sector) => {
                log::info!("Wheel landed on {:?}", sector.text);
                Some(sector)
            }
            Err(err) => {
                log::warn!("Spin timer fired without a spin: {err}");
                None
            }
        }
    }

    fn wheel_geometry(&self, size: Size) -> (Point, f64) {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let radius = size.width.min(size.height) * self.config.wheel_radius_ratio;
        (center, radius)
    }
}

impl Default for WheelWidget {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

impl Widget<WheelData> for WheelWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut WheelData, _env: &Env) {
        match event {
            Event::Command(cmd) if cmd.is(SPIN_WHEEL) => {
                if self.begin_spin(data, &mut rand::thread_rng()).is_some() {
                    self.arm_spin_timer(ctx.request_timer(self.config.spin_duration));
                    ctx.request_anim_frame();
                }
                ctx.set_handled();
            }
            Event::AnimFrame(interval) => {
                if self.advance_animation(*interval) {
                    ctx.request_anim_frame();
                }
                ctx.request_paint();
            }
            Event::Timer(token) => {
                if let Some(sector) = self.resolve_timer(*token, data) {
                    ctx.submit_command(SPIN_FINISHED.with(sector));
                    ctx.request_paint();
                }
            }
            _ => {}
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &WheelData, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            ctx.request_paint();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &WheelData, data: &WheelData, _env: &Env) {
        if !old_data.same(data) {
            ctx.request_paint();
        }
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &WheelData, _env: &Env) -> Size {
        let mut size = bc.max();
        if size.width.is_infinite() {
            log::warn!("Infinite width passed to WheelWidget");
            size.width = FALLBACK_SIZE;
        }
        if size.height.is_infinite() {
            log::warn!("Infinite height passed to WheelWidget");
            size.height = FALLBACK_SIZE;
        }
        bc.constrain(size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &WheelData, _env: &Env) {
        let (center, radius) = self.wheel_geometry(ctx.size());
        if data.sectors().is_empty() || radius <= 0.0 {
            return;
        }

        let rotation = self.displayed_rotation(data).to_radians();
        let sweep = data.sector_size().to_radians();

        for (index, sector) in data.sectors().iter().enumerate() {
            let start = sector_start_angle(index, rotation, sweep);
            let color = sector.display_color().unwrap_or_else(|err| {
                log::warn!("{err}");
                gray::DAVYS_GRAY
            });
            ctx.fill(CircleSegment::new(center, radius, 0.0, start, sweep), &color);
            ctx.stroke(CircleSegment::new(center, radius, 0.0, start, sweep), &white::ALABASTER, 1.0);
            self.paint_label(ctx, sector, center, radius, start + sweep / 2.0);
        }

        ctx.stroke(Circle::new(center, radius), &black::LICORICE, RIM_WIDTH);
        ctx.fill(Circle::new(center, radius * HUB_RADIUS_RATIO), &white::ALABASTER);
        ctx.stroke(Circle::new(center, radius * HUB_RADIUS_RATIO), &black::LICORICE, RIM_WIDTH);

        let mut pointer = BezPath::new();
        pointer.move_to((center.x - POINTER_HALF_WIDTH, center.y - radius - POINTER_LENGTH / 2.0));
        pointer.line_to((center.x + POINTER_HALF_WIDTH, center.y - radius - POINTER_LENGTH / 2.0));
        pointer.line_to((center.x, center.y - radius + POINTER_LENGTH / 2.0));
        pointer.close_path();
        ctx.fill(pointer.clone(), &Color::rgb8(0xE7, 0x4C, 0x3C));
        ctx.stroke(pointer, &black::LICORICE, 1.5);
    }
}

/// Screen angle, in radians, where sector `index` begins.
///
/// Sector i starts one sector-width clockwise of the pointer, so the wedge painted under the
/// pointer is the one `landing_index` resolves to.
pub fn sector_start_angle(index: usize, rotation: f64, sweep: f64) -> f64 {
    -FRAC_PI_2 + rotation + (index + 1) as f64 * sweep
}

impl WheelWidget {
    fn paint_label(&self, ctx: &mut PaintCtx, sector: &Sector, center: Point, radius: f64, angle: f64) {
        let layout = match ctx
            .text()
            .new_text_layout(sector.text.clone())
            .font(FontFamily::SYSTEM_UI, self.config.label_text_size)
            .text_color(black::LICORICE)
            .build()
        {
            Ok(layout) => layout,
            Err(err) => {
                log::warn!("Failed to lay out sector label {:?}: {err}", sector.text);
                return;
            }
        };

        let label_size = layout.size();
        // Right-align against the rim, never past the hub
        let x = (radius * 0.9 - label_size.width).max(radius * (HUB_RADIUS_RATIO + 0.05));
        ctx.with_save(|ctx| {
            ctx.transform(Affine::translate(center.to_vec2()) * Affine::rotate(angle));
            ctx.draw_text(&layout, Point::new(x, -label_size.height / 2.0));
        });
    }
}
