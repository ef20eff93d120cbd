use druid::im::Vector;
use druid::widget::{
    Button, Controller, CrossAxisAlignment, Flex, Label, List, MainAxisAlignment, Painter, Scroll, TextBox,
};
use druid::{
    theme, AppLauncher, Color, Command, Data, Env, Event, EventCtx, Lens, LensExt, LocalizedString, RenderContext,
    Target, Widget, WidgetExt, WidgetId, WindowDesc,
};

use druid_color_thesaurus::*;

use druid_wheel_widget::{
    Sector, SectorEditController, SectorEditing, WheelConfig, WheelData, WheelWidget, ADD_SECTOR, REMOVE_SECTOR,
    SPIN_WHEEL,
};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const TITLE: &str = "Spin the Wheel";
pub const BACKGROUND: Color = black::ONYX;
pub const WHEEL_ID: WidgetId = WidgetId::reserved(1);
pub const SWATCH_SIZE: f64 = 14.0;
pub const SIDEBAR_WIDTH: f64 = 280.0;
pub const HISTORY_LENGTH: usize = 5;

//////////////////////////////////////////////////////////////////////////////////////
//
// AppData
//
//////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Data, Lens, PartialEq)]
pub struct AppData {
    pub wheel: WheelData,
    pub sector_draft: String,
    /// Most recent results first.
    pub history: Vector<String>,
}

impl AppData {
    pub fn record_result(&mut self, sector: &Sector) {
        self.history.push_front(sector.text.clone());
        self.history.truncate(HISTORY_LENGTH);
    }
}

impl SectorEditing for AppData {
    fn wheel_mut(&mut self) -> &mut WheelData {
        &mut self.wheel
    }

    fn sector_draft(&self) -> &str {
        &self.sector_draft
    }

    fn clear_sector_draft(&mut self) {
        self.sector_draft.clear();
    }
}

//////////////////////////////////////////////////////////////////////////////////////
//
// SpinHistoryController
//
//////////////////////////////////////////////////////////////////////////////////////

pub struct SpinHistoryController;

impl<W: Widget<AppData>> Controller<AppData, W> for SpinHistoryController {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut AppData, env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(sector) = cmd.get(SPIN_FINISHED) {
                data.record_result(sector);
                ctx.set_handled();
                return;
            }
        }
        child.event(ctx, event, data, env);
    }
}

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() {
    let main_window = WindowDesc::new(make_ui())
        .window_size((1000.0, 620.0))
        .title(LocalizedString::new("spin-the-wheel").with_placeholder(TITLE));

    let data = AppData {
        wheel: WheelData::new(),
        sector_draft: String::new(),
        history: Vector::new(),
    };

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::SELECTION_TEXT_COLOR, Color::rgb8(0xA6, 0xCC, 0xFF));
            env.set(theme::WINDOW_BACKGROUND_COLOR, gray::DAVYS_GRAY);
            env.set(theme::CURSOR_COLOR, Color::BLACK);
            env.set(theme::BACKGROUND_LIGHT, Color::rgb8(230, 230, 230));
            env.set(theme::TEXT_COLOR, white::ALABASTER)
        })
        .log_to_console()
        .launch(data)
        .expect("launch failed");
}

fn make_ui() -> impl Widget<AppData> {
    let wheel = WheelWidget::new(WheelConfig::default())
        .with_id(WHEEL_ID)
        .lens(AppData::wheel);

    Flex::row()
        .with_flex_child(
            Flex::column()
                .with_child(Label::new(TITLE).with_text_size(28.0).padding(10.0))
                .with_flex_child(wheel, 1.0)
                .with_child(make_spin_bar()),
            1.0,
        )
        .with_child(make_sector_options())
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .controller(SectorEditController::new())
        .controller(SpinHistoryController)
}

fn make_spin_bar() -> impl Widget<AppData> {
    Flex::row()
        .with_child(
            Button::dynamic(|data: &AppData, _| {
                if data.wheel.is_spinning() {
                    "Spinning...".to_string()
                } else {
                    "Spin".to_string()
                }
            })
            .on_click(|ctx, _data: &mut AppData, _env| {
                ctx.submit_command(Command::new(SPIN_WHEEL, (), Target::Widget(WHEEL_ID)));
            }),
        )
        .with_spacer(10.0)
        .with_child(
            Label::new(|data: &AppData, _: &_| match data.wheel.last_result() {
                Some(sector) if !data.wheel.is_spinning() => format!("Result: {}", sector.text),
                _ if data.wheel.is_spinning() => String::from("Good luck!"),
                _ => String::from("Press spin to pick a sector"),
            })
            .with_text_size(20.0),
        )
        .main_axis_alignment(MainAxisAlignment::Center)
        .must_fill_main_axis(true)
        .padding(10.0)
        .background(BACKGROUND)
}

fn make_sector_options() -> impl Widget<AppData> {
    let sectors = Scroll::new(List::new(make_sector_row).with_spacing(4.0))
        .vertical()
        .lens(AppData::wheel.then(WheelData::sectors_lens()));

    Flex::column()
        .with_child(Label::new("Sectors").with_text_size(20.0))
        .with_spacer(5.0)
        .with_child(
            Flex::row()
                .with_flex_child(
                    TextBox::new()
                        .with_placeholder("New sector")
                        .expand_width()
                        .lens(AppData::sector_draft),
                    1.0,
                )
                .with_spacer(5.0)
                .with_child(Button::new("Add").on_click(|ctx, _data: &mut AppData, _env| {
                    ctx.submit_command(ADD_SECTOR);
                }))
                .must_fill_main_axis(true),
        )
        .with_spacer(10.0)
        .with_flex_child(sectors, 1.0)
        .with_child(Label::new(|data: &AppData, _: &_| {
            format!("{} sectors", data.wheel.sector_count())
        }))
        .with_spacer(10.0)
        .with_child(Label::new("Recent results").with_text_size(16.0))
        .with_child(Label::new(|data: &AppData, _: &_| {
            data.history.iter().cloned().collect::<Vec<_>>().join(", ")
        }))
        .main_axis_alignment(MainAxisAlignment::Start)
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .padding(10.0)
        .fix_width(SIDEBAR_WIDTH)
        .background(BACKGROUND)
}

fn make_sector_row() -> impl Widget<Sector> {
    let swatch = Painter::new(|ctx, data: &Sector, _env| {
        let rect = ctx.size().to_rect();
        let color = data.display_color().unwrap_or(gray::DAVYS_GRAY);
        ctx.fill(rect, &color);
    });

    Flex::row()
        .with_child(swatch.fix_size(SWATCH_SIZE, SWATCH_SIZE))
        .with_spacer(8.0)
        .with_flex_child(
            Label::new(|data: &Sector, _: &_| data.text.clone()).expand_width(),
            1.0,
        )
        .with_child(Button::new("Remove").on_click(|ctx, data: &mut Sector, _env| {
            ctx.submit_command(REMOVE_SECTOR.with(data.id));
        }))
        .must_fill_main_axis(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_data() -> AppData {
        AppData {
            wheel: WheelData::new(),
            sector_draft: String::new(),
            history: Vector::new(),
        }
    }

    #[test]
    fn finished_spins_are_recorded_newest_first() {
        let mut data = app_data();
        for _ in 0..(HISTORY_LENGTH + 2) {
            data.wheel.spin_by(5, 0).unwrap();
            let sector = data.wheel.complete_spin().unwrap();
            data.record_result(&sector);
        }
        assert_eq!(data.history.len(), HISTORY_LENGTH);
        assert!(data.history.iter().all(|text| text == "Prize 6"));

        data.record_result(&Sector::new(9, "Bonus", "#FF6B6B"));
        assert_eq!(data.history.front().map(String::as_str), Some("Bonus"));
        assert_eq!(data.history.len(), HISTORY_LENGTH);
    }
}
