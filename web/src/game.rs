use crate::settings;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Interval;
use oddtint_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Pick(game::CellIndex),
    /// One countdown second, tagged with the schedule it came from.
    Tick(u32),
    ToggleSettings,
    UpdateSettings(settings::Settings),
}

fn swatch_style(color: game::Hsl) -> String {
    format!(
        "background-color:hsl({}, {}%, {}%)",
        color.hue(),
        color.saturation(),
        color.lightness()
    )
}

fn state_class(state: game::EngineState) -> Classes {
    use game::EngineState::*;
    classes!(match state {
        Ready => "not-started",
        Active => "in-progress",
        Ended => "time-up",
    })
}

#[derive(Properties, Clone, PartialEq)]
struct SwatchProps {
    index: game::CellIndex,
    color: game::Hsl,
    #[prop_or_default]
    revealed: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(SwatchView)]
fn swatch_component(props: &SwatchProps) -> Html {
    let SwatchProps {
        index,
        color,
        revealed,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!("swatch");
    if revealed {
        class.push("odd-one");
    }
    if locked {
        class.push("locked");
    }

    let style = swatch_style(color);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("swatch {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {style} {onclick}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a generator seed instead of a random one
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    settings: settings::Settings,
    engine: game::RoundEngine<game::RandomRoundGenerator>,
    timer: Option<Interval>,
    timer_epoch: u32,
    settings_open: bool,
}

impl GameView {
    /// Starts a fresh one-second schedule; replacing the handle drops and
    /// cancels the previous one, so at most one schedule is ever live.
    fn restart_timer(&mut self, ctx: &Context<Self>) {
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
        let epoch = self.timer_epoch;
        let link = ctx.link().clone();
        self.timer = Some(Interval::new(1_000, move || {
            link.send_message(Msg::Tick(epoch))
        }));
    }

    fn stop_timer(&mut self) {
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
        self.timer = None;
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("generator seed: {}", seed);

        Self {
            settings: LocalOrDefault::local_or_default(),
            engine: game::RoundEngine::new(
                game::GameConfig::standard(),
                game::RandomRoundGenerator::from_seed(seed),
            ),
            timer: None,
            timer_epoch: 0,
            settings_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.engine.start();
                self.restart_timer(ctx);
                true
            }
            Pick(index) => {
                let outcome = self.engine.pick(index);
                log::debug!("pick {}: {:?}", index, outcome);
                if outcome.ends_game() {
                    self.stop_timer();
                }
                outcome.has_update()
            }
            Tick(epoch) if epoch != self.timer_epoch => {
                // a cancelled schedule may still have a message in flight
                log::trace!("stale tick ignored");
                false
            }
            Tick(_) => {
                let outcome = self.engine.tick();
                if outcome.ends_game() {
                    self.stop_timer();
                }
                outcome.has_update()
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                if !self.settings_open {
                    self.settings = LocalOrDefault::local_or_default();
                }
                true
            }
            UpdateSettings(settings) => {
                if self.settings != settings {
                    self.settings = settings;
                    self.settings.local_save();
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use settings::SettingsView;
        use Msg::*;

        let snapshot = self.engine.snapshot();
        let side = snapshot.grid_side();
        let layout = snapshot.layout();
        let reveal = self.settings.reveal_target && snapshot.state().is_finished();
        let locked = !snapshot.is_active();

        let score = format_for_counter(snapshot.score() as i32);
        let time_left = format_for_counter(snapshot.time_left() as i32);

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Start
        });
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);
        let cb_settings_change = ctx.link().callback(UpdateSettings);

        html! {
            <div class="oddtint">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside>{score}</aside>
                    <span>
                        <button
                            class={state_class(snapshot.state())}
                            title={format!("level {}", snapshot.level())}
                            onclick={cb_start}
                        />
                    </span>
                    <aside>{time_left}</aside>
                </nav>
                <table>
                    {
                        for (0..side).map(|row| html! {
                            <tr>
                                {
                                    for (0..side).map(|col| {
                                        let index = game::CellIndex::from(row)
                                            * game::CellIndex::from(side)
                                            + game::CellIndex::from(col);
                                        let color = layout.color_at(index);
                                        let revealed = reveal && layout.is_target(index);
                                        let callback = ctx.link().callback(Msg::Pick);
                                        html! {
                                            <SwatchView {index} {color} {revealed} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings}
                    on_change={cb_settings_change}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_style_paints_with_css_hsl() {
        let color = game::Hsl::new(210, 60, 50);
        assert_eq!(swatch_style(color), "background-color:hsl(210, 60%, 50%)");
    }

    #[test]
    fn state_classes_track_the_engine_lifecycle() {
        assert_eq!(
            state_class(game::EngineState::Ready),
            classes!("not-started")
        );
        assert_eq!(
            state_class(game::EngineState::Active),
            classes!("in-progress")
        );
        assert_eq!(state_class(game::EngineState::Ended), classes!("time-up"));
    }

    #[test]
    fn seeded_engine_drives_a_round_the_view_can_render() {
        let mut engine = game::RoundEngine::new(
            game::GameConfig::standard(),
            game::RandomRoundGenerator::from_seed(7),
        );
        engine.start();

        let snapshot = engine.snapshot();
        let layout = snapshot.layout();
        assert!(layout.target_index() < snapshot.total_cells());

        assert_eq!(
            engine.pick(layout.target_index()),
            game::PickOutcome::Hit
        );
        assert_eq!(engine.snapshot().score(), 1);
    }
}
