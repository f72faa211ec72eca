use std::rc::Rc;

use clap::Args;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use trove_core as game;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use game::{CellIndex, Direction, InputEvent};

fn category_class(category: game::Category) -> String {
    format!("cat-{}", category.key())
}

fn direction_label(direction: Direction) -> &'static str {
    use Direction::*;
    match direction {
        Up => "↑",
        Down => "↓",
        Left => "←",
        Right => "→",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(InputEvent),
    VisibilityChanged,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    title: AttrValue,
    category: game::Category,
    discovered: bool,
    #[prop_or_default]
    current: bool,
    #[prop_or_default]
    playable: bool,
    #[prop_or_default]
    prevent_default: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        title,
        category,
        discovered,
        current,
        playable,
        prevent_default,
        callback,
    } = props.clone();

    let mut class = classes!("cell");
    if discovered {
        class.push(classes!("open", category_class(category)));
    }
    if current {
        class.push("current");
    }
    if playable {
        class.push("playable");
    }

    let onclick = Callback::from(move |e: MouseEvent| {
        if e.button() != 0 {
            return;
        }
        if prevent_default {
            e.prevent_default();
        }
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <div {class} {onclick}>
            if discovered {
                <span class="title">{title}</span>
            } else {
                <span class="hidden">{"?"}</span>
            }
        </div>
    }
}

/// Startup options, parsed from the page URL fragment.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub(crate) struct GameOptions {
    /// Skip the start button and accept input right away
    #[arg(long)]
    pub autostart: bool,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub grid: Rc<game::GridModel>,
    #[prop_or_default]
    pub options: GameOptions,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::DiscoveryEngine,
    key_listener: Option<EventListener>,
    _visibility_listener: EventListener,
}

impl GameView {
    fn create_key_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();

        EventListener::new_with_options(&window(), "keydown", options, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = game::Key::from_dom_key(&event.key());
            log::trace!("keydown {:?} -> {:?}", event.key(), key);

            // Only attached while started, so the started routing applies.
            let routed = game::route(game::EngineState::Started, InputEvent::Key(key));
            if routed.prevent_default {
                event.prevent_default();
            }
            if routed.command.is_some() {
                link.send_message(Msg::Input(InputEvent::Key(key)));
            }
        })
    }

    fn create_visibility_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&document(), "visibilitychange", move |_| {
            link.send_message(Msg::VisibilityChanged)
        })
    }

    /// Keeps the global key listener attached exactly while the game is
    /// started and the page is visible.
    fn sync_key_listener(&mut self, ctx: &Context<Self>) {
        let wanted = self.engine.is_started() && !document().hidden();

        match (wanted, self.key_listener.is_some()) {
            (true, false) => {
                log::debug!("attaching key listener");
                self.key_listener = Some(Self::create_key_listener(ctx));
            }
            (false, true) => {
                log::debug!("detaching key listener");
                self.key_listener = None;
            }
            _ => {}
        }
    }

    fn view_header(&self, ctx: &Context<Self>) -> Html {
        let discovered = self.engine.discovered_count();
        let total = self.engine.items().len();

        html! {
            <header>
                <span class="badge counter">{format!("{discovered} / {total} Discovered")}</span>
                if self.engine.is_started() {
                    <span class="badge active">{"Game Active"}</span>
                } else {
                    <button class="start" onclick={ctx.link().callback(|_: MouseEvent| Msg::Input(InputEvent::StartPressed))}>
                        {"Start Game"}
                    </button>
                }
            </header>
        }
    }

    fn view_detail(&self, ctx: &Context<Self>) -> Html {
        let Some(item) = self.engine.expanded_item() else {
            return html! {};
        };
        let category = item.category();
        let onclose = ctx
            .link()
            .callback(|_: MouseEvent| Msg::Input(InputEvent::CloseDetail));

        html! {
            <div class="overlay">
                <article class={classes!("detail", category_class(category))}>
                    <button class="close" onclick={onclose}>{"×"}</button>
                    <h3>{item.title()}</h3>
                    <p>{item.body()}</p>
                    <span class="badge">{category.label()}</span>
                </article>
            </div>
        }
    }

    fn view_pad(&self, ctx: &Context<Self>) -> Html {
        let disabled = !self.engine.is_started();
        let pad_button = |direction: Direction| {
            let onclick = ctx
                .link()
                .callback(move |_: MouseEvent| Msg::Input(InputEvent::PadMove(direction)));
            html! {
                <button {disabled} {onclick}>{direction_label(direction)}</button>
            }
        };
        let ondiscover = ctx.link().callback(|_: MouseEvent| Msg::Input(InputEvent::PadActivate));

        html! {
            <nav class="pad">
                <span/>
                {pad_button(Direction::Up)}
                <span/>
                {pad_button(Direction::Left)}
                <button class="discover" {disabled} onclick={ondiscover}>{"Discover"}</button>
                {pad_button(Direction::Right)}
                <span/>
                {pad_button(Direction::Down)}
                <span/>
            </nav>
        }
    }

    fn view_discovered(&self, ctx: &Context<Self>) -> Html {
        let grid = self.engine.grid();
        if grid.discovered_count() == 0 {
            return html! {
                <footer><p class="empty">{"Nothing discovered yet!"}</p></footer>
            };
        }

        html! {
            <footer>
                {
                    for grid.discovered_items().map(|(index, item)| {
                        let onclick = ctx
                            .link()
                            .callback(move |_: MouseEvent| Msg::Input(InputEvent::CellClicked(index)));
                        html! {
                            <span
                                key={item.id().to_string()}
                                class={classes!("badge", category_class(item.category()))}
                                {onclick}
                            >
                                {item.title()}
                            </span>
                        }
                    })
                }
            </footer>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut engine = game::DiscoveryEngine::new(props.grid.as_ref().clone());
        if props.options.autostart {
            let _ = engine.apply(game::Command::Start);
        }

        let mut view = Self {
            engine,
            key_listener: None,
            _visibility_listener: Self::create_visibility_listener(ctx),
        };
        view.sync_key_listener(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(event) => match self.engine.handle(event) {
                Ok(outcome) => {
                    if outcome == game::CommandOutcome::Started {
                        self.sync_key_listener(ctx);
                    }
                    outcome.has_update()
                }
                Err(err) => {
                    log::warn!("rejected {:?}: {}", event, err);
                    false
                }
            },
            Msg::VisibilityChanged => {
                self.sync_key_listener(ctx);
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.key_listener.take().is_some() {
            log::debug!("detached key listener on teardown");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let side = self.engine.side();
        let position = self.engine.position();
        let state = self.engine.state();
        let playable = self.engine.is_started();
        let prevent_default = game::route(state, InputEvent::CellClicked(0)).prevent_default;
        let callback = ctx
            .link()
            .callback(|index: CellIndex| Msg::Input(InputEvent::CellClicked(index)));

        html! {
            <section class="trove">
                {self.view_header(ctx)}
                <div class="grid" style={format!("grid-template-columns: repeat({side}, 1fr)")}>
                    {self.view_detail(ctx)}
                    {
                        for self.engine.items().iter().enumerate().map(|(index, item)| html! {
                            <CellView
                                key={item.id().to_string()}
                                {index}
                                title={AttrValue::from(item.title().to_string())}
                                category={item.category()}
                                discovered={item.is_discovered()}
                                current={index == position}
                                {playable}
                                {prevent_default}
                                callback={callback.clone()}
                            />
                        })
                    }
                </div>
                {self.view_pad(ctx)}
                {self.view_discovered(ctx)}
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_classes_use_catalog_keys() {
        assert_eq!(category_class(game::Category::Hobbies), "cat-hobbies");
        assert_eq!(category_class(game::Category::Facts), "cat-facts");
    }

    #[test]
    fn every_direction_has_a_pad_label() {
        let labels: Vec<_> = Direction::ALL.into_iter().map(direction_label).collect();
        assert_eq!(labels, ["↑", "↓", "←", "→"]);
    }
}
