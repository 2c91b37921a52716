use common::SessionConfig;
use yew::prelude::*;

mod canvas;
mod config;
mod game;
mod logging;
mod timer;

#[derive(Properties, PartialEq)]
pub struct MainProps {
    pub config: SessionConfig,
}

#[function_component(Main)]
fn app(props: &MainProps) -> Html {
    html! {
        <main>
            <h1>{ "Connect 4" }</h1>
            <game::Game config={props.config.clone()} />
        </main>
    }
}

fn main() {
    logging::init();
    let config = config::load();
    yew::Renderer::<Main>::with_props(MainProps { config }).render();
}
