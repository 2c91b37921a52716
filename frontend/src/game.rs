use crate::canvas::CanvasView;
use crate::timer::TimeoutScheduler;
use common::{
    Color, ConnectFourEngine, EngineRng, InputOutcome, Point, Rect, RevealTicket, SessionConfig,
    SessionController, StatusLine,
};
use std::fmt;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

#[derive(Debug, Clone)]
pub enum Message {
    Click { display: Rect, pointer: Point },
    Reveal(RevealTicket),
}

impl From<RevealTicket> for Message {
    fn from(ticket: RevealTicket) -> Self {
        Message::Reveal(ticket)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Click { pointer, .. } => write!(f, "Click: ({}, {})", pointer.x, pointer.y),
            Message::Reveal(ticket) => write!(f, "Reveal: {}", ticket.seq),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GameProps {
    pub config: SessionConfig,
}

type Controller = SessionController<ConnectFourEngine<EngineRng>, TimeoutScheduler<Game>, CanvasView>;

pub struct Game {
    canvas: NodeRef,
    controller: Controller,
}

impl Component for Game {
    type Message = Message;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        let canvas = NodeRef::default();
        let engine = ConnectFourEngine::new(config.rows, config.cols, EngineRng::default());
        let mut controller = SessionController::new(
            engine,
            TimeoutScheduler::new(ctx.link().clone()),
            CanvasView::new(canvas.clone(), config.palette.clone()),
            config.pacing,
        );
        // Nothing is mounted yet, so the first draw happens in `rendered`
        controller.initialize();
        Game { canvas, controller }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        tracing::trace!("update: {}", msg);
        match msg {
            Message::Click { display, pointer } => matches!(
                self.controller.handle_pointer_input(display, pointer),
                InputOutcome::Applied(_)
            ),
            Message::Reveal(ticket) => self.controller.commit_reveal(ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let status = match self.controller.status_line() {
            Some(status) => status,
            None => return html! {},
        };
        let onclick = {
            let canvas = self.canvas.clone();
            ctx.link().batch_callback(move |ev: MouseEvent| {
                // The on-screen size can differ from the intrinsic one
                let rect = canvas.cast::<HtmlCanvasElement>()?.get_bounding_client_rect();
                Some(Message::Click {
                    display: Rect::new(rect.x(), rect.y(), rect.width(), rect.height()),
                    pointer: Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())),
                })
            })
        };
        html! {
            <>
                <StatusInfo status={status} marker={config.palette.marker(status).cloned()} />
                <canvas
                    id="canvas"
                    ref={self.canvas.clone()}
                    width={config.canvas_width().to_string()}
                    height={config.canvas_height().to_string()}
                    {onclick}
                    class={classes!("border-solid-1px", "display-block")}>
                </canvas>
            </>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.controller.redraw();
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.teardown();
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub status: StatusLine,
    pub marker: Option<Color>,
}

#[function_component(StatusInfo)]
pub fn status_info(props: &StatusProps) -> Html {
    html! {
        <p>
            { props.status.to_string() }
            {
                match &props.marker {
                    Some(color) => html! {
                        <span
                            class={classes!("circle", "vertical-align-text-top", "margin-left-2")}
                            style={format!("background-color: {}", color)}>
                        </span>
                    },
                    None => html! {},
                }
            }
        </p>
    }
}
