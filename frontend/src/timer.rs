use common::{RevealTicket, Scheduler};
use gloo::timers::callback::Timeout;
use std::time::Duration;
use yew::html::Scope;
use yew::Component;

// Dropping the `Timeout` clears the timer
pub struct TimeoutScheduler<C: Component> {
    link: Scope<C>,
}

impl<C: Component> TimeoutScheduler<C> {
    pub fn new(link: Scope<C>) -> Self {
        TimeoutScheduler { link }
    }
}

impl<C> Scheduler for TimeoutScheduler<C>
where
    C: Component,
    C::Message: From<RevealTicket>,
{
    type Task = Timeout;

    fn schedule(&mut self, delay: Duration, ticket: RevealTicket) -> Timeout {
        let link = self.link.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || link.send_message(C::Message::from(ticket)))
    }
}
