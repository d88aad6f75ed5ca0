use counter_widget_core::{CounterWidget, View};
use yew::prelude::*;

const STATE_DUMP_STYLE: &str = "background-color: #f0f0f0; border: solid; \
    border-color: #cccccc; border-width: 1px; padding: 1rem";

pub enum Msg {
    Increment,
}

/// Yew component around [`CounterWidget`]. Yew re-runs `view` whenever
/// `update` reports a change, and `view` always starts from a fresh render.
pub struct CounterApp {
    widget: CounterWidget,
}

impl Component for CounterApp {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CounterApp { widget: CounterWidget::new() }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Increment => self.widget.handle_increment(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let View { label, sentence, state_dump } = self.widget.render();
        let onclick = ctx.link().callback(|_| Msg::Increment);
        html! {
            <div>
                <button {onclick}>{ label }</button>
                <p>{ sentence }</p>
                <pre style={STATE_DUMP_STYLE}>{ format!("state = {state_dump}") }</pre>
            </div>
        }
    }
}
