//! Insight tab: a shared board of articles, videos and tools.
//!
//! Split like the other stateful components: `messages` and `state` hold the
//! data, `update` applies messages (including the optimistic like), `view`
//! renders the filter chips, the card grid and the share form.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::InsightsPanel;

use crate::components::archive::PanelProps;

impl Component for InsightsPanel {
    type Message = Msg;
    type Properties = PanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        InsightsPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
