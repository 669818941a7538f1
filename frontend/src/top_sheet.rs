use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const CLASS: &str = "top-sheet";
const SHOWN_CLASS: &str = "top-sheet show";

/// Panel that slides down from the top of the page. Hidden until
/// [`open_top_sheet`] is called with its `node_ref`.
pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CLASS} id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

/// The class change is deferred so the slide transition runs after mount.
fn set_class_later(top_sheet_ref: &NodeRef, class: &'static str) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        Timeout::new(50, move || top_sheet.set_class_name(class)).forget();
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    set_class_later(top_sheet_ref, SHOWN_CLASS);
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    set_class_later(top_sheet_ref, CLASS);
}
