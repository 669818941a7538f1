use common::model::journey::{Step, StepStatus, JOURNEY};
use yew::{classes, html, Component, Context, Html};

use crate::helpers::today;

/// Journey tab: the reading schedule with each step's status as of today.
pub struct JourneyTab;

impl Component for JourneyTab {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        JourneyTab
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let today = today();
        html! {
            <section class="journey">
                <h2>{ "여정" }</h2>
                <ol class="timeline">
                    { for JOURNEY.iter().map(|step| step_item(step, step.status(today))) }
                </ol>
            </section>
        }
    }
}

fn step_item(step: &Step, status: StepStatus) -> Html {
    let state_class = match status {
        StepStatus::Done => "done",
        StepStatus::InProgress => "active",
        StepStatus::Upcoming => "upcoming",
    };
    let marker = match (step.stage, status) {
        (None, _) => "🎯".to_string(),
        (Some(_), StepStatus::Done) => "✅".to_string(),
        (Some(stage), _) => format!("{stage}단계"),
    };

    html! {
        <li class={classes!("step", state_class)}>
            <div class="step-head">
                <span class="marker">{ marker }</span>
                <span class="step-name">{ step.name }</span>
                <span class="step-date">{ step.date_label }</span>
                <span class="status">{ status.label() }</span>
            </div>
            if !step.books.is_empty() {
                <ul class="books">
                    { for step.books.iter().map(|book| html! {
                        <li class={classes!(book.main.then_some("main"))}>
                            { if book.main { "📘 " } else { "" } }{ book.title }
                        </li>
                    }) }
                </ul>
            }
        </li>
    }
}
