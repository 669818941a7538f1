//! Archive tab: quotes, interview answers and the club's book list, each in
//! its own sub-tab. Quotes and interview answers can be exported to Notion;
//! the helpers for that flow live here.

mod books;
mod interviews;
mod quotes;

use common::export_gate::ExportGate;
use common::model::settings::INCOMPLETE_MESSAGE;
use common::notion::record::ExportRecord;
use common::requests::{ExportRequest, ExportResponse};
use yew::prelude::*;

use crate::helpers::{alert, now_ms, show_toast};
use crate::settings;
use crate::store::StoreClient;

use books::BooksPanel;
use interviews::InterviewsPanel;
use quotes::QuotesPanel;

pub(crate) const SAVED_TOAST: &str = "성공적으로 저장되었습니다! 🎉";
pub(crate) const DELETED_TOAST: &str = "삭제가 완료되었습니다. 🗑️";
pub(crate) const CONFIRM_DELETE: &str = "정말로 삭제하시겠습니까?";
pub(crate) const LOADING: &str = "불러오는 중...";

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub store: StoreClient,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SubTab {
    Quotes,
    Interviews,
    Books,
}

impl SubTab {
    const ALL: [SubTab; 3] = [SubTab::Quotes, SubTab::Interviews, SubTab::Books];

    fn label(self) -> &'static str {
        match self {
            SubTab::Quotes => "인상 깊은 문장",
            SubTab::Interviews => "면접 답변 매칭",
            SubTab::Books => "함께 읽은 도서",
        }
    }
}

pub struct ArchiveTab {
    active: SubTab,
}

impl Component for ArchiveTab {
    type Message = SubTab;
    type Properties = PanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: SubTab::Quotes,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, tab: Self::Message) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let store = ctx.props().store.clone();
        html! {
            <section class="archive">
                <h2>{ "저장소" }</h2>
                <div class="sub-tabs">
                    { for SubTab::ALL.into_iter().map(|tab| html! {
                        <button
                            class={classes!("sub-tab", (self.active == tab).then_some("active"))}
                            onclick={ctx.link().callback(move |_| tab)}
                        >
                            { tab.label() }
                        </button>
                    }) }
                </div>
                {
                    match self.active {
                        SubTab::Quotes => html! { <QuotesPanel {store} /> },
                        SubTab::Interviews => html! { <InterviewsPanel {store} /> },
                        SubTab::Books => html! { <BooksPanel {store} /> },
                    }
                }
            </section>
        }
    }
}

/// Outcome of an export click.
pub(crate) enum ExportStart {
    /// Dropped by the gate; nothing to show.
    Ignored,
    /// The settings are incomplete; the message explains what is missing.
    Refused(String),
    Started(ExportRequest),
}

/// Claims the gate for `id` and builds the request from the stored settings.
pub(crate) fn begin_export(gate: &mut ExportGate, id: &str, record: &ExportRecord) -> ExportStart {
    if !gate.try_begin(id, now_ms()) {
        return ExportStart::Ignored;
    }
    let settings = settings::load();
    if !settings.is_ready() {
        gate.finish(id);
        return ExportStart::Refused(INCOMPLETE_MESSAGE.to_string());
    }
    ExportStart::Started(ExportRequest::new(&settings, record))
}

/// Releases the gate and reports the result. Failures stay on the panel and
/// are also raised as an alert.
pub(crate) fn finish_export(
    gate: &mut ExportGate,
    id: &str,
    result: Result<ExportResponse, String>,
) -> Option<String> {
    gate.finish(id);
    match result {
        Ok(_) => {
            show_toast("노션으로 내보냈어요! 🚀");
            None
        }
        Err(message) => {
            alert(&message);
            Some(message)
        }
    }
}

pub(crate) fn export_button(busy: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button class="export" disabled={busy} {onclick}>
            { if busy { "전송 중..." } else { "노션으로 내보내기 🚀" } }
        </button>
    }
}

pub(crate) fn delete_button(onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon delete" aria-label="삭제" title="삭제" {onclick}>{ "🗑" }</button>
    }
}

pub(crate) fn error_line(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="error">{ message.clone() }</p> },
        None => html! {},
    }
}
