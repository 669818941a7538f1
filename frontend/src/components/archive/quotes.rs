use common::export_gate::ExportGate;
use common::model::archive::{ArchiveKind, QuoteEntry, QuoteForm};
use common::requests::ExportResponse;
use common::store::{replace_rows, Query, StoreError, Table};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{
    begin_export, delete_button, error_line, export_button, finish_export, ExportStart,
    PanelProps, CONFIRM_DELETE, DELETED_TOAST, LOADING, SAVED_TOAST,
};
use crate::export::export_to_notion;
use crate::helpers::{confirm, event_value, show_toast};

#[derive(Clone, Copy)]
pub enum Field {
    BookTitle,
    Author,
    Quote,
    Thought,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<QuoteEntry>, StoreError>),
    Edit(Field, String),
    Submit,
    Submitted(Result<(), StoreError>),
    Delete(String),
    Deleted(String, Result<(), StoreError>),
    Export(String),
    Exported(String, Result<ExportResponse, String>),
}

/// Memorable sentences from the books, with the member's reflection.
pub struct QuotesPanel {
    form: QuoteForm,
    entries: Vec<QuoteEntry>,
    loading: bool,
    saving: bool,
    error: Option<String>,
    gate: ExportGate,
    export_error: Option<String>,
}

impl Component for QuotesPanel {
    type Message = Msg;
    type Properties = PanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            form: QuoteForm::default(),
            entries: Vec::new(),
            loading: false,
            saving: false,
            error: None,
            gate: ExportGate::new(),
            export_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let store = ctx.props().store.clone();
        let link = ctx.link().clone();
        match msg {
            Msg::Load => {
                self.loading = true;
                spawn_local(async move {
                    let query = Query::table(Table::Archives)
                        .select(QuoteEntry::COLUMNS)
                        .eq("type", ArchiveKind::Quote.as_str())
                        .newest_first();
                    link.send_message(Msg::Loaded(store.select(&query).await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                self.error = replace_rows(&mut self.entries, result)
                    .err()
                    .map(|e| e.message_or("인상 깊은 문장을 불러오지 못했어요."));
                true
            }
            Msg::Edit(field, value) => {
                match field {
                    Field::BookTitle => self.form.book_title = value,
                    Field::Author => self.form.author = value,
                    Field::Quote => self.form.quote = value,
                    Field::Thought => self.form.thought = value,
                }
                false
            }
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                match self.form.submit() {
                    Ok(row) => {
                        self.saving = true;
                        self.error = None;
                        spawn_local(async move {
                            let result = store.insert(Table::Archives, &row).await;
                            link.send_message(Msg::Submitted(result));
                        });
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
            Msg::Submitted(result) => {
                self.saving = false;
                match result {
                    Ok(()) => {
                        self.form = QuoteForm::default();
                        show_toast(SAVED_TOAST);
                        ctx.link().send_message(Msg::Load);
                    }
                    Err(e) => {
                        self.error = Some(
                            e.message_or("저장에 실패했어요. SUPABASE_SCHEMA.md를 확인해 주세요."),
                        )
                    }
                }
                true
            }
            Msg::Delete(id) => {
                if !confirm(CONFIRM_DELETE) {
                    return false;
                }
                spawn_local(async move {
                    let result = store.delete(Table::Archives, &id).await;
                    link.send_message(Msg::Deleted(id, result));
                });
                false
            }
            Msg::Deleted(id, result) => {
                match result {
                    Ok(()) => {
                        self.entries.retain(|e| e.id != id);
                        show_toast(DELETED_TOAST);
                    }
                    Err(e) => self.error = Some(e.message_or("삭제에 실패했어요.")),
                }
                true
            }
            Msg::Export(id) => {
                let Some(entry) = self.entries.iter().find(|e| e.id == id) else {
                    return false;
                };
                match begin_export(&mut self.gate, &id, &entry.export_record()) {
                    ExportStart::Ignored => false,
                    ExportStart::Refused(message) => {
                        self.export_error = Some(message);
                        true
                    }
                    ExportStart::Started(request) => {
                        self.export_error = None;
                        spawn_local(async move {
                            let result = export_to_notion(&request).await;
                            link.send_message(Msg::Exported(id, result));
                        });
                        true
                    }
                }
            }
            Msg::Exported(id, result) => {
                self.export_error = finish_export(&mut self.gate, &id, result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let edit = |field: Field| link.callback(move |e: InputEvent| Msg::Edit(field, event_value(&e)));

        html! {
            <div class="panel">
                <form class="card form" onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                    <label class="field">
                        <span>{ "도서명" }</span>
                        <input type="text" value={self.form.book_title.clone()} placeholder="읽은 책 제목" oninput={edit(Field::BookTitle)} />
                    </label>
                    <label class="field">
                        <span>{ "저자명" }</span>
                        <input type="text" value={self.form.author.clone()} placeholder="저자 이름" oninput={edit(Field::Author)} />
                    </label>
                    <label class="field">
                        <span>{ "인상 깊은 문장" }</span>
                        <textarea rows="4" value={self.form.quote.clone()} placeholder="마음에 남은 문장을 적어보세요" oninput={edit(Field::Quote)} />
                    </label>
                    <label class="field">
                        <span>{ "나의 생각" }</span>
                        <input type="text" value={self.form.thought.clone()} placeholder="짧게 적기" oninput={edit(Field::Thought)} />
                    </label>
                    <button type="submit" disabled={self.saving}>
                        { if self.saving { "저장 중..." } else { "기록하기" } }
                    </button>
                </form>

                { error_line(&self.error) }
                { error_line(&self.export_error) }

                if self.loading && self.entries.is_empty() {
                    <p class="muted">{ LOADING }</p>
                }
                <ul class="entries">
                    { for self.entries.iter().map(|entry| self.entry_card(ctx, entry)) }
                </ul>
            </div>
        }
    }
}

impl QuotesPanel {
    fn entry_card(&self, ctx: &Context<Self>, entry: &QuoteEntry) -> Html {
        let delete_id = entry.id.clone();
        let export_id = entry.id.clone();
        let quote = if entry.quote.is_empty() { "—" } else { entry.quote.as_str() };

        html! {
            <li class="card entry" key={entry.id.clone()}>
                <div class="entry-head">
                    <span class="byline">{ entry.byline() }</span>
                    { delete_button(ctx.link().callback(move |_| Msg::Delete(delete_id.clone()))) }
                </div>
                <p class="quote">{ quote }</p>
                if !entry.thought.is_empty() {
                    <p class="muted">{ entry.thought.clone() }</p>
                }
                { export_button(
                    self.gate.is_exporting(&entry.id),
                    ctx.link().callback(move |_| Msg::Export(export_id.clone())),
                ) }
            </li>
        }
    }
}
