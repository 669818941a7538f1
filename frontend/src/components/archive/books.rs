use common::model::book::{describe_store_error, BookEntry, BookForm};
use common::store::{replace_rows, Query, StoreError, Table};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{delete_button, error_line, PanelProps, CONFIRM_DELETE, DELETED_TOAST, LOADING};
use crate::helpers::{confirm, event_value, show_toast};

#[derive(Clone, Copy)]
pub enum Field {
    Title,
    Author,
    Publisher,
    Url,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<BookEntry>, StoreError>),
    Edit(Field, String),
    Submit,
    Submitted(Result<(), StoreError>),
    Delete(String),
    Deleted(String, Result<(), StoreError>),
}

/// Books the club has read together. A project without the `books` table
/// gets setup guidance instead of the raw store error.
pub struct BooksPanel {
    form: BookForm,
    entries: Vec<BookEntry>,
    loading: bool,
    saving: bool,
    error: Option<String>,
}

impl Component for BooksPanel {
    type Message = Msg;
    type Properties = PanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            form: BookForm::default(),
            entries: Vec::new(),
            loading: false,
            saving: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let store = ctx.props().store.clone();
        let link = ctx.link().clone();
        match msg {
            Msg::Load => {
                self.loading = true;
                spawn_local(async move {
                    let query = Query::table(Table::Books)
                        .select(BookEntry::COLUMNS)
                        .newest_first();
                    link.send_message(Msg::Loaded(store.select(&query).await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                self.error = replace_rows(&mut self.entries, result)
                    .err()
                    .map(|e| describe_store_error(&e, "도서 목록을 불러오지 못했어요."));
                true
            }
            Msg::Edit(field, value) => {
                match field {
                    Field::Title => self.form.title = value,
                    Field::Author => self.form.author = value,
                    Field::Publisher => self.form.publisher = value,
                    Field::Url => self.form.url = value,
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
                            let result = store.insert(Table::Books, &row).await;
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
                        self.form = BookForm::default();
                        show_toast("도서가 저장되었습니다. 📚");
                        ctx.link().send_message(Msg::Load);
                    }
                    Err(e) => self.error = Some(describe_store_error(&e, "저장에 실패했어요.")),
                }
                true
            }
            Msg::Delete(id) => {
                if !confirm(CONFIRM_DELETE) {
                    return false;
                }
                spawn_local(async move {
                    let result = store.delete(Table::Books, &id).await;
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
                    Err(e) => self.error = Some(describe_store_error(&e, "삭제에 실패했어요.")),
                }
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
                        <span>{ "제목" }</span>
                        <input type="text" value={self.form.title.clone()} placeholder="도서 제목" oninput={edit(Field::Title)} />
                    </label>
                    <label class="field">
                        <span>{ "저자" }</span>
                        <input type="text" value={self.form.author.clone()} placeholder="저자명" oninput={edit(Field::Author)} />
                    </label>
                    <label class="field">
                        <span>{ "출판사" }</span>
                        <input type="text" value={self.form.publisher.clone()} placeholder="출판사" oninput={edit(Field::Publisher)} />
                    </label>
                    <label class="field">
                        <span>{ "구매/참고 링크 (URL)" }</span>
                        <input type="url" value={self.form.url.clone()} placeholder="https://" oninput={edit(Field::Url)} />
                    </label>
                    <button type="submit" disabled={self.saving}>
                        { if self.saving { "저장 중..." } else { "도서 추가하기" } }
                    </button>
                </form>

                { error_line(&self.error) }

                if self.loading && self.entries.is_empty() {
                    <p class="muted">{ LOADING }</p>
                } else if self.entries.is_empty() && self.error.is_none() {
                    <p class="muted">{ "아직 등록된 도서가 없어요." }</p>
                }
                <ul class="entries">
                    { for self.entries.iter().map(|book| book_card(ctx, book)) }
                </ul>
            </div>
        }
    }
}

fn book_card(ctx: &Context<BooksPanel>, book: &BookEntry) -> Html {
    let id = book.id.clone();
    html! {
        <li class="card entry" key={book.id.clone()}>
            <div class="entry-head">
                <span class="title">{ book.title.clone() }</span>
                { delete_button(ctx.link().callback(move |_| Msg::Delete(id.clone()))) }
            </div>
            <p class="muted">{ book.byline() }</p>
            if !book.url.is_empty() {
                <a href={book.url.clone()} target="_blank" rel="noopener noreferrer">{ "링크 열기" }</a>
            }
        </li>
    }
}
