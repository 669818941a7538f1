use common::model::insight::{InsightCategory, InsightEntry, InsightFilter};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Field, Msg};
use super::state::InsightsPanel;
use crate::components::archive::{delete_button, error_line, LOADING};
use crate::helpers::event_value;
use crate::top_sheet::TopSheet;

pub fn view(panel: &InsightsPanel, ctx: &Context<InsightsPanel>) -> Html {
    let link = ctx.link();
    let mut visible = panel.visible().peekable();
    let empty = visible.peek().is_none();

    html! {
        <section class="insights">
            <h2>{ "영감" }</h2>
            <p class="muted">{ "함께 만드는 보물창고 · 모임원이 공유한 자료" }</p>

            <button class="primary wide" onclick={link.callback(|_| Msg::OpenForm)}>{ "영감 공유하기" }</button>

            { filter_chips(panel, link) }
            { error_line(&panel.error) }

            if panel.loading && panel.entries.is_empty() {
                <p class="muted">{ LOADING }</p>
            } else if empty && panel.error.is_none() {
                <p class="muted">{ "아직 공유된 영감이 없어요. 첫 번째로 공유해 보세요!" }</p>
            }
            <div class="card-grid">
                { for visible.map(|entry| insight_card(entry, link)) }
            </div>

            { share_form(panel, link) }
        </section>
    }
}

fn filter_chips(panel: &InsightsPanel, link: &Scope<InsightsPanel>) -> Html {
    html! {
        <div class="chips">
            { for InsightFilter::chips().map(|filter| html! {
                <button
                    class={classes!("chip", (panel.filter == filter).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetFilter(filter))}
                >
                    { filter.label() }
                </button>
            }) }
        </div>
    }
}

fn insight_card(entry: &InsightEntry, link: &Scope<InsightsPanel>) -> Html {
    let like_id = entry.id.clone();
    let delete_id = entry.id.clone();
    let description = if entry.description.is_empty() {
        "소개 없음".to_string()
    } else {
        entry.description.clone()
    };

    html! {
        <article class="card insight" key={entry.id.clone()}>
            <div class="entry-head">
                <span class="chip small">{ entry.category.label() }</span>
                { delete_button(link.callback(move |_| Msg::Delete(delete_id.clone()))) }
            </div>
            <h3>{ entry.title.clone() }</h3>
            <p class="muted">{ description }</p>
            <p class="author">{ format!("공유: {}", entry.author) }</p>
            <div class="insight-actions">
                <button
                    class={classes!("like", entry.liked_by_me.then_some("liked"))}
                    aria-label="공감"
                    onclick={link.callback(move |_| Msg::Like(like_id.clone()))}
                >
                    { format!("{} {}", if entry.liked_by_me { "♥" } else { "♡" }, entry.likes) }
                </button>
                if !entry.url.is_empty() {
                    <a href={entry.url.clone()} target="_blank" rel="noopener noreferrer">{ "자료 보러가기" }</a>
                }
            </div>
        </article>
    }
}

fn share_form(panel: &InsightsPanel, link: &Scope<InsightsPanel>) -> Html {
    let edit = |field: Field| link.callback(move |e: InputEvent| Msg::Edit(field, event_value(&e)));
    let category = panel.form.category;

    html! {
        <TopSheet node_ref={panel.form_ref.clone()}>
            <form class="share-form" onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                <h3>{ "영감 공유하기" }</h3>
                <label class="field">
                    <span>{ "제목" }</span>
                    <input type="text" value={panel.form.title.clone()} placeholder="자료 제목" oninput={edit(Field::Title)} />
                </label>
                <label class="field">
                    <span>{ "링크 (URL)" }</span>
                    <input type="url" value={panel.form.url.clone()} placeholder="https://" oninput={edit(Field::Url)} />
                </label>
                <label class="field">
                    <span>{ "카테고리" }</span>
                    <select onchange={link.callback(|e: Event| Msg::Edit(Field::Category, event_value(&e)))}>
                        { for InsightCategory::ALL.into_iter().map(|option| html! {
                            <option value={option.as_str()} selected={option == category}>{ option.label() }</option>
                        }) }
                    </select>
                </label>
                <label class="field">
                    <span>{ "짧은 소개" }</span>
                    <input type="text" value={panel.form.description.clone()} placeholder="한 줄로 소개해 주세요" oninput={edit(Field::Description)} />
                </label>
                <div class="actions">
                    <button type="button" class="secondary" onclick={link.callback(|_| Msg::CloseForm)}>{ "취소" }</button>
                    <button type="submit" disabled={panel.saving}>
                        { if panel.saving { "공유 중..." } else { "공유하기" } }
                    </button>
                </div>
            </form>
        </TopSheet>
    }
}
