//! Update function for the insight board.
//!
//! Likes are optimistic: the count changes on click, the new value is written
//! to the store, and a failed write is rolled back with the `LikeToggle`
//! captured before the change.

use common::model::insight::{InsightCategory, InsightEntry, InsightForm, LikeToggle};
use common::store::{replace_rows, Query, Table};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::{Field, Msg};
use super::state::InsightsPanel;
use crate::components::archive::{CONFIRM_DELETE, DELETED_TOAST};
use crate::helpers::{confirm, show_toast};
use crate::top_sheet::{close_top_sheet, open_top_sheet};

pub fn update(panel: &mut InsightsPanel, ctx: &Context<InsightsPanel>, msg: Msg) -> bool {
    let store = ctx.props().store.clone();
    let link = ctx.link().clone();
    match msg {
        Msg::Load => {
            panel.loading = true;
            spawn_local(async move {
                let query = Query::table(Table::Insights)
                    .select(InsightEntry::COLUMNS)
                    .newest_first();
                link.send_message(Msg::Loaded(store.select(&query).await));
            });
            true
        }
        Msg::Loaded(result) => {
            panel.loading = false;
            panel.error = replace_rows(&mut panel.entries, result)
                .err()
                .map(|e| e.message_or("영감 목록을 불러오지 못했어요."));
            true
        }
        Msg::SetFilter(filter) => {
            let changed = panel.filter != filter;
            panel.filter = filter;
            changed
        }
        Msg::OpenForm => {
            open_top_sheet(&panel.form_ref);
            false
        }
        Msg::CloseForm => {
            close_top_sheet(&panel.form_ref);
            false
        }
        Msg::Edit(field, value) => {
            match field {
                Field::Title => panel.form.title = value,
                Field::Url => panel.form.url = value,
                Field::Category => panel.form.category = InsightCategory::parse(&value),
                Field::Description => panel.form.description = value,
            }
            false
        }
        Msg::Submit => {
            if panel.saving {
                return false;
            }
            match panel.form.submit() {
                Ok(row) => {
                    panel.saving = true;
                    panel.error = None;
                    spawn_local(async move {
                        let result = store.insert(Table::Insights, &row).await;
                        link.send_message(Msg::Submitted(result));
                    });
                }
                Err(e) => panel.error = Some(e.to_string()),
            }
            true
        }
        Msg::Submitted(result) => {
            panel.saving = false;
            match result {
                Ok(()) => {
                    panel.form = InsightForm::default();
                    close_top_sheet(&panel.form_ref);
                    show_toast("멋진 영감을 공유해주셔서 감사해요! 💡");
                    ctx.link().send_message(Msg::Load);
                }
                Err(e) => {
                    panel.error =
                        Some(e.message_or("공유에 실패했어요. SUPABASE_SCHEMA.md를 확인해 주세요."))
                }
            }
            true
        }
        Msg::Like(id) => {
            let Some(toggle) = LikeToggle::apply(&mut panel.entries, &id) else {
                return false;
            };
            spawn_local(async move {
                let result = store
                    .update(Table::Insights, &toggle.id, &toggle.update())
                    .await;
                link.send_message(Msg::LikeSaved(toggle, result));
            });
            true
        }
        Msg::LikeSaved(_, Ok(())) => false,
        Msg::LikeSaved(toggle, Err(e)) => {
            toggle.rollback(&mut panel.entries);
            gloo_console::warn!(format!("like rolled back for {}: {e}", toggle.id));
            panel.error = Some(e.message_or("공감을 저장하지 못했어요."));
            true
        }
        Msg::Delete(id) => {
            if !confirm(CONFIRM_DELETE) {
                return false;
            }
            spawn_local(async move {
                let result = store.delete(Table::Insights, &id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            false
        }
        Msg::Deleted(id, result) => {
            match result {
                Ok(()) => {
                    panel.entries.retain(|e| e.id != id);
                    show_toast(DELETED_TOAST);
                }
                Err(e) => panel.error = Some(e.message_or("삭제에 실패했어요.")),
            }
            true
        }
    }
}
