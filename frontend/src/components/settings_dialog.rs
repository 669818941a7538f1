//! Notion export settings, edited in a top sheet.
//!
//! The stored values are read each time the sheet opens and written back,
//! trimmed, on save.

use common::model::settings::NotionSettings;
use yew::prelude::*;

use crate::helpers::{event_value, show_toast};
use crate::settings;
use crate::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

#[derive(Properties, PartialEq)]
pub struct SettingsDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[derive(Clone, Copy)]
pub enum Field {
    ApiKey,
    DatabaseId,
    DataSourceId,
    TitleProperty,
}

pub enum Msg {
    Edit(Field, String),
    Save,
    Cancel,
}

pub struct SettingsDialog {
    settings: NotionSettings,
    sheet_ref: NodeRef,
    error: Option<String>,
}

impl Component for SettingsDialog {
    type Message = Msg;
    type Properties = SettingsDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            settings: settings::load(),
            sheet_ref: NodeRef::default(),
            error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let open = ctx.props().open;
        if open && !old_props.open {
            self.settings = settings::load();
            self.error = None;
            open_top_sheet(&self.sheet_ref);
        } else if !open && old_props.open {
            close_top_sheet(&self.sheet_ref);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                let target = match field {
                    Field::ApiKey => &mut self.settings.api_key,
                    Field::DatabaseId => &mut self.settings.database_id,
                    Field::DataSourceId => &mut self.settings.data_source_id,
                    Field::TitleProperty => &mut self.settings.title_property,
                };
                *target = value;
                false
            }
            Msg::Save => match settings::save(&self.settings) {
                Ok(saved) => {
                    self.settings = saved;
                    self.error = None;
                    show_toast("노션 설정을 저장했어요.");
                    ctx.props().on_close.emit(());
                    true
                }
                Err(message) => {
                    self.error = Some(message);
                    true
                }
            },
            Msg::Cancel => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |field: Field, label: &str, value: &str, placeholder: &str, kind: &str| {
            html! {
                <label class="field">
                    <span>{ label.to_string() }</span>
                    <input
                        type={kind.to_string()}
                        value={value.to_string()}
                        placeholder={placeholder.to_string()}
                        oninput={link.callback(move |e: InputEvent| Msg::Edit(field, event_value(&e)))}
                    />
                </label>
            }
        };

        html! {
            <TopSheet node_ref={self.sheet_ref.clone()}>
                <div class="settings-dialog">
                    <h2>{ "노션 연동 설정" }</h2>
                    { input(Field::ApiKey, "Notion API Key", &self.settings.api_key, "secret_...", "password") }
                    { input(Field::DatabaseId, "Database ID", &self.settings.database_id, "데이터베이스 URL 또는 32자리 ID", "text") }
                    { input(Field::DataSourceId, "Data source ID", &self.settings.data_source_id, "'데이터 소스 ID 복사'로 받은 값", "text") }
                    { input(Field::TitleProperty, "제목 속성 이름", &self.settings.title_property, "Name", "text") }
                    <p class="hint">
                        { "Data source ID를 넣으면 Database ID보다 우선 사용됩니다. 키는 이 브라우저에만 저장됩니다." }
                    </p>
                    if let Some(error) = &self.error {
                        <p class="error">{ error.clone() }</p>
                    }
                    <div class="actions">
                        <button class="secondary" onclick={link.callback(|_| Msg::Cancel)}>{ "닫기" }</button>
                        <button onclick={link.callback(|_| Msg::Save)}>{ "저장" }</button>
                    </div>
                </div>
            </TopSheet>
        }
    }
}
