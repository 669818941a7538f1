//! Root component: the tab bar, the settings dialog and the store
//! configuration every data panel needs.
//!
//! The store's public url and key are fetched once from `/api/config`; the
//! archive and insight tabs stay disabled until they arrive.

use common::requests::ClientConfig;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::archive::ArchiveTab;
use crate::components::home::HomeTab;
use crate::components::insights::InsightsPanel;
use crate::components::journey::JourneyTab;
use crate::components::settings_dialog::SettingsDialog;
use crate::store::StoreClient;

const CONFIG_PATH: &str = "/api/config";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Journey,
    Archive,
    Insight,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Home, Tab::Journey, Tab::Archive, Tab::Insight];

    fn label(self) -> &'static str {
        match self {
            Tab::Home => "홈",
            Tab::Journey => "여정",
            Tab::Archive => "저장소",
            Tab::Insight => "영감",
        }
    }
}

pub enum Msg {
    SetTab(Tab),
    ConfigLoaded(Result<ClientConfig, String>),
    OpenSettings,
    CloseSettings,
}

pub struct App {
    tab: Tab,
    store: Option<StoreClient>,
    config_error: Option<String>,
    settings_open: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_config().await));
        });
        Self {
            tab: Tab::Home,
            store: None,
            config_error: None,
            settings_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                let changed = self.tab != tab;
                self.tab = tab;
                changed
            }
            Msg::ConfigLoaded(Ok(config)) if config.is_configured() => {
                self.store = Some(StoreClient::new(&config));
                self.config_error = None;
                true
            }
            Msg::ConfigLoaded(Ok(_)) => {
                self.config_error =
                    Some("서버에 Supabase 주소와 키가 설정되지 않았어요. 관리자에게 문의해 주세요.".to_string());
                true
            }
            Msg::ConfigLoaded(Err(message)) => {
                gloo_console::error!(format!("client config unavailable: {message}"));
                self.config_error = Some(message);
                true
            }
            Msg::OpenSettings => {
                self.settings_open = true;
                true
            }
            Msg::CloseSettings => {
                self.settings_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app">
                <header class="app-header">
                    <h1>{ "데이터 북클럽" }</h1>
                    <button class="icon" title="노션 설정" onclick={link.callback(|_| Msg::OpenSettings)}>{ "⚙" }</button>
                </header>

                <SettingsDialog open={self.settings_open} on_close={link.callback(|_| Msg::CloseSettings)} />

                <main class="content">
                    { self.tab_content() }
                </main>

                <nav class="tab-bar">
                    { for Tab::ALL.into_iter().map(|tab| html! {
                        <button
                            class={classes!("tab-btn", (self.tab == tab).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetTab(tab))}
                        >
                            { tab.label() }
                        </button>
                    }) }
                </nav>
            </div>
        }
    }
}

impl App {
    fn tab_content(&self) -> Html {
        match (self.tab, &self.store) {
            (Tab::Home, _) => html! { <HomeTab /> },
            (Tab::Journey, _) => html! { <JourneyTab /> },
            (Tab::Archive, Some(store)) => html! { <ArchiveTab store={store.clone()} /> },
            (Tab::Insight, Some(store)) => html! { <InsightsPanel store={store.clone()} /> },
            (_, None) => match &self.config_error {
                Some(message) => html! { <p class="error">{ message.clone() }</p> },
                None => html! { <p class="muted">{ "불러오는 중..." }</p> },
            },
        }
    }
}

async fn fetch_config() -> Result<ClientConfig, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("서버 설정을 불러오지 못했어요: {e}"))?;
    if !response.ok() {
        return Err(format!("서버 설정을 불러오지 못했어요. (HTTP {})", response.status()));
    }
    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("서버 설정을 읽지 못했어요: {e}"))
}
