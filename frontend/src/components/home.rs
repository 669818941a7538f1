//! Home tab: countdown to the kick-off, the club's principles and a link to
//! the club workspace.

use common::model::journey::{days_until, dday_text, shows_encouragement, KICKOFF};
use yew::{html, Component, Context, Html};

use crate::helpers::today;

const CLUB_WORKSPACE_URL: &str = "https://www.notion.so/304d40a761f480d6992ec0251eddd4c7";

const PRINCIPLES: [(&str, &str); 3] = [
    ("1. Burden Zero", "완독 못 해도 OK! 문장 하나면 충분해요."),
    ("2. Output First", "이 통찰을 내 포트폴리오에 어떻게 녹일까?"),
    ("3. Active Archiving", "정성 답변 데이터베이스 만들기."),
];

pub struct HomeTab;

impl Component for HomeTab {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HomeTab
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let days_left = days_until(today(), KICKOFF);

        html! {
            <section class="home">
                <div class="card dday">
                    <p class="dday-text">{ dday_text(days_left) }</p>
                    if shows_encouragement(days_left) {
                        <p class="encouragement">{ "얼마 안 남았어요! 설레는 마음으로 준비해요!" }</p>
                    }
                </div>

                <p class="tagline">{ "숫자 너머의 사람을 읽는 분석가들의 공간" }</p>

                <div class="principles">
                    <h3>{ "북클럽 3대 운영 원칙" }</h3>
                    <ul>
                        { for PRINCIPLES.iter().map(|(title, body)| html! {
                            <li>
                                <span class="principle-title">{ *title }</span>
                                <p>{ *body }</p>
                            </li>
                        }) }
                    </ul>
                </div>

                <a class="button primary wide" href={CLUB_WORKSPACE_URL} target="_blank" rel="noopener noreferrer">
                    { "우리 모임 노션 바로가기" }
                </a>
            </section>
        }
    }
}
