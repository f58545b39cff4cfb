use super::search_page::{SearchMsg, SearchPage};
use shared::{MatchCard, MatchResult, present};
use yew::html::Scope;
use yew::prelude::*;

pub fn render_results(matches: &[MatchResult], link: &Scope<SearchPage>) -> Html {
    let cards = present(matches);
    if cards.is_empty() {
        return html! {};
    }

    html! {
        <div class="result-grid">
            { for cards.into_iter().map(|card| render_card(card, link)) }
        </div>
    }
}

fn render_card(card: MatchCard, link: &Scope<SearchPage>) -> Html {
    let index = card.index;

    html! {
        <div class="result-card" key={index.to_string()}>
            <img src={card.image_src} alt={card.alt} />
            <p class="result-filename">{ &card.filename }</p>
            {
                match &card.person_name {
                    Some(person) => html! { <p class="result-person">{ person }</p> },
                    None => html! {},
                }
            }
            <p class="muted">
                {"Similarity: "}
                <span class="result-distance">{ card.distance_label }</span>
            </p>
            <button
                class="primary-btn"
                aria-label={format!("Download image {}", card.filename)}
                onclick={link.callback(move |_| SearchMsg::Export(index))}
            >
                {"Download"}
            </button>
        </div>
    }
}
