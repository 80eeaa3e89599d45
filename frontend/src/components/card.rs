use yew::prelude::*;

use crate::content::CardItem;
use crate::layout::SectionKind;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub item: CardItem,
    pub kind: SectionKind,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let CardProps { item, kind } = props;
    let variant = match kind {
        SectionKind::Stats => "stat-card",
        _ => "feature-card",
    };

    html! {
        <div class={classes!("card", variant)}>
            <i class={classes!("card-icon", item.icon.class())}></i>
            <h3 class="card-title">{item.title}</h3>
            <p class="card-description">{item.description}</p>
        </div>
    }
}
