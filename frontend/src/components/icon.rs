use shared::IconKey;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: IconKey,
    #[prop_or_default]
    pub class: Classes,
}

/// Glyph from the lucide icon font loaded in index.html
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <i class={classes!("icon", format!("icon-{}", props.icon.as_str()), props.class.clone())}></i>
    }
}
