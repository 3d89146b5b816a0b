// src/components.rs — the four presentational components
use yew::prelude::*;
use yew::virtual_dom::VTag;

use crate::attrs::Attrs;

#[function_component(Greeting)]
pub fn greeting() -> Html {
    html! { <p>{ "Hello world!" }</p> }
}

#[derive(Properties, PartialEq)]
pub struct ValueGreetingProps {
    pub value: AttrValue,
}

#[function_component(ValueGreeting)]
pub fn value_greeting(props: &ValueGreetingProps) -> Html {
    html! { <p>{ format!("Hello {}!", props.value) }</p> }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or_default]
    pub attrs: Attrs,
}

/// `<input>` defaulting to `type="text"`; anything the caller passes wins.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let attrs = Attrs::new().with("type", "text").merged(&props.attrs);

    let mut tag = VTag::new("input");
    attrs.apply_to(&mut tag);
    tag.into()
}

/// Allowed `type` values for [`Button`].
///
/// Only `Button` for now. Submit/reset get their own components later, so the
/// rendered element never submits a form by accident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonKind {
    #[default]
    Button,
}

impl ButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub attrs: Attrs,
    #[prop_or_default]
    pub kind: ButtonKind,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    // caller first, then `type` is overwritten no matter what came in
    let attrs = props.attrs.clone().with("type", props.kind.as_str());

    let mut tag = VTag::new("button");
    attrs.apply_to(&mut tag);
    tag.add_children(props.children.iter());
    tag.into()
}
