// src/app.rs — composition + mount into the host page
use gloo::console::{error, log};
use web_sys::Element;
use yew::prelude::*;
use yew::AppHandle;

use crate::attrs::Attrs;
use crate::components::{Button, Greeting, Input, ValueGreeting};
use crate::error::MountError;

/// Anchor id the host page provides: `<div id="app"></div>`.
pub const ROOT_ID: &str = "app";

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div>
            <Greeting />
            <ValueGreeting value="donaldpipowitch" />
            <Input attrs={Attrs::new().with("type", "number")} />
            <Button>{ "Test" }</Button>
        </div>
    }
}

pub fn mount() -> Result<AppHandle<App>, MountError> {
    mount_into(ROOT_ID)
}

/// Attach [`App`] to the element with id `root_id`. Call once at startup.
pub fn mount_into(root_id: &str) -> Result<AppHandle<App>, MountError> {
    let root = find_root(root_id).inspect_err(|e| {
        error!(format!("mount failed: {e}"));
    })?;

    let handle = yew::Renderer::<App>::with_root(root).render();
    log!(format!("mounted into #{root_id}"));
    Ok(handle)
}

// Needs a live document; only exercised in the browser, not by the native test suite.
fn find_root(root_id: &str) -> Result<Element, MountError> {
    web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?
        .get_element_by_id(root_id)
        .ok_or_else(|| MountError::MissingRoot(root_id.to_string()))
}
