// src/main.rs — expects <div id="app"></div> in index.html
fn main() {
    if let Err(e) = hello_sfc::mount() {
        // nothing to fall back to without an anchor
        wasm_bindgen::throw_str(&e.to_string());
    }
}
