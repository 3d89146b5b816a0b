// src/lib.rs — stateless components + mount entry (Rust + Yew + WASM)

pub mod app;
pub mod attrs;
pub mod components;
pub mod error;

pub use app::{mount, mount_into, App, ROOT_ID};
pub use attrs::Attrs;
pub use components::{
    Button, ButtonKind, ButtonProps, Greeting, Input, InputProps, ValueGreeting,
    ValueGreetingProps,
};
pub use error::MountError;
