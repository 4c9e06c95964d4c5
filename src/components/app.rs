use super::{custom_cursor::CustomCursor, host_page::HostPage};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <CustomCursor />
            <HostPage />
        </>
    }
}
