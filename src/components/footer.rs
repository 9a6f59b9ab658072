use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <p>{ format!("© {} Meridian Private Banking. All rights reserved.", year) }</p>
            <p class="footer-note">{ "Meridian acts as agent for its clients and holds no client deposits." }</p>
        </footer>
    }
}
