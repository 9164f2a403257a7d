use dioxus::prelude::*;
use crate::components::ThemeSwitcher;
use crate::routes::Route;
use crate::utils::ThemePreference;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let theme = use_context::<Signal<ThemePreference>>();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }
            
            nav { 
                class: if theme().is_dark() {
                    "bg-dark-primary shadow-lg transition-colors duration-200" 
                } else { 
                    "bg-white shadow-lg transition-colors duration-200" 
                },
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    Link {
                        class: if theme().is_dark() {
                            "text-white hover:text-primary transition-colors"
                        } else {
                            "text-gray-800 hover:text-primary transition-colors"
                        },
                        to: Route::Home,
                        "Home"
                    }
                    ThemeSwitcher {}
                }
            }
            Outlet::<Route> {}
        }
    }
}
