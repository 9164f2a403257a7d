use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { 
            class: "container mx-auto p-4",
            h1 { 
                class: "text-2xl font-bold mb-4",
                "Theme Switcher"
            }
            p { 
                class: "text-gray-600 dark:text-gray-300",
                "Use the button in the top right corner to switch between light and dark mode. Your choice is remembered on this device."
            }
        }
    }
}
